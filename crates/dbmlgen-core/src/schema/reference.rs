use serde::{Deserialize, Serialize};

/// Referential action applied to dependent rows when the referenced row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum ReferenceAction {
    Cascade,
    Restrict,
    NoAction,
    SetNull,
    SetDefault,
}

impl ReferenceAction {
    /// DBML spelling used inside `[delete: ...]`.
    pub fn as_dbml(self) -> &'static str {
        match self {
            ReferenceAction::Cascade => "Cascade",
            ReferenceAction::Restrict => "Restrict",
            ReferenceAction::NoAction => "No Action",
            ReferenceAction::SetNull => "Set Null",
            ReferenceAction::SetDefault => "Set Default",
        }
    }
}
