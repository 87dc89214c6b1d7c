use serde::{Deserialize, Serialize};

use crate::schema::{names::FieldName, reference::ReferenceAction};

/// Relation metadata carried by a relation field.
///
/// The side that holds the foreign key lists its scalar FK fields in
/// `from_fields` and the referenced fields in `to_fields`. The back-reference
/// side leaves both empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RelationDef {
    /// Logical relation name, when one was assigned at declaration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub from_fields: Vec<FieldName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub to_fields: Vec<FieldName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_delete: Option<ReferenceAction>,
}

impl RelationDef {
    /// Returns true when this side holds the foreign key.
    pub fn holds_foreign_key(&self) -> bool {
        !self.from_fields.is_empty()
    }
}
