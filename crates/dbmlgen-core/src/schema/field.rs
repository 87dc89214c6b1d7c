use serde::{Deserialize, Serialize};

use crate::schema::{default::DefaultValue, names::FieldName, relation::RelationDef};

/// What a field's `type` refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Scalar,
    /// Relation to another model.
    Object,
    Enum,
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub name: FieldName,
    pub kind: FieldKind,
    /// Scalar type name, or the referenced model / enum name.
    pub r#type: String,
    #[serde(default)]
    pub is_id: bool,
    #[serde(default)]
    pub is_unique: bool,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub is_list: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<RelationDef>,
}

impl FieldDef {
    /// Required scalar field with no flags set.
    pub fn scalar(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Scalar,
            r#type: ty.into(),
            is_id: false,
            is_unique: false,
            is_required: true,
            is_list: false,
            default: None,
            documentation: None,
            relation: None,
        }
    }

    /// Returns true for fields pointing at another model.
    pub fn is_relation(&self) -> bool {
        self.kind == FieldKind::Object
    }

    /// Returns true when this field is the FK side of its relation.
    pub fn holds_foreign_key(&self) -> bool {
        self.relation
            .as_ref()
            .is_some_and(RelationDef::holds_foreign_key)
    }
}
