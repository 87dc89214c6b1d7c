use serde::{Deserialize, Serialize};

use crate::schema::{
    field::FieldDef,
    names::{FieldName, ModelName},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ModelDef {
    pub name: ModelName,
    /// Name of the underlying database table, when mapped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_name: Option<String>,
    pub fields: Vec<FieldDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    /// Composite primary key, when declared at model level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<Vec<FieldName>>,
    /// Composite unique constraints declared at model level.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unique_fields: Vec<Vec<FieldName>>,
}

impl ModelDef {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            name: name.into(),
            db_name: None,
            fields,
            documentation: None,
            primary_key: None,
            unique_fields: Vec::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The single identifier field, if the model has one.
    pub fn id_field(&self) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.is_id)
    }

    /// Name used in the output, honouring `db_name` when `mapped` is set.
    pub fn output_name(&self, mapped: bool) -> &str {
        match (&self.db_name, mapped) {
            (Some(db_name), true) => db_name,
            _ => &self.name,
        }
    }

    /// Returns true when `fields` together are guaranteed unique: a single
    /// unique or id field, the composite primary key, or a composite unique.
    pub fn is_unique_key(&self, fields: &[FieldName]) -> bool {
        if let [single] = fields
            && let Some(field) = self.field(single)
        {
            return field.is_unique || field.is_id;
        }
        let matches = |key: &Vec<FieldName>| {
            key.len() == fields.len() && fields.iter().all(|f| key.contains(f))
        };
        self.primary_key.as_ref().is_some_and(matches) || self.unique_fields.iter().any(matches)
    }
}
