use serde::{Deserialize, Serialize};

use crate::schema::{enum_def::EnumDef, model::ModelDef};

/// The schema description: every model and enum, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Datamodel {
    #[serde(default)]
    pub models: Vec<ModelDef>,
    #[serde(default)]
    pub enums: Vec<EnumDef>,
}

impl Datamodel {
    pub fn model(&self, name: &str) -> Option<&ModelDef> {
        self.models.iter().find(|m| m.name == name)
    }
}
