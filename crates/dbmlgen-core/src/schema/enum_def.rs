use serde::{Deserialize, Serialize};

use crate::schema::names::EnumName;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct EnumDef {
    pub name: EnumName,
    pub values: Vec<String>,
}
