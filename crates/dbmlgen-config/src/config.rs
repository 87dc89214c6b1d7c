use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};


/// Default name of the generated DBML file.
pub fn default_output_name() -> String {
    "schema.dbml".to_string()
}

fn default_true() -> bool {
    true
}

/// Optional `Project` block written at the top of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ProjectOptions {
    pub name: String,
    /// e.g. `PostgreSQL`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Options controlling how the schema description is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct DbmlOptions {
    /// Synthesize join tables for many-to-many relations.
    /// Default: `true`
    #[serde(default = "default_true")]
    pub many_to_many: bool,
    /// Keep relation fields (`author User`) inside table blocks.
    /// Default: `true`
    #[serde(default = "default_true")]
    pub include_relation_fields: bool,
    /// Use mapped database names (`dbName`) for tables instead of model names.
    /// Default: `false`
    #[serde(default)]
    pub map_to_db_schema: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectOptions>,
}

impl Default for DbmlOptions {
    fn default() -> Self {
        Self {
            many_to_many: true,
            include_relation_fields: true,
            map_to_db_schema: false,
            project: None,
        }
    }
}

impl DbmlOptions {
    /// Default options with the many-to-many flag set to `many_to_many`.
    pub fn with_many_to_many(many_to_many: bool) -> Self {
        Self {
            many_to_many,
            ..Default::default()
        }
    }
}

/// Top-level dbmlgen configuration (`dbmlgen.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct DbmlgenConfig {
    /// Schema description file (`.json`, `.yaml` or `.yml`).
    pub schema_path: PathBuf,
    /// Directory the DBML file is written to.
    pub output_dir: PathBuf,
    #[serde(default = "default_output_name")]
    pub output_name: String,
    #[serde(default)]
    pub dbml: DbmlOptions,
}

impl Default for DbmlgenConfig {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::from("schema.json"),
            output_dir: PathBuf::from("dbml"),
            output_name: default_output_name(),
            dbml: DbmlOptions::default(),
        }
    }
}

impl DbmlgenConfig {
    /// Path of the schema description.
    pub fn schema_path(&self) -> &Path {
        &self.schema_path
    }

    /// Directory where the DBML file is written.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Full path of the generated DBML file.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_name)
    }

    /// Rendering options.
    pub fn dbml(&self) -> &DbmlOptions {
        &self.dbml
    }
}
