use std::path::Path;

use serde::{Deserialize, Serialize};

/// Supported file formats for schema description files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    #[default]
    Json,
    Yaml,
    Yml,
}

impl FileFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(FileFormat::Json),
            Some("yaml") => Some(FileFormat::Yaml),
            Some("yml") => Some(FileFormat::Yml),
            _ => None,
        }
    }

    pub fn is_yaml(self) -> bool {
        matches!(self, FileFormat::Yaml | FileFormat::Yml)
    }
}
