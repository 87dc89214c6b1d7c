use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dbmlgen_config::{DbmlgenConfig, FileFormat};
use dbmlgen_core::Datamodel;

/// Load a schema description from a `.json`, `.yaml` or `.yml` file.
pub fn load_datamodel(path: &Path) -> Result<Datamodel> {
    let Some(format) = FileFormat::from_path(path) else {
        anyhow::bail!(
            "unsupported schema description format: {} (expected .json, .yaml or .yml)",
            path.display()
        );
    };
    load_datamodel_as(path, format)
}

/// Load a schema description, parsing it as `format` whatever its extension.
pub fn load_datamodel_as(path: &Path, format: FileFormat) -> Result<Datamodel> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read schema description: {}", path.display()))?;

    let datamodel: Datamodel = if format.is_yaml() {
        serde_yaml::from_str(&content)
            .with_context(|| format!("parse YAML schema description: {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("parse JSON schema description: {}", path.display()))?
    };

    Ok(datamodel)
}

/// Load the schema description named by `config`, relative to `project_root`
/// when given.
///
/// `format` forces a format; otherwise it is detected from the extension.
pub fn load_datamodel_for(
    config: &DbmlgenConfig,
    project_root: Option<&Path>,
    format: Option<FileFormat>,
) -> Result<Datamodel> {
    let path = match project_root {
        Some(root) => root.join(config.schema_path()),
        None => config.schema_path().to_path_buf(),
    };
    if !path.exists() {
        anyhow::bail!("schema description not found: {}", path.display());
    }
    match format {
        Some(format) => load_datamodel_as(&path, format),
        None => load_datamodel(&path),
    }
}
