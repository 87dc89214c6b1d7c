use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dbmlgen_config::DbmlgenConfig;

pub const CONFIG_FILE_NAME: &str = "dbmlgen.json";

/// Load config from a specific path.
pub fn load_config_from_path(path: PathBuf) -> Result<DbmlgenConfig> {
    if !path.exists() {
        anyhow::bail!("{} not found at: {}", CONFIG_FILE_NAME, path.display());
    }
    read_config(&path)
}

/// Load config from project root, with fallback to defaults.
pub fn load_config_or_default(project_root: Option<PathBuf>) -> Result<DbmlgenConfig> {
    let config_path = if let Some(root) = project_root {
        root.join(CONFIG_FILE_NAME)
    } else {
        PathBuf::from(CONFIG_FILE_NAME)
    };

    if config_path.exists() {
        load_config_from_path(config_path)
    } else {
        Ok(DbmlgenConfig::default())
    }
}

fn read_config(path: &Path) -> Result<DbmlgenConfig> {
    let content = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config: DbmlgenConfig =
        serde_json::from_str(&content).with_context(|| format!("parse {}", path.display()))?;
    Ok(config)
}
