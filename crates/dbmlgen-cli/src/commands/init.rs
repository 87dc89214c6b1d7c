use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use dbmlgen_config::DbmlgenConfig;
use dbmlgen_loader::CONFIG_FILE_NAME;

pub fn cmd_init() -> Result<()> {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    if path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    let config = DbmlgenConfig::default();
    let json = serde_json::to_string_pretty(&config).context("serialize default config")?;
    fs::write(&path, json).with_context(|| format!("write {}", CONFIG_FILE_NAME))?;
    println!("{} {}", "Created".bright_green(), path.display());
    Ok(())
}
