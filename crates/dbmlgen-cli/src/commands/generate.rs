use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use dbmlgen_config::FileFormat;
use tokio::fs;

use crate::utils::render_dbml;

pub async fn cmd_generate(
    schema: Option<PathBuf>,
    format: Option<FileFormat>,
    out: Option<PathBuf>,
    no_many_to_many: bool,
) -> Result<()> {
    let (config, dbml) = render_dbml(schema.as_deref(), format, no_many_to_many)?;

    let out_dir = out.unwrap_or_else(|| config.output_dir().to_path_buf());
    if !out_dir.exists() {
        fs::create_dir_all(&out_dir)
            .await
            .with_context(|| format!("create output dir {}", out_dir.display()))?;
    }

    let out_path = out_dir.join(&config.output_name);
    fs::write(&out_path, &dbml)
        .await
        .with_context(|| format!("write {}", out_path.display()))?;

    println!("{} {}", "Generated".bright_green(), out_path.display());
    Ok(())
}
