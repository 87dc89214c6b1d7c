use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use dbmlgen_config::DbmlgenConfig;
use dbmlgen_core::Datamodel;
use schemars::{Schema, schema_for};

#[derive(Debug, Parser)]
#[command(
    name = "dbmlgen-schema-gen",
    about = "Emit JSON Schemas for dbmlgen schema descriptions and config."
)]
struct Args {
    /// Output directory for schema files.
    #[arg(short = 'o', long = "out", default_value = "schemas")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(args.out)
}

fn run(out: PathBuf) -> Result<()> {
    if !out.exists() {
        fs::create_dir_all(&out).with_context(|| format!("create dir {}", out.display()))?;
    }

    let written = [
        write_schema(&out, "datamodel", schema_for!(Datamodel))?,
        write_schema(&out, "config", schema_for!(DbmlgenConfig))?,
    ];

    println!("Wrote schemas:");
    for path in &written {
        println!("  {}", path.display());
    }
    Ok(())
}

/// Write `schema` to `<out>/<name>.schema.json`.
fn write_schema(out: &Path, name: &str, schema: Schema) -> Result<PathBuf> {
    let path = out.join(format!("{name}.schema.json"));
    let json = serde_json::to_string_pretty(&schema)
        .with_context(|| format!("serialize {name} schema"))?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
