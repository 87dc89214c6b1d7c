use std::path::Path;

use anyhow::{Context, Result};
use dbmlgen_config::{DbmlgenConfig, FileFormat};
use dbmlgen_exporter::generate_dbml_schema;
use dbmlgen_loader::{load_config_or_default, load_datamodel_for};

/// Load dbmlgen.json (or defaults) and the schema description, then render
/// the DBML document.
///
/// `schema` overrides the configured description path and `format` the
/// format detected from its extension. `skip_join_tables` turns off
/// many-to-many join tables regardless of config.
pub fn render_dbml(
    schema: Option<&Path>,
    format: Option<FileFormat>,
    skip_join_tables: bool,
) -> Result<(DbmlgenConfig, String)> {
    let mut config = load_config_or_default(None)?;
    if let Some(schema) = schema {
        config.schema_path = schema.to_path_buf();
    }
    let datamodel = load_datamodel_for(&config, None, format)?;
    tracing::debug!(
        models = datamodel.models.len(),
        enums = datamodel.enums.len(),
        "loaded schema description"
    );

    let mut options = config.dbml().clone();
    if skip_join_tables {
        options.many_to_many = false;
    }
    let dbml = generate_dbml_schema(&datamodel, &options).context("render DBML")?;
    Ok((config, dbml))
}
