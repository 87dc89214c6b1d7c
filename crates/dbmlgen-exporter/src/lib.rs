//! Render a schema description (`Datamodel`) as DBML.
//!
//! The output is a banner comment followed by blank-line separated blocks:
//! an optional `Project`, one `Table` per model, one `Enum` per enum, one
//! `Ref:` line per one-to-one / one-to-many relation and, when requested, a
//! synthesized join `Table` per many-to-many relation.

pub mod attributes;
pub mod context;
pub mod defaults;
pub mod enums;
pub mod error;
pub mod join_table;
pub mod project;
pub mod refs;
pub mod relation;
pub mod table;

pub use context::RenderContext;
pub use dbmlgen_config::{DbmlOptions, ProjectOptions};
pub use error::DbmlError;
pub use relation::{Relation, classify_relations};

use dbmlgen_core::Datamodel;

use crate::{
    enums::render_enum, join_table::render_join_table, project::render_project, refs::render_ref,
    table::render_table,
};

/// Banner written at the top of every generated document.
pub const AUTO_GENERATED_COMMENT: &str = "//// ------------------------------------------------------
//// THIS FILE WAS AUTOMATICALLY GENERATED (DO NOT MODIFY)
//// ------------------------------------------------------";

/// Render `datamodel` with default options, synthesizing many-to-many join
/// tables iff `include_join_tables` is set.
pub fn render_schema(datamodel: &Datamodel, include_join_tables: bool) -> Result<String, DbmlError> {
    generate_dbml_schema(datamodel, &DbmlOptions::with_many_to_many(include_join_tables))
}

/// Render `datamodel` as a DBML document.
///
/// Fails without partial output when a relation cannot be classified, a
/// default value has an unsupported kind, or a join table target has no id.
pub fn generate_dbml_schema(
    datamodel: &Datamodel,
    options: &DbmlOptions,
) -> Result<String, DbmlError> {
    let ctx = RenderContext::new(datamodel, options);
    let relations = classify_relations(datamodel)?;

    let mut blocks = vec![AUTO_GENERATED_COMMENT.to_string()];

    if let Some(project) = &options.project {
        blocks.push(render_project(project));
    }
    for model in &datamodel.models {
        blocks.push(render_table(&ctx, model)?);
    }
    for enum_def in &datamodel.enums {
        blocks.push(render_enum(enum_def));
    }
    blocks.extend(relations.iter().filter_map(|r| render_ref(&ctx, r)));

    let mut join_tables = 0;
    if options.many_to_many {
        for relation in relations.iter().filter_map(Relation::as_many_to_many) {
            blocks.push(render_join_table(&ctx, relation)?);
            join_tables += 1;
        }
    }

    tracing::debug!(
        models = datamodel.models.len(),
        enums = datamodel.enums.len(),
        relations = relations.len(),
        join_tables,
        "rendered dbml schema"
    );

    Ok(blocks.join("\n\n"))
}
