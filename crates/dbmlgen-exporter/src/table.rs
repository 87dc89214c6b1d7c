use dbmlgen_core::{FieldDef, FieldKind, ModelDef};
use dbmlgen_naming::single_quoted;

use crate::attributes::render_attributes;
use crate::context::RenderContext;
use crate::error::DbmlError;

/// Render a model into a `Table` block.
pub fn render_table(ctx: &RenderContext<'_>, model: &ModelDef) -> Result<String, DbmlError> {
    tracing::trace!(model = %model.name, "rendering table");

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("Table {} {{", ctx.model_name(model)));

    for field in &model.fields {
        if field.is_relation() && !ctx.options.include_relation_fields {
            continue;
        }
        lines.push(render_field(ctx, model, field)?);
    }

    let indexes = render_indexes(model);
    if !indexes.is_empty() {
        lines.push(String::new());
        lines.extend(indexes);
    }

    if let Some(doc) = model.documentation.as_deref().filter(|d| !d.is_empty()) {
        lines.push(String::new());
        lines.push(format!("  Note: {}", single_quoted(doc)));
    }

    lines.push("}".into());
    Ok(lines.join("\n"))
}

/// Render one field row: `  <name> <type>[ <attributes>]`.
pub fn render_field(
    ctx: &RenderContext<'_>,
    model: &ModelDef,
    field: &FieldDef,
) -> Result<String, DbmlError> {
    Ok(format!(
        "  {} {}{}",
        field.name,
        field_type(ctx, field),
        render_attributes(model, field)?
    ))
}

fn field_type(ctx: &RenderContext<'_>, field: &FieldDef) -> String {
    match field.kind {
        // list relations use the singular model name
        FieldKind::Object => ctx.model_name_of(&field.r#type).to_string(),
        _ if field.is_list => format!("{}[]", field.r#type),
        _ => field.r#type.clone(),
    }
}

/// `indexes` block lines for composite primary keys and composite uniques.
fn render_indexes(model: &ModelDef) -> Vec<String> {
    let mut entries = Vec::new();
    if let Some(pk) = model.primary_key.as_ref().filter(|pk| !pk.is_empty()) {
        entries.push(format!("    ({}) [pk]", pk.join(", ")));
    }
    for unique in model.unique_fields.iter().filter(|u| u.len() > 1) {
        entries.push(format!("    ({}) [unique]", unique.join(", ")));
    }
    if entries.is_empty() {
        return entries;
    }

    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push("  indexes {".to_string());
    lines.extend(entries);
    lines.push("  }".to_string());
    lines
}
