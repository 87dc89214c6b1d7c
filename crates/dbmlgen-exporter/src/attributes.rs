use std::fmt;

use dbmlgen_core::{FieldDef, ModelDef};
use dbmlgen_naming::single_quoted;

use crate::defaults::render_default;
use crate::error::DbmlError;

/// One inline column setting, e.g. `pk` or `default: false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSetting {
    Pk,
    Increment,
    Unique,
    NotNull,
    Default(String),
    Note(String),
}

impl fmt::Display for ColumnSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSetting::Pk => f.write_str("pk"),
            ColumnSetting::Increment => f.write_str("increment"),
            ColumnSetting::Unique => f.write_str("unique"),
            ColumnSetting::NotNull => f.write_str("not null"),
            ColumnSetting::Default(value) => write!(f, "default: {}", value),
            ColumnSetting::Note(note) => write!(f, "note: {}", single_quoted(note)),
        }
    }
}

/// Collect the column settings of `field` in output order.
///
/// A generated default (`now()`) is placed before `unique` / `not null`,
/// literal defaults after `not null`.
pub fn column_settings(model: &ModelDef, field: &FieldDef) -> Result<Vec<ColumnSetting>, DbmlError> {
    let mut settings = Vec::new();

    if field.is_id {
        settings.push(ColumnSetting::Pk);
    }

    let mut literal_default = None;
    if let Some(default) = &field.default {
        if default.is_autoincrement() {
            settings.push(ColumnSetting::Increment);
        } else if default.is_generated() {
            settings.push(ColumnSetting::Default(render_default(model, field, default)?));
        } else {
            literal_default = Some(render_default(model, field, default)?);
        }
    }

    if field.is_unique && !field.is_id {
        settings.push(ColumnSetting::Unique);
    }
    if field.is_required && !field.is_id {
        settings.push(ColumnSetting::NotNull);
    }
    if let Some(value) = literal_default {
        settings.push(ColumnSetting::Default(value));
    }
    if let Some(doc) = field.documentation.as_deref().filter(|d| !d.is_empty()) {
        settings.push(ColumnSetting::Note(doc.to_string()));
    }

    Ok(settings)
}

/// Render the attribute list of `field` including the leading space, or an
/// empty string when there is nothing to render.
pub fn render_attributes(model: &ModelDef, field: &FieldDef) -> Result<String, DbmlError> {
    let settings = column_settings(model, field)?;
    if settings.is_empty() {
        return Ok(String::new());
    }
    let rendered = settings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!(" [{}]", rendered))
}
