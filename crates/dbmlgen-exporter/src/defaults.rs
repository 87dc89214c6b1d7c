use dbmlgen_core::{DefaultValue, FieldDef, ModelDef};
use dbmlgen_naming::single_quoted;

use crate::error::DbmlError;

/// Render a default value as it appears after `default: `.
///
/// String and enum members are single-quoted, booleans and numbers are raw,
/// generated values are back-ticked calls.
pub fn render_default(
    model: &ModelDef,
    field: &FieldDef,
    default: &DefaultValue,
) -> Result<String, DbmlError> {
    match default {
        DefaultValue::String { value } | DefaultValue::Enum { value } => Ok(single_quoted(value)),
        DefaultValue::Number { value } => Ok(value.to_string()),
        DefaultValue::Boolean { value } => Ok(value.to_string()),
        DefaultValue::Generated { name, args } => {
            let args = args
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            Ok(format!("`{}({})`", name, args))
        }
        DefaultValue::Unsupported => Err(DbmlError::UnsupportedDefault {
            model: model.name.clone(),
            field: field.name.clone(),
        }),
    }
}
