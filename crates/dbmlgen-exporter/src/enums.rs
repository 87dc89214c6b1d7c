use dbmlgen_core::EnumDef;

/// Render an `Enum` block with one value per line, in declaration order.
pub fn render_enum(enum_def: &EnumDef) -> String {
    let mut lines = Vec::with_capacity(enum_def.values.len() + 2);
    lines.push(format!("Enum {} {{", enum_def.name));
    for value in &enum_def.values {
        lines.push(format!("  {}", value));
    }
    lines.push("}".to_string());
    lines.join("\n")
}
