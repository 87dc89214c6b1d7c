use dbmlgen_config::ProjectOptions;
use dbmlgen_naming::single_quoted;

/// Render the `Project` block.
pub fn render_project(project: &ProjectOptions) -> String {
    let mut lines = vec![format!(
        "Project \"{}\" {{",
        project.name.replace('"', "\\\"")
    )];
    if let Some(database_type) = &project.database_type {
        lines.push(format!("  database_type: {}", single_quoted(database_type)));
    }
    if let Some(note) = &project.note {
        lines.push(format!("  Note: {}", single_quoted(note)));
    }
    lines.push("}".into());
    lines.join("\n")
}
