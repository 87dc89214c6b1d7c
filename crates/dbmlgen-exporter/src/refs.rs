use dbmlgen_naming::combine_keys;

use crate::context::RenderContext;
use crate::relation::{DirectRelation, Relation};

/// Render a `Ref:` line for a one-to-one or one-to-many relation.
///
/// Many-to-many relations have no reference line and yield `None`.
pub fn render_ref(ctx: &RenderContext<'_>, relation: &Relation<'_>) -> Option<String> {
    let direct = relation.as_direct()?;
    let operator = match relation {
        Relation::OneToOne(_) => "-",
        _ => ">",
    };
    Some(format!(
        "Ref: {}.{} {} {}.{}{}",
        ctx.model_name(direct.fk.model),
        combine_keys(direct.from_fields),
        operator,
        ctx.model_name(direct.fk.target),
        combine_keys(direct.to_fields),
        referential_actions(direct)
    ))
}

fn referential_actions(relation: &DirectRelation<'_>) -> String {
    match relation.on_delete {
        Some(action) => format!(" [delete: {}]", action.as_dbml()),
        None => String::new(),
    }
}
