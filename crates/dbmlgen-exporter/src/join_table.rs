use dbmlgen_naming::join_column_name;

use crate::context::RenderContext;
use crate::error::DbmlError;
use crate::relation::{Endpoint, ManyToManyRelation};

/// Synthesize the join table of a many-to-many relation.
///
/// One column per endpoint, in encounter order, each referencing the id
/// field of the model that endpoint points at.
pub fn render_join_table(
    ctx: &RenderContext<'_>,
    relation: &ManyToManyRelation<'_>,
) -> Result<String, DbmlError> {
    tracing::trace!(name = %relation.name, "synthesizing join table");

    let columns = [relation.first, relation.second]
        .iter()
        .map(|endpoint| render_join_column(ctx, endpoint, relation.explicit_name))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format!(
        "Table {} {{\n{}\n}}",
        relation.name,
        columns.join("\n")
    ))
}

fn render_join_column(
    ctx: &RenderContext<'_>,
    endpoint: &Endpoint<'_>,
    explicit_name: bool,
) -> Result<String, DbmlError> {
    let target = endpoint.target;
    let id = target
        .id_field()
        .ok_or_else(|| DbmlError::MissingIdField(target.name.clone()))?;

    Ok(format!(
        "  {} {} [ref: > {}.{}]",
        join_column_name(&endpoint.field.name, explicit_name),
        id.r#type,
        ctx.model_name(target),
        id.name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relation::{Relation, classify_relations};
    use dbmlgen_config::DbmlOptions;
    use dbmlgen_core::{Datamodel, FieldDef, FieldKind, ModelDef, RelationDef};
    use insta::assert_snapshot;

    fn id(ty: &str) -> FieldDef {
        let mut field = FieldDef::scalar("id", ty);
        field.is_id = true;
        field
    }

    fn list(name: &str, ty: &str, relation: Option<&str>) -> FieldDef {
        let mut field = FieldDef::scalar(name, ty);
        field.kind = FieldKind::Object;
        field.is_list = true;
        field.relation = Some(RelationDef {
            name: relation.map(str::to_string),
            ..Default::default()
        });
        field
    }

    fn render(dm: &Datamodel, options: &DbmlOptions) -> Result<String, DbmlError> {
        let ctx = RenderContext::new(dm, options);
        let relations = classify_relations(dm).unwrap();
        match &relations[0] {
            Relation::ManyToMany(m2m) => render_join_table(&ctx, m2m),
            other => panic!("expected many-to-many, got {other:?}"),
        }
    }

    #[test]
    fn default_name_keeps_field_case() {
        let dm = Datamodel {
            models: vec![
                ModelDef::new("User", vec![id("Int"), list("savedPosts", "Post", None)]),
                ModelDef::new("Post", vec![id("String"), list("savedBy", "User", None)]),
            ],
            enums: vec![],
        };
        assert_snapshot!(render(&dm, &DbmlOptions::default()).unwrap(), @r"
Table PostToUser {
  savedPostsId String [ref: > Post.id]
  savedById Int [ref: > User.id]
}
");
    }

    #[test]
    fn explicit_name_lowercases_field() {
        let dm = Datamodel {
            models: vec![
                ModelDef::new(
                    "User",
                    vec![id("Int"), list("receivedPosts", "Post", Some("userReceivesPosts"))],
                ),
                ModelDef::new(
                    "Post",
                    vec![id("Int"), list("receivedBy", "User", Some("userReceivesPosts"))],
                ),
            ],
            enums: vec![],
        };
        assert_snapshot!(render(&dm, &DbmlOptions::default()).unwrap(), @r"
Table userReceivesPosts {
  receivedpostsId Int [ref: > Post.id]
  receivedbyId Int [ref: > User.id]
}
");
    }

    #[test]
    fn mapped_target_names() {
        let mut tag = ModelDef::new("Tag", vec![id("Int"), list("posts", "Post", None)]);
        tag.db_name = Some("tags".into());
        let dm = Datamodel {
            models: vec![
                ModelDef::new("Post", vec![id("Int"), list("tags", "Tag", None)]),
                tag,
            ],
            enums: vec![],
        };
        let options = DbmlOptions {
            map_to_db_schema: true,
            ..Default::default()
        };
        assert_eq!(
            render(&dm, &options).unwrap(),
            "Table PostToTag {\n  tagsId Int [ref: > tags.id]\n  postsId Int [ref: > Post.id]\n}"
        );
    }

    #[test]
    fn target_without_id_fails() {
        let dm = Datamodel {
            models: vec![
                ModelDef::new("Post", vec![id("Int"), list("tags", "Tag", None)]),
                ModelDef::new(
                    "Tag",
                    vec![FieldDef::scalar("label", "String"), list("posts", "Post", None)],
                ),
            ],
            enums: vec![],
        };
        assert_eq!(
            render(&dm, &DbmlOptions::default()).unwrap_err(),
            DbmlError::MissingIdField("Tag".into())
        );
    }
}
