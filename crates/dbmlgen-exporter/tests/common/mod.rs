#![allow(dead_code)]

use dbmlgen_core::{
    DefaultValue, EnumDef, FieldDef, FieldKind, ModelDef, ReferenceAction, RelationDef,
};
use dbmlgen_exporter::AUTO_GENERATED_COMMENT;

/// `id Int @id @default(autoincrement())`
pub fn id() -> FieldDef {
    let mut field = FieldDef::scalar("id", "Int");
    field.is_id = true;
    field.default = Some(DefaultValue::generated("autoincrement"));
    field
}

pub fn scalar(name: &str, ty: &str) -> FieldDef {
    FieldDef::scalar(name, ty)
}

pub fn optional(mut field: FieldDef) -> FieldDef {
    field.is_required = false;
    field
}

pub fn unique(mut field: FieldDef) -> FieldDef {
    field.is_unique = true;
    field
}

pub fn with_default(mut field: FieldDef, default: DefaultValue) -> FieldDef {
    field.default = Some(default);
    field
}

pub fn documented(mut field: FieldDef, doc: &str) -> FieldDef {
    field.documentation = Some(doc.to_string());
    field
}

pub fn enum_field(name: &str, ty: &str) -> FieldDef {
    let mut field = FieldDef::scalar(name, ty);
    field.kind = FieldKind::Enum;
    field
}

fn object(name: &str, ty: &str, relation: RelationDef) -> FieldDef {
    let mut field = FieldDef::scalar(name, ty);
    field.kind = FieldKind::Object;
    field.relation = Some(relation);
    field
}

/// Back-reference side: `posts Post[]` or `profile Profile?`.
pub fn back_ref(name: &str, ty: &str) -> FieldDef {
    object(name, ty, RelationDef::default())
}

pub fn list_ref(name: &str, ty: &str, relation_name: Option<&str>) -> FieldDef {
    let mut field = object(
        name,
        ty,
        RelationDef {
            name: relation_name.map(str::to_string),
            ..Default::default()
        },
    );
    field.is_list = true;
    field
}

/// FK side: `author User @relation(fields: [authorId], references: [id])`.
pub fn fk_ref(name: &str, ty: &str, from: &str, on_delete: Option<ReferenceAction>) -> FieldDef {
    object(
        name,
        ty,
        RelationDef {
            name: None,
            from_fields: vec![from.to_string()],
            to_fields: vec!["id".to_string()],
            on_delete,
        },
    )
}

pub fn role_enum() -> EnumDef {
    EnumDef {
        name: "Role".into(),
        values: vec!["ADMIN".into(), "USER".into()],
    }
}

pub fn model(name: &str, fields: Vec<FieldDef>) -> ModelDef {
    ModelDef::new(name, fields)
}

/// Prefix `body` with the banner the way generated documents are laid out.
pub fn with_banner(body: &str) -> String {
    format!("{AUTO_GENERATED_COMMENT}\n\n{body}")
}
