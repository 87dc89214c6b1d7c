pub mod schema;

pub use schema::{
    Datamodel, DefaultValue, EnumDef, FieldDef, FieldKind, FieldName, ModelDef, ModelName,
    ReferenceAction, RelationDef,
};
