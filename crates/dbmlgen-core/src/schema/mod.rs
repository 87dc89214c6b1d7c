pub mod datamodel;
pub mod default;
pub mod enum_def;
pub mod field;
pub mod model;
pub mod names;
pub mod reference;
pub mod relation;

pub use datamodel::Datamodel;
pub use default::DefaultValue;
pub use enum_def::EnumDef;
pub use field::{FieldDef, FieldKind};
pub use model::ModelDef;
pub use names::{EnumName, FieldName, ModelName};
pub use reference::ReferenceAction;
pub use relation::RelationDef;
