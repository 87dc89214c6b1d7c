pub type ModelName = String;
pub type FieldName = String;
pub type EnumName = String;
