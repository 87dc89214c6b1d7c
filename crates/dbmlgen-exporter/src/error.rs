use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DbmlError {
    #[error("relation '{relation}' cannot be classified: {reason}")]
    UnclassifiableRelation { relation: String, reason: String },
    #[error("unsupported default value kind on field {model}.{field}")]
    UnsupportedDefault { model: String, field: String },
    #[error("model '{0}' has no single identifier field to reference from a join table")]
    MissingIdField(String),
}

impl DbmlError {
    pub(crate) fn unclassifiable(relation: impl Into<String>, reason: impl Into<String>) -> Self {
        DbmlError::UnclassifiableRelation {
            relation: relation.into(),
            reason: reason.into(),
        }
    }
}
