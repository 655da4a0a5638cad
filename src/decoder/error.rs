use thiserror::Error;
use crate::decoder::defect::JsonType;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("response is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("expected an object at {path}, found {found}")]
    NotAnObject { path: String, found: JsonType },
    #[error("required object {path} is missing")]
    MissingObject { path: String },
    #[error("required field {path} is missing")]
    MissingField { path: String },
    #[error("field {path} should be {expected}, found {found}")]
    InvalidField {
        path: String,
        expected: &'static str,
        found: JsonType,
    },
}

impl DecodeError {
    /// True when the object itself has the wrong shape, as opposed to one of
    /// its fields.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            DecodeError::Malformed(_)
                | DecodeError::NotAnObject { .. }
                | DecodeError::MissingObject { .. }
        )
    }
}
