//! Validation error definitions

use thiserror::Error;

/// A value rejected by the required rule or by one of its filters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("value is required")]
    Required,

    #[error("value {0:?} is not a valid integer")]
    NotAnInteger(String),

    #[error("value {0:?} is not a valid date (expected DD-MM-YYYY)")]
    InvalidDate(String),

    #[error("filepath cannot be empty")]
    EmptyFilepath,

    #[error("file {0:?} does not exist")]
    FileNotFound(String),
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// How strictly `type:"filepath"` is enforced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilepathMode {
    /// Non-blank is enough
    Lenient,
    /// The path must also exist when validated
    #[default]
    Strict,
}

impl FilepathMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}
