//! Unified error type for the domain layer
//!
//! Validation failures are not errors here: they travel as `FieldErrors`
//! inside a `ValidationOutcome`. `FormError` covers misuse of the form model
//! itself (bad paths, type mismatches, unparseable option payloads).

use thiserror::Error;

/// Unified error type for form-model operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormError {
    /// A dotted path could not be parsed or walked
    #[error("Invalid field path: {0}")]
    InvalidPath(String),

    /// A path segment expected an array or object but found something else
    #[error("Type mismatch at '{path}': expected {expected}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
    },

    /// A JSON payload could not be read as the requested type
    #[error("Parse error: {0}")]
    Parse(String),
}

impl FormError {
    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath(path.into())
    }

    /// Create a type mismatch error
    pub fn type_mismatch(path: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch {
            path: path.into(),
            expected,
        }
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
