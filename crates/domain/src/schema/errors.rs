//! Per-field validation errors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const REQUIRED_MESSAGE: &str = "Required";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ErrorKind {
    /// Value absent (or null where a value is mandatory)
    Required,
    InvalidType { expected: String },
    TooShort { min: usize },
    TooLong { max: usize },
    PatternMismatch,
    InvalidEmail,
    /// A boolean that must be `true`
    NotAccepted,
    /// Nothing chosen in a selection field
    NoSelection,
    TooFewItems { min: usize },
    NoFiles,
    /// Differs from the field it must repeat
    Mismatch { other: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn required() -> Self {
        Self::new(ErrorKind::Required, REQUIRED_MESSAGE)
    }

    pub fn invalid_type(expected: &str) -> Self {
        Self::new(
            ErrorKind::InvalidType {
                expected: expected.to_string(),
            },
            format!("Expected {expected}"),
        )
    }
}

/// Validation errors keyed by dotted path. Only the first error reported for
/// a path is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error unless the path already has one.
    pub fn insert(&mut self, path: impl Into<String>, error: FieldError) {
        self.0.entry(path.into()).or_insert(error);
    }

    pub fn get(&self, path: &str) -> Option<&FieldError> {
        self.0.get(path)
    }

    pub fn message(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(|e| e.message.as_str())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    pub fn remove(&mut self, path: &str) -> Option<FieldError> {
        self.0.remove(path)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldError)> {
        self.0.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Replace every error at or under `path` with those from `other`.
    /// Used to re-validate one touched field without disturbing the rest.
    pub fn replace_under(&mut self, path: &str, other: &FieldErrors) {
        let nested = format!("{path}.");
        self.0
            .retain(|key, _| key != path && !key.starts_with(&nested));
        for (key, error) in other.iter() {
            if key == path || key.starts_with(&nested) {
                self.0.insert(key.clone(), error.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_error_per_path_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("name", FieldError::required());
        errors.insert("name", FieldError::invalid_type("string"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message("name"), Some("Required"));
    }

    #[test]
    fn replace_under_scopes_to_path() {
        let mut current = FieldErrors::new();
        current.insert("banks.0.bankName", FieldError::required());
        current.insert("email", FieldError::required());

        let mut fresh = FieldErrors::new();
        fresh.insert("banks.1.loanAmount", FieldError::required());
        fresh.insert("email", FieldError::new(ErrorKind::InvalidEmail, "bad"));

        current.replace_under("banks", &fresh);
        assert!(!current.contains("banks.0.bankName"));
        assert!(current.contains("banks.1.loanAmount"));
        assert_eq!(current.message("email"), Some("Required"));
    }
}
