//! Validation rules for a single field

use regex_lite::Regex;
use serde_json::{Map, Value};

use super::errors::{ErrorKind, FieldError, FieldErrors};
use super::Schema;
use crate::error::FormError;
use crate::option::SelectOption;

/// A check applied to a string value, in declaration order.
#[derive(Debug, Clone)]
pub enum TextCheck {
    MinLen { min: usize, message: String },
    MaxLen { max: usize, message: String },
    Pattern { regex: Regex, message: String },
    Email { message: String },
}

impl TextCheck {
    pub fn min_len(min: usize, message: impl Into<String>) -> Self {
        Self::MinLen {
            min,
            message: message.into(),
        }
    }

    pub fn max_len(max: usize, message: impl Into<String>) -> Self {
        Self::MaxLen {
            max,
            message: message.into(),
        }
    }

    pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<Self, FormError> {
        let regex = Regex::new(pattern).map_err(|e| FormError::parse(e.to_string()))?;
        Ok(Self::Pattern {
            regex,
            message: message.into(),
        })
    }

    pub fn email(message: impl Into<String>) -> Self {
        Self::Email {
            message: message.into(),
        }
    }

    fn check(&self, text: &str) -> Option<FieldError> {
        match self {
            Self::MinLen { min, message } => (text.chars().count() < *min)
                .then(|| FieldError::new(ErrorKind::TooShort { min: *min }, message.clone())),
            Self::MaxLen { max, message } => (text.chars().count() > *max)
                .then(|| FieldError::new(ErrorKind::TooLong { max: *max }, message.clone())),
            Self::Pattern { regex, message } => (!regex.is_match(text))
                .then(|| FieldError::new(ErrorKind::PatternMismatch, message.clone())),
            Self::Email { message } => (!looks_like_email(text))
                .then(|| FieldError::new(ErrorKind::InvalidEmail, message.clone())),
        }
    }
}

fn looks_like_email(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = text.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[derive(Debug, Clone)]
pub enum Rule {
    /// Accepts anything, but the value must be present
    Any,
    /// Absent or null is fine; otherwise the inner rule applies
    Optional(Box<Rule>),
    Text(Vec<TextCheck>),
    Boolean,
    /// Boolean that must be `true`
    Accepted { message: String },
    /// A chosen option object or a non-empty primitive
    Choice { message: String },
    List {
        item: Box<Rule>,
        min_items: usize,
        message: String,
    },
    /// Nested object (typically one element of an array group)
    Group(Schema),
    /// Non-empty list of selected files
    Files { message: String },
}

impl Rule {
    pub fn text(checks: impl IntoIterator<Item = TextCheck>) -> Self {
        Self::Text(checks.into_iter().collect())
    }

    /// Non-empty string with the given message.
    pub fn required_text(message: impl Into<String>) -> Self {
        Self::Text(vec![TextCheck::min_len(1, message)])
    }

    pub fn accepted(message: impl Into<String>) -> Self {
        Self::Accepted {
            message: message.into(),
        }
    }

    pub fn choice(message: impl Into<String>) -> Self {
        Self::Choice {
            message: message.into(),
        }
    }

    pub fn list(item: Rule, min_items: usize, message: impl Into<String>) -> Self {
        Self::List {
            item: Box::new(item),
            min_items,
            message: message.into(),
        }
    }

    pub fn group(schema: Schema) -> Self {
        Self::Group(schema)
    }

    pub fn files(message: impl Into<String>) -> Self {
        Self::Files {
            message: message.into(),
        }
    }

    pub fn optional(self) -> Self {
        match self {
            Self::Optional(_) => self,
            other => Self::Optional(Box::new(other)),
        }
    }

    /// The permissive rule used for disabled fields.
    pub fn relaxed() -> Self {
        Self::Any.optional()
    }

    /// Check `value` (absent when `None`) and return what should be kept in
    /// the parsed output. Errors are recorded under `path`.
    pub(crate) fn check(
        &self,
        value: Option<&Value>,
        path: &str,
        errors: &mut FieldErrors,
    ) -> Option<Value> {
        match self {
            Self::Any => match value {
                Some(v) => Some(v.clone()),
                None => {
                    errors.insert(path, FieldError::required());
                    None
                }
            },
            Self::Optional(inner) => match value {
                None | Some(Value::Null) => None,
                Some(_) => inner.check(value, path, errors),
            },
            Self::Text(checks) => {
                let text = expect_kind(value, path, errors, Value::as_str, "string")?;
                if let Some(error) = checks.iter().find_map(|c| c.check(text)) {
                    errors.insert(path, error);
                }
                value.cloned()
            }
            Self::Boolean => {
                expect_kind(value, path, errors, Value::as_bool, "boolean")?;
                value.cloned()
            }
            Self::Accepted { message } => {
                let accepted = expect_kind(value, path, errors, Value::as_bool, "boolean")?;
                if !accepted {
                    errors.insert(path, FieldError::new(ErrorKind::NotAccepted, message.clone()));
                }
                value.cloned()
            }
            Self::Choice { message } => {
                if !is_chosen(value) {
                    errors.insert(path, FieldError::new(ErrorKind::NoSelection, message.clone()));
                    return None;
                }
                value.cloned()
            }
            Self::List {
                item,
                min_items,
                message,
            } => {
                let items = expect_kind(value, path, errors, Value::as_array, "array")?;
                let parsed: Vec<Value> = items
                    .iter()
                    .enumerate()
                    .filter_map(|(i, element)| item.check(Some(element), &format!("{path}.{i}"), errors))
                    .collect();
                if items.len() < *min_items {
                    errors.insert(
                        path,
                        FieldError::new(ErrorKind::TooFewItems { min: *min_items }, message.clone()),
                    );
                }
                Some(Value::Array(parsed))
            }
            Self::Group(schema) => {
                let map = expect_kind(value, path, errors, Value::as_object, "object")?;
                Some(Value::Object(schema.check_object(map, path, errors)))
            }
            Self::Files { message } => {
                let has_files = match value {
                    Some(Value::Array(files)) => !files.is_empty(),
                    Some(Value::Object(map)) => !map.is_empty(),
                    _ => false,
                };
                if !has_files {
                    errors.insert(path, FieldError::new(ErrorKind::NoFiles, message.clone()));
                    return None;
                }
                value.cloned()
            }
        }
    }
}

fn expect_kind<'v, T>(
    value: Option<&'v Value>,
    path: &str,
    errors: &mut FieldErrors,
    extract: impl Fn(&'v Value) -> Option<T>,
    expected: &str,
) -> Option<T> {
    match value {
        None | Some(Value::Null) => {
            errors.insert(path, FieldError::required());
            None
        }
        Some(v) => {
            let extracted = extract(v);
            if extracted.is_none() {
                errors.insert(path, FieldError::invalid_type(expected));
            }
            extracted
        }
    }
}

fn is_chosen(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(v @ Value::Object(_)) => SelectOption::is_option_shape(v),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(_) => true,
    }
}

pub(crate) fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

pub(crate) type Object = Map<String, Value>;
