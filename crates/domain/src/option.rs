//! Option model shared by checkbox groups, radio groups and dropdowns.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FormError;
use crate::value::is_equal;

/// A selectable option: label/value pair plus arbitrary extra attributes.
///
/// Options are stored in form values in their `Value` form, so two options
/// are "the same" when their JSON shapes are structurally equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption {
    /// Display label
    pub label: String,
    /// Primitive value reported by value-mode dropdowns
    pub value: Value,
    /// Extra attributes carried through selection untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            extra: Map::new(),
        }
    }

    /// Attach an extra attribute.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// The JSON shape stored in form values.
    pub fn to_value(&self) -> Value {
        let mut map = self.extra.clone();
        map.insert("label".to_string(), Value::String(self.label.clone()));
        map.insert("value".to_string(), self.value.clone());
        Value::Object(map)
    }

    /// Read an option back out of a stored value.
    pub fn from_value(value: &Value) -> Result<Self, FormError> {
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Whether a stored value has the minimal option shape (`label` + `value`).
    pub fn is_option_shape(value: &Value) -> bool {
        value
            .as_object()
            .is_some_and(|m| m.contains_key("label") && m.contains_key("value"))
    }

    /// Structural comparison against a stored value.
    pub fn matches(&self, stored: &Value) -> bool {
        is_equal(&self.to_value(), stored)
    }
}

impl PartialEq for SelectOption {
    fn eq(&self, other: &Self) -> bool {
        is_equal(&self.to_value(), &other.to_value())
    }
}

impl From<SelectOption> for Value {
    fn from(option: SelectOption) -> Self {
        option.to_value()
    }
}

/// Shorthand for building an option list from `(label, value)` pairs.
pub fn options<V: Into<Value>>(pairs: impl IntoIterator<Item = (&'static str, V)>) -> Vec<SelectOption> {
    pairs
        .into_iter()
        .map(|(label, value)| SelectOption::new(label, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn to_value_includes_extras() {
        let option = SelectOption::new("Asia", "Asia").with_extra("name", 123);
        assert_eq!(
            option.to_value(),
            json!({"label": "Asia", "value": "Asia", "name": 123})
        );
    }

    #[test]
    fn from_value_keeps_extras() {
        let stored = json!({"label": "Number123", "value": 123, "id": {}});
        let option = SelectOption::from_value(&stored).unwrap();
        assert_eq!(option.label, "Number123");
        assert_eq!(option.value, json!(123));
        assert_eq!(option.extra.get("id"), Some(&json!({})));
        assert!(option.matches(&stored));
    }

    #[test]
    fn from_value_rejects_non_options() {
        assert!(SelectOption::from_value(&json!("Asia")).is_err());
    }

    #[test]
    fn equality_is_structural() {
        let a = SelectOption::new("Male", "male");
        let b = SelectOption::from_value(&json!({"value": "male", "label": "Male"})).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, SelectOption::new("Male", "m"));
    }

    #[test]
    fn option_shape_detection() {
        assert!(SelectOption::is_option_shape(&json!({"label": "a", "value": 1})));
        assert!(!SelectOption::is_option_shape(&json!({"label": "a"})));
        assert!(!SelectOption::is_option_shape(&json!(null)));
    }
}
