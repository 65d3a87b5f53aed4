//! Form value container
//!
//! `FormValues` is the single mutable state of a form instance: a JSON object
//! addressed by dotted paths. Array-of-object groups are plain JSON arrays, so
//! `banks.1.loanAmount` walks into the second element of `banks`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::FormError;

/// Nested mapping from field name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(Map<String, Value>);

impl FormValues {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build from a JSON object literal (typically form defaults).
    pub fn from_value(value: Value) -> Result<Self, FormError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(FormError::type_mismatch("<root>", "object")),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Read the value at a dotted path.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.0.get(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// String value at `path`, or `""` when absent or not a string.
    pub fn get_str(&self, path: &str) -> &str {
        self.get(path).and_then(Value::as_str).unwrap_or("")
    }

    /// Whether the value at `path` is exactly `true`.
    pub fn flag(&self, path: &str) -> bool {
        matches!(self.get(path), Some(Value::Bool(true)))
    }

    /// Write `value` at a dotted path, creating intermediate objects and
    /// arrays as needed. Numeric segments address arrays; writing one past the
    /// end appends.
    pub fn set(&mut self, path: &str, value: Value) -> Result<(), FormError> {
        let segments = split_path(path)?;
        let (first, rest) = segments
            .split_first()
            .ok_or_else(|| FormError::invalid_path(path))?;
        if rest.is_empty() {
            self.0.insert((*first).to_string(), value);
            return Ok(());
        }
        let slot = self
            .0
            .entry((*first).to_string())
            .or_insert_with(|| empty_container_for(rest[0]));
        set_in(slot, rest, value, path)
    }

    /// Remove and return the value at a dotted path. Array elements are
    /// removed with shifting, like `remove_index`.
    pub fn remove(&mut self, path: &str) -> Option<Value> {
        let (parent, last) = match path.rsplit_once('.') {
            Some((parent, last)) => (Some(parent), last),
            None => (None, path),
        };
        let Some(parent) = parent else {
            return self.0.remove(last);
        };
        match self.get_mut(parent)? {
            Value::Object(map) => map.remove(last),
            Value::Array(items) => {
                let index = last.parse::<usize>().ok()?;
                (index < items.len()).then(|| items.remove(index))
            }
            _ => None,
        }
    }

    /// Number of elements in an array-of-objects group (0 when absent).
    pub fn array_len(&self, group: &str) -> usize {
        self.get(group)
            .and_then(Value::as_array)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Append an element to an array group, creating the group if absent.
    pub fn push(&mut self, group: &str, element: Value) -> Result<usize, FormError> {
        if self.get(group).is_none() {
            self.set(group, Value::Array(Vec::new()))?;
        }
        match self.get_mut(group) {
            Some(Value::Array(items)) => {
                items.push(element);
                Ok(items.len() - 1)
            }
            _ => Err(FormError::type_mismatch(group, "array")),
        }
    }

    /// Remove the element at `index` from an array group.
    pub fn remove_index(&mut self, group: &str, index: usize) -> Option<Value> {
        match self.get_mut(group)? {
            Value::Array(items) if index < items.len() => Some(items.remove(index)),
            _ => None,
        }
    }

    /// Shallow merge: keys from `other` replace keys here.
    pub fn merge(&mut self, other: FormValues) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    fn get_mut(&mut self, path: &str) -> Option<&mut Value> {
        let mut segments = path.split('.');
        let mut current = self.0.get_mut(segments.next()?)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get_mut(segment)?,
                Value::Array(items) => items.get_mut(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }
}

impl From<Map<String, Value>> for FormValues {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn split_path(path: &str) -> Result<Vec<&str>, FormError> {
    let segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(FormError::invalid_path(path));
    }
    Ok(segments)
}

fn empty_container_for(next_segment: &str) -> Value {
    if next_segment.parse::<usize>().is_ok() {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

fn set_in(target: &mut Value, segments: &[&str], value: Value, full: &str) -> Result<(), FormError> {
    let Some((head, rest)) = segments.split_first() else {
        *target = value;
        return Ok(());
    };
    let child = match target {
        Value::Object(map) => {
            if rest.is_empty() {
                map.insert((*head).to_string(), value);
                return Ok(());
            }
            map.entry((*head).to_string())
                .or_insert_with(|| empty_container_for(rest[0]))
        }
        Value::Array(items) => {
            let index = head
                .parse::<usize>()
                .map_err(|_| FormError::type_mismatch(full, "object"))?;
            while items.len() <= index {
                items.push(Value::Null);
            }
            if rest.is_empty() {
                items[index] = value;
                return Ok(());
            }
            let slot = &mut items[index];
            if slot.is_null() {
                *slot = empty_container_for(rest[0]);
            }
            slot
        }
        _ => return Err(FormError::type_mismatch(full, "object or array")),
    };
    set_in(child, rest, value, full)
}

/// A fully qualified member path inside an array-of-objects group:
/// `group.index.child`, e.g. `banks.0.bankName`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayFieldPath {
    pub group: String,
    pub index: usize,
    pub child: String,
}

impl ArrayFieldPath {
    pub fn new(group: impl Into<String>, index: usize, child: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            index,
            child: child.into(),
        }
    }

    /// Parse `group.index.child`.
    pub fn parse(path: &str) -> Result<Self, FormError> {
        let mut parts = path.splitn(3, '.');
        let (Some(group), Some(index), Some(child)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(FormError::invalid_path(path));
        };
        let index = index
            .parse::<usize>()
            .map_err(|_| FormError::invalid_path(path))?;
        if group.is_empty() || child.is_empty() {
            return Err(FormError::invalid_path(path));
        }
        Ok(Self::new(group, index, child))
    }
}

impl fmt::Display for ArrayFieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.group, self.index, self.child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn buyout_values() -> FormValues {
        FormValues::from_value(json!({
            "buyout": true,
            "banks": [
                {"bankName": "ADCB", "settlementProduct": [], "loanAmount": "100"},
                {"bankName": "", "settlementProduct": [], "loanAmount": ""}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn get_walks_objects_and_arrays() {
        let values = buyout_values();
        assert_eq!(values.get("buyout"), Some(&json!(true)));
        assert_eq!(values.get("banks.0.bankName"), Some(&json!("ADCB")));
        assert_eq!(values.get("banks.2.bankName"), None);
        assert_eq!(values.get("banks.x"), None);
        assert_eq!(values.get_str("banks.1.bankName"), "");
        assert!(values.flag("buyout"));
    }

    #[test]
    fn set_overwrites_nested_value() {
        let mut values = buyout_values();
        values.set("banks.1.bankName", json!("FAB")).unwrap();
        assert_eq!(values.get_str("banks.1.bankName"), "FAB");
    }

    #[test]
    fn set_creates_intermediate_containers() {
        let mut values = FormValues::new();
        values.set("employers.0.employerName", json!("Acme")).unwrap();
        assert_eq!(
            values.to_value(),
            json!({"employers": [{"employerName": "Acme"}]})
        );
    }

    #[test]
    fn set_rejects_empty_segments() {
        let mut values = FormValues::new();
        assert!(matches!(
            values.set("banks..name", json!(1)),
            Err(FormError::InvalidPath(_))
        ));
    }

    #[test]
    fn set_through_scalar_fails() {
        let mut values = buyout_values();
        assert!(matches!(
            values.set("buyout.inner", json!(1)),
            Err(FormError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn push_and_remove_index_preserve_order() {
        let mut values = buyout_values();
        let idx = values.push("banks", json!({"bankName": "ENBD"})).unwrap();
        assert_eq!(idx, 2);
        assert_eq!(values.array_len("banks"), 3);

        let removed = values.remove_index("banks", 1).unwrap();
        assert_eq!(removed["bankName"], json!(""));
        assert_eq!(values.get_str("banks.0.bankName"), "ADCB");
        assert_eq!(values.get_str("banks.1.bankName"), "ENBD");
    }

    #[test]
    fn push_creates_missing_group() {
        let mut values = FormValues::new();
        values.push("internals", json!({"loanAmount": ""})).unwrap();
        assert_eq!(values.array_len("internals"), 1);
    }

    #[test]
    fn remove_handles_top_level_and_nested() {
        let mut values = buyout_values();
        assert_eq!(values.remove("banks.0.loanAmount"), Some(json!("100")));
        assert_eq!(values.get("banks.0.loanAmount"), None);
        assert_eq!(values.remove("buyout"), Some(json!(true)));
        assert_eq!(values.remove("missing"), None);
    }

    #[test]
    fn from_value_requires_object() {
        assert!(FormValues::from_value(json!([1])).is_err());
    }

    #[test]
    fn array_field_path_parses_group_member() {
        let path = ArrayFieldPath::parse("banks.3.bankName").unwrap();
        assert_eq!(path, ArrayFieldPath::new("banks", 3, "bankName"));
        assert_eq!(path.to_string(), "banks.3.bankName");
    }

    #[test]
    fn array_field_path_rejects_malformed() {
        assert!(ArrayFieldPath::parse("banks").is_err());
        assert!(ArrayFieldPath::parse("banks.x.bankName").is_err());
        assert!(ArrayFieldPath::parse(".0.bankName").is_err());
    }
}
