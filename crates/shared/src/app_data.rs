//! Locally persisted application state
//!
//! One JSON blob holds whatever each page chose to save. Pages own the shape
//! of their own section; this type only knows the well-known keys and keeps
//! anything else it finds.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_details: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculator: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consent: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AppData {
    /// Parse a stored blob. Anything that is not a JSON object yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(raw).ok()? {
            value @ Value::Object(_) => serde_json::from_value(value).ok(),
            _ => None,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Shallow merge: every top-level key present in `partial` replaces the
    /// stored one wholesale.
    pub fn merge(&mut self, partial: AppData) {
        if partial.personal_details.is_some() {
            self.personal_details = partial.personal_details;
        }
        if partial.calculator.is_some() {
            self.calculator = partial.calculator;
        }
        if partial.consent.is_some() {
            self.consent = partial.consent;
        }
        self.extra.extend(partial.extra);
    }

    pub fn with_personal_details(mut self, value: Value) -> Self {
        self.personal_details = Some(value);
        self
    }

    pub fn with_calculator(mut self, value: Value) -> Self {
        self.calculator = Some(value);
        self
    }

    pub fn with_consent(mut self, value: Value) -> Self {
        self.consent = Some(value);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_keeps_unknown_keys() {
        let data =
            AppData::parse(r#"{"calculator":{"product":"credit-card"},"buyout":[1]}"#).unwrap();
        assert_eq!(data.calculator, Some(json!({ "product": "credit-card" })));
        assert_eq!(data.extra.get("buyout"), Some(&json!([1])));
        assert_eq!(data.personal_details, None);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(AppData::parse("not json"), None);
        assert_eq!(AppData::parse("[1,2]"), None);
        assert_eq!(AppData::parse("null"), None);
    }

    #[test]
    fn merge_is_shallow() {
        let mut data = AppData::default()
            .with_personal_details(json!({ "firstName": "A", "lastName": "B" }))
            .with_consent(json!({ "terms": true }));
        data.merge(AppData::default().with_personal_details(json!({ "firstName": "C" })));

        assert_eq!(data.personal_details, Some(json!({ "firstName": "C" })));
        assert_eq!(data.consent, Some(json!({ "terms": true })));
    }

    #[test]
    fn serializes_camel_case_without_empty_sections() {
        let data = AppData::default()
            .with_personal_details(json!({}))
            .with_extra("theme", json!("dark"));
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({ "personalDetails": {}, "theme": "dark" })
        );
        assert_eq!(AppData::parse(&data.to_json()), Some(data));
    }
}
