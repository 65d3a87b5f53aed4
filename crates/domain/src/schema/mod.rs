//! Validation schema
//!
//! A `Schema` is an immutable, ordered mapping from field name to `Rule`.
//! Validating `FormValues` yields a `ValidationOutcome`: on success the parsed
//! values (unknown keys stripped), on failure an empty value set plus every
//! per-field error keyed by dotted path.
//!
//! Cross-field checks (`matching`) only run once every field rule passes.

mod errors;
mod rule;

pub use errors::{ErrorKind, FieldError, FieldErrors, REQUIRED_MESSAGE};
pub use rule::{Rule, TextCheck};

use rule::{join_path, Object};

use crate::values::FormValues;

#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, Rule)>,
    matches: Vec<Matching>,
}

/// `field` must hold the same value as `other`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Matching {
    field: String,
    other: String,
    message: String,
}

/// Result of one validation pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationOutcome {
    pub values: FormValues,
    pub errors: FieldErrors,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the rule for `name`. Position is kept on replace.
    pub fn field(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.set(name.into(), rule);
        self
    }

    /// Require `field` to repeat `other`; the error lands on `field`.
    pub fn matching(
        mut self,
        field: impl Into<String>,
        other: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.matches.push(Matching {
            field: field.into(),
            other: other.into(),
            message: message.into(),
        });
        self
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, rule)| rule)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// A new schema with `overrides` applied on top of this one.
    pub fn extend<'a>(&self, overrides: impl IntoIterator<Item = (&'a str, &'a Rule)>) -> Self {
        let mut extended = self.clone();
        for (name, rule) in overrides {
            extended.set(name.to_string(), rule.clone());
        }
        extended
    }

    /// A new schema holding every field of both; `other` wins on conflicts.
    pub fn merge(&self, other: &Schema) -> Self {
        let mut merged = self.extend(other.fields.iter().map(|(name, rule)| (name.as_str(), rule)));
        for matching in &other.matches {
            if !merged.matches.contains(matching) {
                merged.matches.push(matching.clone());
            }
        }
        merged
    }

    pub fn validate(&self, values: &FormValues) -> ValidationOutcome {
        let mut errors = FieldErrors::new();
        let parsed = self.check_object(values.as_map(), "", &mut errors);
        if errors.is_empty() {
            self.check_matches(values, &mut errors);
        }
        if errors.is_empty() {
            ValidationOutcome {
                values: FormValues::from(parsed),
                errors,
            }
        } else {
            ValidationOutcome {
                values: FormValues::new(),
                errors,
            }
        }
    }

    /// Validate only the fields at or under `path` (e.g. after a blur).
    pub fn validate_path(&self, values: &FormValues, path: &str) -> FieldErrors {
        let all = self.validate(values).errors;
        let mut scoped = FieldErrors::new();
        scoped.replace_under(path, &all);
        scoped
    }

    pub(crate) fn check_object(&self, map: &Object, prefix: &str, errors: &mut FieldErrors) -> Object {
        let mut parsed = Object::new();
        for (name, rule) in &self.fields {
            let path = join_path(prefix, name);
            if let Some(value) = rule.check(map.get(name), &path, errors) {
                parsed.insert(name.clone(), value);
            }
        }
        parsed
    }

    fn check_matches(&self, values: &FormValues, errors: &mut FieldErrors) {
        for Matching { field, other, message } in &self.matches {
            if values.get(field) != values.get(other) {
                errors.insert(
                    field.clone(),
                    FieldError::new(ErrorKind::Mismatch { other: other.clone() }, message.clone()),
                );
            }
        }
    }

    fn set(&mut self, name: String, rule: Rule) {
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some(slot) => slot.1 = rule,
            None => self.fields.push((name, rule)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const MANDATORY: &str = "Mandatory field.";

    fn buyout_schema() -> Schema {
        let bank = Schema::new()
            .field("bankName", Rule::required_text(MANDATORY))
            .field("settlementProduct", Rule::list(Rule::Any, 1, MANDATORY))
            .field("loanAmount", Rule::required_text(MANDATORY));
        Schema::new()
            .field("buyout", Rule::Boolean)
            .field("banks", Rule::list(Rule::group(bank), 0, MANDATORY).optional())
    }

    fn values(v: serde_json::Value) -> FormValues {
        FormValues::from_value(v).unwrap()
    }

    #[test]
    fn success_strips_unknown_keys() {
        let outcome = buyout_schema().validate(&values(json!({
            "buyout": true,
            "isDisableFields": false,
            "banks": [{
                "bankName": "ADCB",
                "settlementProduct": [{"label": "Credit Card", "value": "credit_card"}],
                "loanAmount": "1000",
                "extra": 1
            }]
        })));
        assert!(outcome.is_valid());
        assert_eq!(outcome.values.get("isDisableFields"), None);
        assert_eq!(outcome.values.get("banks.0.extra"), None);
        assert_eq!(outcome.values.get_str("banks.0.bankName"), "ADCB");
    }

    #[test]
    fn nested_errors_use_dotted_paths() {
        let outcome = buyout_schema().validate(&values(json!({
            "buyout": true,
            "banks": [
                {"bankName": "ADCB", "settlementProduct": [1], "loanAmount": "1"},
                {"bankName": "", "settlementProduct": [], "loanAmount": ""}
            ]
        })));
        assert!(!outcome.is_valid());
        assert!(outcome.values.is_empty());
        assert_eq!(outcome.errors.message("banks.1.bankName"), Some(MANDATORY));
        assert_eq!(outcome.errors.message("banks.1.settlementProduct"), Some(MANDATORY));
        assert_eq!(outcome.errors.message("banks.1.loanAmount"), Some(MANDATORY));
        assert!(!outcome.errors.contains("banks.0.bankName"));
    }

    #[test]
    fn missing_required_field_reports_required() {
        let outcome = buyout_schema().validate(&FormValues::new());
        assert_eq!(outcome.errors.get("buyout").map(|e| &e.kind), Some(&ErrorKind::Required));
        assert!(!outcome.errors.contains("banks"));
    }

    #[test]
    fn extend_replaces_in_place_and_adds() {
        let base = Schema::new()
            .field("a", Rule::required_text(MANDATORY))
            .field("b", Rule::Boolean);
        let relaxed = Rule::relaxed();
        let extended = base.extend([("a", &relaxed), ("c", &relaxed)]);
        assert_eq!(extended.names().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert!(matches!(extended.get("a"), Some(Rule::Optional(_))));
        // base untouched
        assert!(matches!(base.get("a"), Some(Rule::Text(_))));
    }

    #[test]
    fn merge_prefers_other() {
        let base = Schema::new().field("a", Rule::required_text(MANDATORY));
        let other = Schema::new().field("a", Rule::relaxed());
        let merged = base.merge(&other);
        assert!(merged.validate(&FormValues::new()).is_valid());
    }

    #[test]
    fn matching_runs_after_field_rules() {
        let schema = Schema::new()
            .field("password", Rule::required_text(MANDATORY))
            .field("password2", Rule::required_text(MANDATORY))
            .matching("password2", "password", "Passwords don't match");

        let outcome = schema.validate(&values(json!({"password": "", "password2": "12"})));
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors.message("password"), Some(MANDATORY));

        let outcome = schema.validate(&values(json!({"password": "12", "password2": "13"})));
        assert_eq!(outcome.errors.message("password2"), Some("Passwords don't match"));
        assert!(outcome.values.is_empty());

        let outcome = schema.validate(&values(json!({"password": "12", "password2": "12"})));
        assert!(outcome.is_valid());
    }

    #[test]
    fn merge_keeps_matching_from_both() {
        let base = Schema::new()
            .field("a", Rule::required_text(MANDATORY))
            .field("b", Rule::required_text(MANDATORY))
            .matching("b", "a", "differs");
        let merged = base.merge(&Schema::new().field("a", Rule::relaxed()));
        let outcome = merged.validate(&values(json!({"a": "x", "b": "y"})));
        assert_eq!(outcome.errors.message("b"), Some("differs"));
    }

    #[test]
    fn validate_path_scopes_errors() {
        let schema = Schema::new()
            .field("name", Rule::required_text(MANDATORY))
            .field("email", Rule::required_text(MANDATORY));
        let errors = schema.validate_path(&values(json!({"name": "", "email": ""})), "email");
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("email"));
    }
}
