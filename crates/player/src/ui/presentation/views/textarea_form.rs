//! Developer page for multi-line inputs.
//!
//! `feedback` stays disabled until `dummy1` has a value.

use dioxus::prelude::*;
use lendform_domain::{FieldDescriptor, FormValues, Rule, Schema, TextInputProps, TextareaProps};
use serde_json::json;

use super::dev_form::DevFormLayout;
use super::while_submitting;
use crate::ui::presentation::components::FieldRenderer;
use crate::ui::presentation::state::use_form_state;

const MANDATORY: &str = "Mandatory Field";

pub fn descriptors() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text_input("dummy1", TextInputProps::default().with_placeholder("Enter Text"))
            .with_label("Dummy1")
            .disabled_when(while_submitting),
        FieldDescriptor::textarea(
            "concern",
            TextareaProps::default()
                .with_placeholder("Enter your concern")
                .with_rows(5)
                .bulleted(),
        )
        .with_label("Concern (with auto Bullet)")
        .disabled_when(while_submitting),
        FieldDescriptor::textarea(
            "feedback",
            TextareaProps::default().with_placeholder("Disabled dependency"),
        )
        .with_label("Feedback")
        .disabled_when(|values, name, index| {
            while_submitting(values, name, index) || values.get_str("dummy1").is_empty()
        }),
    ]
}

pub fn schema() -> Schema {
    Schema::new()
        .field("dummy1", Rule::required_text(MANDATORY))
        .field("concern", Rule::required_text(MANDATORY))
        .field("feedback", Rule::required_text(MANDATORY))
}

pub fn default_values() -> FormValues {
    FormValues::from_value(json!({"dummy1": "", "concern": "", "feedback": ""})).unwrap_or_default()
}

pub fn filled_values() -> FormValues {
    FormValues::from_value(json!({
        "dummy1": "dummy",
        "concern": "\u{2022} my concern1\n\u{2022} my concern2\n",
        "feedback": "my feedback",
    }))
    .unwrap_or_default()
}

#[component]
pub fn TextareaFormView() -> Element {
    use_form_state(|| (schema(), descriptors(), default_values()));

    rsx! {
        DevFormLayout {
            title: "Textarea",
            empty: default_values(),
            filled: filled_values(),
            div {
                class: "form-grid",
                FieldRenderer { name: "dummy1".to_string() }
                FieldRenderer { name: "feedback".to_string() }
                FieldRenderer { name: "concern".to_string() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lendform_domain::{resolve_field, ConditionalResolver};

    #[test]
    fn test_feedback_waits_for_dummy1() {
        let descriptors = descriptors();
        let empty = default_values();
        assert!(resolve_field("feedback", None, &descriptors, &empty).unwrap().disabled);

        let resolver = ConditionalResolver::new(schema(), descriptors);
        let outcome = resolver.validate(&empty);
        assert_eq!(outcome.errors.message("dummy1"), Some(MANDATORY));
        assert_eq!(outcome.errors.message("concern"), Some(MANDATORY));
        assert!(!outcome.errors.contains("feedback"));
    }

    #[test]
    fn test_filled_values_pass() {
        let resolver = ConditionalResolver::new(schema(), descriptors());
        let outcome = resolver.validate(&filled_values());
        assert!(outcome.is_valid());
        assert_eq!(outcome.values.get_str("feedback"), "my feedback");
    }
}
