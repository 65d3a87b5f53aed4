//! Developer page for masked, debounced, and digit inputs.

use dioxus::prelude::*;
use lendform_domain::{DataMask, DigitProps, FieldDescriptor, FormValues, Rule, Schema, TextCheck, TextInputProps};
use serde_json::json;

use super::dev_form::DevFormLayout;
use super::{date_rule, push_pattern, while_submitting};
use crate::ui::presentation::components::FieldRenderer;
use crate::ui::presentation::state::use_form_state;

const MANDATORY: &str = "Mandatory Field";
const DEBOUNCE_MS: u64 = 2_000;

const FIELDS: [&str; 6] = ["dateOfBirth", "debounce", "timeHours", "timeMinutes", "amount", "mobile"];

pub fn descriptors() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text_input(
            "dateOfBirth",
            TextInputProps::default()
                .with_placeholder("DD/MM/YYYY")
                .with_max_length(10)
                .with_mask(DataMask::Date),
        )
        .with_label("Date of birth (mask)")
        .disabled_when(while_submitting),
        FieldDescriptor::text_input(
            "debounce",
            TextInputProps::default()
                .with_placeholder("Updates 2s after you stop typing")
                .with_debounce(DEBOUNCE_MS),
        )
        .with_label("Debounce")
        .disabled_when(while_submitting),
        FieldDescriptor::digit_input(
            "timeHours",
            DigitProps::default()
                .with_placeholder("23")
                .with_max_value(23.0)
                .integers_only()
                .padded()
                .with_trailing("hrs"),
        )
        .with_label("Hours (digits)")
        .disabled_when(while_submitting),
        FieldDescriptor::digit_input(
            "timeMinutes",
            DigitProps::default()
                .with_placeholder("59")
                .with_max_value(59.0)
                .integers_only()
                .padded()
                .with_trailing("mins"),
        )
        .with_label("Minutes (digits)")
        .disabled_when(while_submitting),
        FieldDescriptor::digit_input(
            "amount",
            DigitProps::default()
                .with_placeholder("Enter the amount")
                .with_max_value(20_000.0)
                .with_leading("AED"),
        )
        .with_label("Amount (digits)")
        .disabled_when(while_submitting),
        FieldDescriptor::digit_input(
            "mobile",
            DigitProps::default()
                .with_placeholder("Mobile number")
                .integers_only()
                .with_max_length(9)
                .with_leading("+63"),
        )
        .with_label("Mobile (digits)")
        .disabled_when(while_submitting),
    ]
}

pub fn schema() -> Schema {
    let mut mobile = vec![TextCheck::min_len(1, MANDATORY)];
    push_pattern(&mut mobile, r"^\d{7,12}$", "Enter a valid number");
    Schema::new()
        .field("dateOfBirth", date_rule())
        .field(
            "debounce",
            Rule::text([TextCheck::min_len(3, "Minimum 3 characters")]),
        )
        .field("timeHours", Rule::required_text(MANDATORY))
        .field("timeMinutes", Rule::required_text(MANDATORY))
        .field("amount", Rule::required_text(MANDATORY))
        .field("mobile", Rule::text(mobile))
}

pub fn default_values() -> FormValues {
    FormValues::from_value(json!({
        "dateOfBirth": "",
        "debounce": "",
        "timeHours": "",
        "timeMinutes": "",
        "amount": "",
        "mobile": "",
    }))
    .unwrap_or_default()
}

pub fn filled_values() -> FormValues {
    FormValues::from_value(json!({
        "dateOfBirth": "12/12/1991",
        "debounce": "test",
        "timeHours": "10",
        "timeMinutes": "30",
        "amount": "2500.50",
        "mobile": "935884558",
    }))
    .unwrap_or_default()
}

#[component]
pub fn ExtendedInputsFormView() -> Element {
    use_form_state(|| (schema(), descriptors(), default_values()));

    rsx! {
        DevFormLayout {
            title: "Extended Inputs",
            empty: default_values(),
            filled: filled_values(),
            div {
                class: "form-grid",
                for name in FIELDS {
                    FieldRenderer { key: "{name}", name: name.to_string() }
                }
            }
        }
    }
}
