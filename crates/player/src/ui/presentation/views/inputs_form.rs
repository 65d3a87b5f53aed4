//! Developer page for plain text inputs: passwords, read-only and disabled
//! inputs, and leading/trailing adornments.

use dioxus::prelude::*;
use lendform_domain::{FieldDescriptor, FormValues, InputType, Rule, Schema, TextCheck, TextInputProps};
use serde_json::json;

use super::dev_form::DevFormLayout;
use super::{while_submitting, EMAIL_MESSAGE};
use crate::ui::presentation::components::FieldRenderer;
use crate::ui::presentation::state::use_form_state;

const MANDATORY: &str = "Mandatory Field";
const PASSWORDS_DIFFER: &str = "Passwords don't match";

const FIELDS: [&str; 8] = [
    "name",
    "email",
    "password",
    "password2",
    "readOnlyInput",
    "disabledInput",
    "appendLeftContent",
    "appendRightContent",
];

pub fn descriptors() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text_input("name", TextInputProps::default().with_placeholder("Ex. John Doe"))
            .with_label("Name")
            .disabled_when(while_submitting),
        FieldDescriptor::text_input(
            "email",
            TextInputProps::default()
                .with_type(InputType::Email)
                .with_placeholder("example@domain.com"),
        )
        .with_label("Email (Disabled)")
        .with_disabled(true),
        FieldDescriptor::text_input("password", TextInputProps::password(false).with_placeholder("********"))
            .with_label("Password")
            .disabled_when(while_submitting),
        FieldDescriptor::text_input("password2", TextInputProps::password(true).with_placeholder("********"))
            .with_label("Password (with Toggle)")
            .disabled_when(while_submitting),
        FieldDescriptor::text_input(
            "readOnlyInput",
            TextInputProps::default()
                .with_placeholder("Ex. of read-only")
                .read_only(),
        )
        .with_label("ReadOnly Input")
        .disabled_when(while_submitting),
        FieldDescriptor::text_input("disabledInput", TextInputProps::default())
            .with_label("Disabled Input")
            .with_disabled(true),
        FieldDescriptor::text_input(
            "appendLeftContent",
            TextInputProps::default().with_placeholder("Enter text").with_leading("@"),
        )
        .with_label("Append Left Content")
        .disabled_when(while_submitting),
        FieldDescriptor::text_input(
            "appendRightContent",
            TextInputProps::default().with_placeholder("Enter text").with_trailing("@"),
        )
        .with_label("Append Right Content")
        .disabled_when(while_submitting),
    ]
}

pub fn schema() -> Schema {
    Schema::new()
        .field("name", Rule::required_text(MANDATORY))
        .field(
            "email",
            Rule::text([TextCheck::min_len(1, MANDATORY), TextCheck::email(EMAIL_MESSAGE)]),
        )
        .field(
            "password",
            Rule::text([
                TextCheck::min_len(1, MANDATORY),
                TextCheck::max_len(5, "Maximum 5 characters"),
            ]),
        )
        .field("password2", Rule::required_text(MANDATORY))
        .field("readOnlyInput", Rule::text([]))
        .field("disabledInput", Rule::required_text(MANDATORY))
        .field(
            "appendLeftContent",
            Rule::text([TextCheck::min_len(3, "Minimum 3 characters")]),
        )
        .field("appendRightContent", Rule::required_text(MANDATORY))
        .matching("password2", "password", PASSWORDS_DIFFER)
}

pub fn default_values() -> FormValues {
    FormValues::from_value(json!({
        "name": "",
        "email": "",
        "password": "",
        "password2": "",
        "readOnlyInput": "this is a read-only input",
        "disabledInput": "this is a disabled input",
        "appendLeftContent": "",
        "appendRightContent": "",
    }))
    .unwrap_or_default()
}

pub fn filled_values() -> FormValues {
    FormValues::from_value(json!({
        "name": "Jay Smith",
        "email": "jay@yahooo.co",
        "password": "3214",
        "password2": "3214",
        "readOnlyInput": "this is a read-only input",
        "disabledInput": "this is a disabled input",
        "appendLeftContent": "left",
        "appendRightContent": "right",
    }))
    .unwrap_or_default()
}

#[component]
pub fn InputsFormView() -> Element {
    use_form_state(|| (schema(), descriptors(), default_values()));

    rsx! {
        DevFormLayout {
            title: "Inputs",
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
