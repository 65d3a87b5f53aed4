//! Email address step of the registration flow.

use dioxus::prelude::*;
use lendform_domain::{
    CheckboxProps, FieldDescriptor, FormValues, InputType, Rule, Schema, TextCheck, TextInputProps,
};
use lendform_shared::AppData;
use serde_json::{json, Value};

use crate::ui::presentation::components::FieldRenderer;
use crate::ui::presentation::state::use_form_state;
use crate::ui::presentation::use_services;
use crate::ui::routes::Route;

/// `AppData` key holding the address to verify later
pub const EMAIL_KEY: &str = "email";

const MANDATORY: &str = "Mandatory Field";
const TERMS_MESSAGE: &str = "You must agree to the Terms & Conditions";

pub fn descriptors() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text_input(
            "email",
            TextInputProps::default()
                .with_type(InputType::Email)
                .with_placeholder("Enter your email"),
        )
        .with_label("Email address")
        .with_description("You will need to verify your email address later"),
        FieldDescriptor::checkbox(
            "agreeTerms",
            CheckboxProps::single("I agree to the Terms & Conditions"),
        ),
    ]
}

pub fn schema() -> Schema {
    Schema::new()
        .field(
            "email",
            Rule::text([
                TextCheck::min_len(1, MANDATORY),
                TextCheck::email("Enter a valid email address"),
            ]),
        )
        .field("agreeTerms", Rule::accepted(TERMS_MESSAGE))
}

pub fn default_values() -> FormValues {
    FormValues::from_value(json!({"email": "", "agreeTerms": false})).unwrap_or_default()
}

#[component]
pub fn EmailView() -> Element {
    let services = use_services();
    let navigator = use_navigator();
    let form = use_form_state(|| (schema(), descriptors(), default_values()));

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut form = form.clone();
        if let Some(values) = form.validate() {
            let email = values.get_str("email").to_string();
            services
                .app_data
                .update(AppData::default().with_extra(EMAIL_KEY, Value::String(email)));
            tracing::info!("Email saved");
            navigator.push(Route::ProductsRoute {});
        }
    };

    rsx! {
        div {
            class: "page",
            main {
                class: "page-content",
                h1 { class: "page-title", "Up next!" }
                p { class: "page-subtitle", "Let's get to know each other more" }
                form {
                    class: "form",
                    onsubmit,
                    FieldRenderer { name: "email".to_string() }
                    div {
                        class: "info-box",
                        h2 { class: "info-box-title", "Stay connected with Al Hilal Bank" }
                        p {
                            class: "info-box-text",
                            "We use your email to share important updates, offers, and support your banking experience."
                        }
                    }
                    FieldRenderer { name: "agreeTerms".to_string() }
                    div {
                        class: "form-actions",
                        button {
                            r#type: "submit",
                            class: "button button--round button--primary",
                            aria_label: "Next",
                            "\u{203a}"
                        }
                    }
                }
            }
        }
    }
}
