//! Developer form exercising conditional disabling
//!
//! `dummy2` stays disabled (and unvalidated) until `dummy1` has a value;
//! each customer's country is disabled until a continent is picked.

use std::sync::Arc;

use dioxus::prelude::*;
use lendform_domain::option::options;
use lendform_domain::{
    CheckboxProps, DigitProps, DropdownProps, FieldDescriptor, FormValues, ReturnType, Rule,
    Schema, TextInputProps,
};
use serde_json::{json, Value};

use super::{while_submitting, MANDATORY};
use crate::ports::outbound::PlatformPort;
use crate::ui::presentation::components::common::Header;
use crate::ui::presentation::components::{FieldArraySection, FieldRenderer};
use crate::ui::presentation::state::{handle_submit, use_form_state, use_toast_state, ToastKind};
use crate::ui::routes::Route;

const CUSTOMER_FIELDS: [&str; 4] = ["name", "continents", "countries", "timeHours"];

fn initial_customer() -> Value {
    json!({"name": "", "continents": "", "countries": null, "timeHours": ""})
}

/// Disabled while submitting, or until this customer has a continent.
fn country_disabled(values: &FormValues, name: &str, index: Option<usize>) -> bool {
    if while_submitting(values, name, index) {
        return true;
    }
    match index {
        Some(i) => values.get_str(&format!("customers.{i}.continents")).is_empty(),
        None => false,
    }
}

pub fn descriptors() -> Vec<FieldDescriptor> {
    let customer = vec![
        FieldDescriptor::text_input("name", TextInputProps::default().with_placeholder("Enter text"))
            .with_label("Name")
            .disabled_when(while_submitting),
        FieldDescriptor::dropdown(
            "continents",
            DropdownProps::new(
                ReturnType::Value,
                options([
                    ("Africa", "africa"),
                    ("Asia", "asia"),
                    ("Europe", "europe"),
                    ("North America", "north-america"),
                    ("Oceania", "oceania"),
                    ("South America", "south-america"),
                ]),
            )
            .with_placeholder("Select continent"),
        )
        .with_label("Continent (single value)")
        .with_description("Note: return single string")
        .disabled_when(while_submitting),
        FieldDescriptor::dropdown(
            "countries",
            DropdownProps::new(
                ReturnType::Object,
                options([
                    ("Hong Kong", "HK"),
                    ("Japan", "JP"),
                    ("United Arab Emirates", "AE"),
                    ("United Kingdom", "GB"),
                    ("United States", "US"),
                ]),
            )
            .with_placeholder("Select country (needs a continent)"),
        )
        .with_label("Country (option object)")
        .with_description("Note: re-selecting the chosen option clears it")
        .disabled_when(country_disabled),
        FieldDescriptor::digit_input(
            "timeHours",
            DigitProps::default().with_placeholder("12").with_max_value(24.0),
        )
        .with_label("24 Hours")
        .disabled_when(while_submitting),
    ];

    vec![
        FieldDescriptor::text_input(
            "dummy1",
            TextInputProps::default()
                .with_leading("@")
                .with_placeholder("Enter text"),
        )
        .with_label("Dummy1")
        .disabled_when(while_submitting),
        FieldDescriptor::text_input(
            "dummy2",
            TextInputProps::default().with_placeholder("dummy (needs Dummy1)"),
        )
        .with_label("Dummy2")
        .disabled_when(|values, name, index| {
            while_submitting(values, name, index) || values.get_str("dummy1").is_empty()
        }),
        FieldDescriptor::checkbox(
            "agree",
            CheckboxProps::single(
                "I agree to Lorem Ipsum is simply dummy text of the printing and typesetting industry.",
            ),
        )
        .disabled_when(while_submitting),
        FieldDescriptor::array_group("customers", customer)
            .with_label("Customers")
            .disabled_when(while_submitting),
    ]
}

pub fn schema() -> Schema {
    let customer = Schema::new()
        .field("name", Rule::required_text(MANDATORY))
        .field("continents", Rule::choice(MANDATORY))
        .field("countries", Rule::choice("Mandatory Field"))
        .field("timeHours", Rule::required_text(MANDATORY));
    Schema::new()
        .field("dummy1", Rule::required_text(MANDATORY))
        .field("dummy2", Rule::required_text(MANDATORY))
        .field("customers", Rule::list(Rule::group(customer), 1, MANDATORY))
        .field("agree", Rule::accepted(MANDATORY))
}

pub fn default_values() -> FormValues {
    FormValues::from_value(json!({
        "dummy1": "",
        "dummy2": "",
        "customers": [initial_customer()],
        "agree": false,
    }))
    .unwrap_or_default()
}

#[component]
pub fn ConditionalFormView() -> Element {
    let platform = use_context::<Arc<dyn PlatformPort>>();
    let toasts = use_toast_state();

    let form = use_form_state(|| (schema(), descriptors(), default_values()));
    let disabled = form.fields_disabled();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = form.clone();
        let platform = platform.clone();
        let mut toasts = toasts;
        async move {
            if let Some(values) = handle_submit(form, platform).await {
                tracing::info!(values = %values.to_value(), "Conditional form submitted");
                toasts.show(ToastKind::Success, "Form submitted");
            }
        }
    };

    rsx! {
        div {
            class: "page",
            Header { back: Route::HomeRoute {}, title: "Array Of Fields" }
            main {
                class: "page-content",
                form {
                    class: "form",
                    onsubmit,
                    div {
                        class: "form-grid",
                        FieldRenderer { name: "dummy1".to_string() }
                        FieldRenderer { name: "dummy2".to_string() }
                    }
                    FieldArraySection {
                        group: "customers".to_string(),
                        title: "Customers".to_string(),
                        item_label: "Customer".to_string(),
                        fields: CUSTOMER_FIELDS.iter().map(|f| f.to_string()).collect::<Vec<_>>(),
                        initial: initial_customer(),
                    }
                    FieldRenderer { name: "agree".to_string() }
                    button {
                        r#type: "submit",
                        class: "button button--primary",
                        disabled,
                        "Submit"
                    }
                }
            }
        }
    }
}
