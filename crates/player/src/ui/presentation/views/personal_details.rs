//! Personal details page

use std::sync::Arc;

use dioxus::prelude::*;
use lendform_domain::option::options;
use lendform_domain::{
    DataMask, DropdownProps, FieldDescriptor, FormValues, InputType, RadioGroupProps, ReturnType,
    Rule, Schema, TextInputProps,
};
use lendform_shared::AppData;
use serde_json::json;

use super::{date_rule, email_rule, while_submitting, FILE_ACCEPT, MANDATORY};
use crate::ports::outbound::PlatformPort;
use crate::ui::presentation::components::common::Header;
use crate::ui::presentation::components::FieldRenderer;
use crate::ui::presentation::state::{handle_submit, use_form_state, use_toast_state, ToastKind};
use crate::ui::presentation::use_services;
use crate::ui::routes::Route;

const FIELDS: [&str; 12] = [
    "name",
    "dateOfBirth",
    "nationality",
    "email",
    "gender",
    "proofOfAddressDocument",
    "proofOfSalaryDocument",
    "identificationCard",
    "selfiePhoto",
    "identificationCardNumber",
    "mobileNumber",
    "address",
];

const DOCUMENTS: [(&str, &str); 4] = [
    ("proofOfAddressDocument", "Proof of Address Document"),
    ("proofOfSalaryDocument", "Proof of Salary Document"),
    ("identificationCard", "Identification Card"),
    ("selfiePhoto", "Selfie Photo"),
];

fn text(name: &str, label: &str) -> FieldDescriptor {
    FieldDescriptor::text_input(name, TextInputProps::default().with_placeholder(label))
        .with_label(label)
        .disabled_when(while_submitting)
}

pub fn descriptors() -> Vec<FieldDescriptor> {
    let nationalities = options([
        ("United Arab Emirates", "UAE"),
        ("Saudi Arabia", "SA"),
        ("Egypt", "EG"),
        ("India", "IN"),
        ("Pakistan", "PK"),
        ("Bangladesh", "BD"),
        ("Philippines", "PH"),
        ("Jordan", "JO"),
        ("Lebanon", "LB"),
        ("Syria", "SY"),
        ("Other", "OTHER"),
    ]);

    let mut fields = vec![
        text("name", "Name"),
        FieldDescriptor::text_input(
            "dateOfBirth",
            TextInputProps::default()
                .with_placeholder("DD/MM/YYYY")
                .with_max_length(10)
                .with_mask(DataMask::Date),
        )
        .with_label("Date of birth")
        .disabled_when(while_submitting),
        FieldDescriptor::dropdown(
            "nationality",
            DropdownProps::new(ReturnType::Object, nationalities).with_placeholder("Nationality"),
        )
        .with_label("Nationality *")
        .disabled_when(while_submitting),
        FieldDescriptor::text_input(
            "email",
            TextInputProps::default()
                .with_type(InputType::Email)
                .with_placeholder("Email address"),
        )
        .with_label("Email address")
        .disabled_when(while_submitting),
        FieldDescriptor::radio_group(
            "gender",
            RadioGroupProps {
                options: options([("Male", "male"), ("Female", "female")]),
            },
        )
        .with_label("Gender")
        .disabled_when(while_submitting),
    ];
    fields.extend(DOCUMENTS.iter().map(|(name, label)| {
        FieldDescriptor::text_input(*name, TextInputProps::file(FILE_ACCEPT))
            .with_label(*label)
            .disabled_when(while_submitting)
    }));
    fields.push(text("identificationCardNumber", "Identification Card Number"));
    fields.push(text("mobileNumber", "Mobile Number"));
    fields.push(text("address", "Address"));
    fields
}

pub fn schema() -> Schema {
    let mut schema = Schema::new()
        .field("name", Rule::required_text(MANDATORY))
        .field("dateOfBirth", date_rule())
        .field("nationality", Rule::choice(MANDATORY))
        .field("email", email_rule())
        .field("gender", Rule::choice(MANDATORY));
    for (name, _) in DOCUMENTS {
        schema = schema.field(name, Rule::files(MANDATORY));
    }
    schema
        .field("identificationCardNumber", Rule::required_text(MANDATORY))
        .field("mobileNumber", Rule::required_text(MANDATORY))
        .field("address", Rule::required_text(MANDATORY))
}

pub fn default_values() -> FormValues {
    FormValues::from_value(json!({
        "name": "LOK, Wing Ching",
        "dateOfBirth": "03/06/1985",
        "nationality": null,
        "email": "lok.wing.ching@gmail.com",
        "gender": null,
        "identificationCardNumber": "Z683365(5)",
        "mobileNumber": "+1-415-555-1234",
        "address": "FLAT 2, 5/F BLOCK A, HONG KAI COURT, 100 SASSOON ROAD, POK FU LAM, HONG KONG",
    }))
    .unwrap_or_default()
}

/// Defaults overlaid with what was saved last time.
fn initial_values(stored: &AppData) -> FormValues {
    let mut values = default_values();
    if let Some(saved) = stored
        .personal_details
        .clone()
        .and_then(|v| FormValues::from_value(v).ok())
    {
        values.merge(saved);
    }
    values
}

#[component]
pub fn PersonalDetailsView() -> Element {
    let services = use_services();
    let platform = use_context::<Arc<dyn PlatformPort>>();
    let navigator = use_navigator();
    let toasts = use_toast_state();

    let app_data = services.app_data.clone();
    let form = use_form_state(move || (schema(), descriptors(), initial_values(&app_data.load())));
    let disabled = form.fields_disabled();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = form.clone();
        let platform = platform.clone();
        let app_data = services.app_data.clone();
        let mut toasts = toasts;
        async move {
            let Some(values) = handle_submit(form, platform).await else {
                return;
            };
            app_data.update(AppData::default().with_personal_details(values.into_value()));
            toasts.show(ToastKind::Success, "Personal details saved");
            navigator.push(Route::BuyoutRoute {});
        }
    };

    rsx! {
        div {
            class: "page",
            Header { back: Route::ConsentRoute {} }
            main {
                class: "page-content",
                h1 { class: "page-title", "Personal details" }
                p { class: "page-subtitle", "Please confirm the details below." }
                form {
                    class: "form",
                    onsubmit,
                    for name in FIELDS {
                        FieldRenderer { key: "{name}", name: name.to_string() }
                    }
                    button {
                        r#type: "submit",
                        class: "button button--primary",
                        disabled,
                        "Continue"
                    }
                }
            }
        }
    }
}
