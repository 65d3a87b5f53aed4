//! Opus HKID verification demo
//!
//! Uploads the picked image, starts the verification workflow and polls for
//! its result. Progress is reported through one keyed toast.

use dioxus::prelude::*;
use lendform_domain::{
    DataMask, FieldDescriptor, FormValues, InputType, Rule, Schema, TextInputProps,
};
use serde_json::json;

use super::{date_rule, email_rule, while_submitting, FILE_ACCEPT, MANDATORY};
use crate::application::services::{job_link, HkidSubmission, OpusService, OpusServiceError};
use crate::ui::presentation::components::common::Header;
use crate::ui::presentation::components::FieldRenderer;
use crate::ui::presentation::state::{use_form_state, use_toast_state, ToastKind, ToastState};
use crate::ui::presentation::use_services;
use crate::ui::routes::Route;

const TOAST_KEY: &str = "opus";
const IMAGE_FIELD: &str = "hkidImage";
const IMAGE_MESSAGE: &str = "Please upload HKID image";

const FIELDS: [&str; 5] = ["recipientEmail", "name", "hkid", "dateOfBirth", IMAGE_FIELD];

pub fn descriptors() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text_input(
            "recipientEmail",
            TextInputProps::default()
                .with_type(InputType::Email)
                .with_placeholder("Email address"),
        )
        .with_label("Email address")
        .disabled_when(while_submitting),
        FieldDescriptor::text_input("name", TextInputProps::default().with_placeholder("Full name"))
            .with_label("Name")
            .disabled_when(while_submitting),
        FieldDescriptor::text_input("hkid", TextInputProps::default().with_placeholder("A123456(7)"))
            .with_label("HKID number")
            .disabled_when(while_submitting),
        FieldDescriptor::text_input(
            "dateOfBirth",
            TextInputProps::default()
                .with_placeholder("DD/MM/YYYY")
                .with_max_length(10)
                .with_mask(DataMask::Date),
        )
        .with_label("Date of birth")
        .disabled_when(while_submitting),
        FieldDescriptor::text_input(IMAGE_FIELD, TextInputProps::file(FILE_ACCEPT))
            .with_label("HKID Image")
            .disabled_when(while_submitting),
    ]
}

pub fn schema() -> Schema {
    Schema::new()
        .field("recipientEmail", email_rule())
        .field("name", Rule::required_text(MANDATORY))
        .field("hkid", Rule::required_text(MANDATORY))
        .field("dateOfBirth", date_rule())
        .field(IMAGE_FIELD, Rule::files(IMAGE_MESSAGE))
}

pub fn default_values() -> FormValues {
    FormValues::from_value(json!({
        "recipientEmail": "test@opus.com",
        "name": "Lok, Min",
        "hkid": "12345",
        "dateOfBirth": "12/12/2020",
    }))
    .unwrap_or_default()
}

pub fn submission_from(values: &FormValues) -> HkidSubmission {
    HkidSubmission {
        name: values.get_str("name").to_string(),
        hkid: values.get_str("hkid").to_string(),
        date_of_birth: values.get_str("dateOfBirth").to_string(),
        recipient_email: values.get_str("recipientEmail").to_string(),
    }
}

/// Upload, start, poll. Each stage replaces the keyed toast.
async fn run_workflow(
    opus: &OpusService,
    submission: HkidSubmission,
    image: crate::ports::outbound::PickedFile,
    mut toasts: ToastState,
    mut link: Signal<Option<String>>,
) -> Result<(), OpusServiceError> {
    let started = opus.submit_hkid(&submission, image).await?;
    toasts.show_keyed(TOAST_KEY, ToastKind::Info, "Workflow started...");
    link.set(Some(job_link(&started.job_execution_id)));

    toasts.show_keyed(TOAST_KEY, ToastKind::Loading, "Waiting for result...");
    let result = opus.wait_for_result(&started.job_execution_id).await?;
    tracing::info!(?result, "HKID verification result");
    toasts.show_keyed(TOAST_KEY, ToastKind::Success, "Workflow completed!");
    Ok(())
}

#[component]
pub fn DemoOpusView() -> Element {
    let services = use_services();
    let toasts = use_toast_state();
    let link = use_signal(|| None::<String>);

    let form = use_form_state(|| (schema(), descriptors(), default_values()));
    let disabled = form.fields_disabled();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut form = form.clone();
        let opus = services.opus.clone();
        let mut toasts = toasts;
        async move {
            let Some(values) = form.validate() else {
                return;
            };
            let Some(image) = form.files(IMAGE_FIELD).into_iter().next() else {
                toasts.show_keyed(TOAST_KEY, ToastKind::Error, format!("Error: {IMAGE_MESSAGE}"));
                return;
            };

            form.set_fields_disabled(true);
            toasts.show_keyed(TOAST_KEY, ToastKind::Loading, "Uploading file...");
            if let Err(e) = run_workflow(&opus, submission_from(&values), image, toasts, link).await {
                tracing::error!(error = %e, "HKID workflow failed");
                toasts.show_keyed(TOAST_KEY, ToastKind::Error, format!("Error: {e}"));
            }
            form.set_fields_disabled(false);
        }
    };

    rsx! {
        div {
            class: "page",
            Header { back: Route::HomeRoute {} }
            main {
                class: "page-content",
                h1 { class: "page-title", "Demo Opus" }
                p { class: "page-subtitle", "Please fill the details below." }
                form {
                    class: "form",
                    onsubmit,
                    for name in FIELDS {
                        FieldRenderer { key: "{name}", name: name.to_string() }
                    }
                    if let Some(href) = link() {
                        div {
                            a {
                                class: "job-link",
                                href: "{href}",
                                target: "_blank",
                                "Go to {href}"
                            }
                        }
                    }
                    div {
                        class: "form-actions",
                        button {
                            r#type: "submit",
                            class: "button button--round button--primary",
                            aria_label: "Submit",
                            disabled,
                            "\u{203a}"
                        }
                    }
                }
            }
        }
    }
}
