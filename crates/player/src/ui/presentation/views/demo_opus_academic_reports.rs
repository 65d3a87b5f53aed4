//! Opus demo: academic reports plus an email-records file, extracted and
//! offered as a CSV download.

use dioxus::prelude::*;
use lendform_domain::{FieldDescriptor, FormValues, InputType, Rule, Schema, TextInputProps};
use lendform_shared::WorkflowInput;
use serde_json::{json, Map, Value};

use super::extraction::{csv_data_url, run_extraction, JobLinks, TOAST_KEY};
use super::{email_rule, while_submitting, FILE_ACCEPT};
use crate::application::services::{ExtractionJob, OpusService, OpusServiceError};
use crate::ports::outbound::PickedFile;
use crate::ui::presentation::components::common::Header;
use crate::ui::presentation::components::FieldRenderer;
use crate::ui::presentation::state::{use_form_state, use_toast_state, ToastKind, ToastState};
use crate::ui::presentation::use_services;
use crate::ui::routes::Route;

const REPORTS_FIELD: &str = "academicReportFiles";
const REPORTS_MESSAGE: &str = "Please upload Academic Report file(s)";
const RECORDS_FIELD: &str = "emailRecords";
const RECORDS_MESSAGE: &str = "Please upload Email Records file";

const FIELDS: [&str; 3] = ["recipientEmail", REPORTS_FIELD, RECORDS_FIELD];

pub const ACADEMIC_REPORTS_JOB: ExtractionJob = ExtractionJob {
    workflow_id: "896CqwWLoLeD8Loo",
    title: "Upload multiple Academic Report Files",
    description: "Upload multiple Academic Report Files and extracts data",
    output_key: "workflow_output_re3nyhd9f",
};

pub fn descriptors() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text_input(
            "recipientEmail",
            TextInputProps::default()
                .with_type(InputType::Email)
                .with_placeholder("Recipient Email address"),
        )
        .with_label("Recipient Email address")
        .disabled_when(while_submitting),
        FieldDescriptor::text_input(REPORTS_FIELD, TextInputProps::file(FILE_ACCEPT).multiple())
            .with_label("Academic Report File(s)")
            .disabled_when(while_submitting),
        FieldDescriptor::text_input(RECORDS_FIELD, TextInputProps::file(FILE_ACCEPT))
            .with_label("Email Records File")
            .disabled_when(while_submitting),
    ]
}

pub fn schema() -> Schema {
    Schema::new()
        .field("recipientEmail", email_rule())
        .field(REPORTS_FIELD, Rule::files(REPORTS_MESSAGE))
        .field(RECORDS_FIELD, Rule::files(RECORDS_MESSAGE))
}

pub fn default_values() -> FormValues {
    FormValues::from_value(json!({"recipientEmail": "roy.anonuevo@growthops.asia"})).unwrap_or_default()
}

pub fn payload(report_urls: &[String], records_url: &str, recipient: &str) -> Map<String, Value> {
    let inputs = [
        (
            "workflow_input_n6r0h8trn",
            WorkflowInput::files("Academic Report Files", report_urls),
        ),
        (
            "workflow_input_10n01sr8g",
            WorkflowInput::file("Email Records File", records_url),
        ),
        (
            "workflow_input_48fzoukai",
            WorkflowInput::text("Recipient Email Address", recipient),
        ),
    ];
    inputs
        .into_iter()
        .map(|(key, input)| (key.to_string(), input.to_value()))
        .collect()
}

async fn run_workflow(
    opus: &OpusService,
    reports: Vec<PickedFile>,
    records: PickedFile,
    recipient: String,
    mut toasts: ToastState,
    link: Signal<Option<String>>,
    mut csv: Signal<Option<String>>,
) -> Result<(), OpusServiceError> {
    let report_urls = opus.upload_all(reports).await?;
    let records_url = opus.upload_all(vec![records]).await?.concat();
    let payload = payload(&report_urls, &records_url, &recipient);

    let records = run_extraction(opus, &ACADEMIC_REPORTS_JOB, payload, toasts, link).await?;
    match csv_data_url(&records) {
        Some(url) => {
            csv.set(Some(url));
            toasts.show_keyed(TOAST_KEY, ToastKind::Success, "CSV is ready for download!");
        }
        None => {
            toasts.show_keyed(TOAST_KEY, ToastKind::Error, "No extracted entries found.");
        }
    };
    toasts.show_keyed(TOAST_KEY, ToastKind::Success, "Workflow completed!");
    Ok(())
}

#[component]
pub fn DemoOpusAcademicReportsView() -> Element {
    let services = use_services();
    let toasts = use_toast_state();
    let link = use_signal(|| None::<String>);
    let mut csv = use_signal(|| None::<String>);

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
            let reports = form.files(REPORTS_FIELD);
            let Some(records) = form.files(RECORDS_FIELD).into_iter().next() else {
                return;
            };
            let recipient = values.get_str("recipientEmail").to_string();

            form.set_fields_disabled(true);
            csv.set(None);
            toasts.show_keyed(TOAST_KEY, ToastKind::Loading, "Uploading file...");
            if let Err(e) = run_workflow(&opus, reports, records, recipient, toasts, link, csv).await {
                tracing::error!(error = %e, "Academic reports workflow failed");
                toasts.show_keyed(TOAST_KEY, ToastKind::Error, format!("Error: {e}"));
            }
            form.set_fields_disabled(false);
        }
    };

    rsx! {
        div {
            class: "page",
            Header { back: Route::DemoOpusRoute {} }
            main {
                class: "page-content",
                h1 { class: "page-title", "Demo Opus - Student Academic Reports" }
                p { class: "page-subtitle", "Please fill the details below." }
                form {
                    class: "form",
                    onsubmit,
                    for name in FIELDS {
                        FieldRenderer { key: "{name}", name: name.to_string() }
                    }
                    JobLinks { link: link(), csv: csv() }
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

#[cfg(test)]
mod tests {
    use super::*;
    use lendform_domain::ConditionalResolver;

    #[test]
    fn test_defaults_miss_both_uploads() {
        let resolver = ConditionalResolver::new(schema(), descriptors());
        let outcome = resolver.validate(&default_values());
        assert_eq!(outcome.errors.len(), 2);
        assert_eq!(outcome.errors.message(REPORTS_FIELD), Some(REPORTS_MESSAGE));
        assert_eq!(outcome.errors.message(RECORDS_FIELD), Some(RECORDS_MESSAGE));
    }

    #[test]
    fn test_payload_inputs() {
        let reports = vec!["https://files/r1.pdf".to_string()];
        let payload = payload(&reports, "https://files/mail.csv", "lok@example.com");
        assert_eq!(payload["workflow_input_n6r0h8trn"]["type"], "array_files");
        assert_eq!(payload["workflow_input_n6r0h8trn"]["value"], json!(["https://files/r1.pdf"]));
        assert_eq!(payload["workflow_input_10n01sr8g"]["value"], "https://files/mail.csv");
        assert_eq!(payload["workflow_input_48fzoukai"]["value"], "lok@example.com");
    }
}
