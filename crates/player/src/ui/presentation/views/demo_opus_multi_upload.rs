//! Opus demo: several HKID images through one extraction job, exported as
//! CSV.

use dioxus::prelude::*;
use lendform_domain::{FieldDescriptor, FormValues, Rule, Schema, TextInputProps};
use lendform_shared::WorkflowInput;
use serde_json::{Map, Value};

use super::extraction::{csv_data_url, run_extraction, JobLinks, TOAST_KEY};
use super::{while_submitting, FILE_ACCEPT};
use crate::application::services::{ExtractionJob, OpusService, OpusServiceError};
use crate::ports::outbound::PickedFile;
use crate::ui::presentation::components::common::Header;
use crate::ui::presentation::components::FieldRenderer;
use crate::ui::presentation::state::{use_form_state, use_toast_state, ToastKind, ToastState};
use crate::ui::presentation::use_services;
use crate::ui::routes::Route;

const IMAGES_FIELD: &str = "hkidImage";
const IMAGES_MESSAGE: &str = "Please upload HKID image";

pub const MULTI_HKID_JOB: ExtractionJob = ExtractionJob {
    workflow_id: "bQQj72mwLWzKE1xg",
    title: "Upload multiple HKID Images",
    description: "Upload multiple HKID Images and extracts data",
    output_key: "compiled_hk_id_json",
};

pub fn descriptors() -> Vec<FieldDescriptor> {
    vec![FieldDescriptor::text_input(IMAGES_FIELD, TextInputProps::file(FILE_ACCEPT).multiple())
        .with_label("HKID Image(s)")
        .disabled_when(while_submitting)]
}

pub fn schema() -> Schema {
    Schema::new().field(IMAGES_FIELD, Rule::files(IMAGES_MESSAGE))
}

pub fn payload(image_urls: &[String]) -> Map<String, Value> {
    let mut payload = Map::new();
    payload.insert(
        "hong_kong_id_files".to_string(),
        WorkflowInput::files("HKID Images", image_urls).to_value(),
    );
    payload
}

async fn run_workflow(
    opus: &OpusService,
    images: Vec<PickedFile>,
    mut toasts: ToastState,
    link: Signal<Option<String>>,
    mut csv: Signal<Option<String>>,
) -> Result<(), OpusServiceError> {
    let urls = opus.upload_all(images).await?;
    let records = run_extraction(opus, &MULTI_HKID_JOB, payload(&urls), toasts, link).await?;
    match csv_data_url(&records) {
        Some(url) => {
            csv.set(Some(url));
            toasts.show_keyed(TOAST_KEY, ToastKind::Success, "CSV Exported!");
        }
        None => {
            toasts.show_keyed(TOAST_KEY, ToastKind::Error, "No extracted entries found.");
        }
    };
    toasts.show_keyed(TOAST_KEY, ToastKind::Success, "Workflow completed!");
    Ok(())
}

#[component]
pub fn DemoOpusMultiUploadView() -> Element {
    let services = use_services();
    let toasts = use_toast_state();
    let link = use_signal(|| None::<String>);
    let mut csv = use_signal(|| None::<String>);

    let form = use_form_state(|| (schema(), descriptors(), FormValues::default()));
    let disabled = form.fields_disabled();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut form = form.clone();
        let opus = services.opus.clone();
        let mut toasts = toasts;
        async move {
            if form.validate().is_none() {
                return;
            }
            let images = form.files(IMAGES_FIELD);
            form.set_fields_disabled(true);
            csv.set(None);
            toasts.show_keyed(TOAST_KEY, ToastKind::Loading, "Uploading file...");
            if let Err(e) = run_workflow(&opus, images, toasts, link, csv).await {
                tracing::error!(error = %e, "Multi-upload workflow failed");
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
                h1 { class: "page-title", "Demo Opus - Multi Upload" }
                p { class: "page-subtitle", "Please fill the details below." }
                form {
                    class: "form",
                    onsubmit,
                    FieldRenderer { name: IMAGES_FIELD.to_string() }
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
