//! Shared pieces of the extraction demos: start a job, wait for its
//! records, and offer them as a CSV download.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use dioxus::prelude::*;
use lendform_domain::export::{flatten_object, to_csv};
use serde_json::{Map, Value};

use crate::application::services::{job_link, ExtractionJob, OpusService, OpusServiceError};
use crate::ui::presentation::state::{ToastKind, ToastState};

pub(crate) const TOAST_KEY: &str = "opus";
pub(crate) const CSV_FILE_NAME: &str = "opus-output.csv";

/// `data:` URL holding the records as CSV, or `None` when there are none.
pub fn csv_data_url(records: &[Value]) -> Option<String> {
    if records.is_empty() {
        return None;
    }
    let flat: Vec<_> = records.iter().map(flatten_object).collect();
    let csv = to_csv(&flat);
    Some(format!("data:text/csv;base64,{}", STANDARD.encode(csv)))
}

/// Start `job` and poll for its records, reporting each stage on the keyed
/// toast. The job link is published as soon as the job exists.
pub(crate) async fn run_extraction(
    opus: &OpusService,
    job: &ExtractionJob,
    payload: Map<String, Value>,
    mut toasts: ToastState,
    mut link: Signal<Option<String>>,
) -> Result<Vec<Value>, OpusServiceError> {
    let started = opus.start_extraction(job, payload).await?;
    toasts.show_keyed(TOAST_KEY, ToastKind::Info, "Workflow started...");
    link.set(Some(job_link(&started.job_execution_id)));

    toasts.show_keyed(TOAST_KEY, ToastKind::Loading, "Waiting for result...");
    opus.wait_for_records(&started.job_execution_id, job.output_key).await
}

#[component]
pub(crate) fn JobLinks(link: Option<String>, csv: Option<String>) -> Element {
    rsx! {
        if let Some(href) = link {
            div {
                a { class: "job-link", href: "{href}", target: "_blank", "Go to {href}" }
            }
        }
        if let Some(href) = csv {
            div {
                a { class: "job-link", href: "{href}", download: CSV_FILE_NAME, "Download CSV Output" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_records_no_download() {
        assert_eq!(csv_data_url(&[]), None);
    }

    #[test]
    fn test_records_become_base64_csv() {
        let records = [json!({"name": "Lok", "id": {"number": "A123"}})];
        let url = csv_data_url(&records).unwrap();
        let encoded = url.strip_prefix("data:text/csv;base64,").unwrap();
        let csv = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
        assert!(csv.contains("\"id.number\""));
        assert!(csv.contains("\"A123\""));
    }
}
