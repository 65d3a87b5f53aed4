//! Opus workflows through the Engine proxy: upload the files, start the
//! workflow, then poll for the result.
//!
//! The HKID verification demo waits for a `Completed` status. The extraction
//! demos wait for the job's output payload instead, treating a `202` status
//! code as "still running".

use std::sync::Arc;

use lendform_shared::{RunJobRequest, RunJobResponse, WorkflowInput};
use serde_json::{Map, Value};

use crate::ports::outbound::{ApiError, OpusApiPort, PickedFile, PlatformPort};

pub const HKID_WORKFLOW_ID: &str = "PNRJPVlR3e8KrLnH";
pub const HKID_JOB_TITLE: &str = "HKID Verification";
pub const HKID_JOB_DESCRIPTION: &str = "Verifies HKID and extracts data";

pub const POLL_ATTEMPTS: usize = 10;
pub const OUTPUT_POLL_ATTEMPTS: usize = 100;
pub const POLL_INTERVAL_MS: u64 = 2_000;

const COMPLETED_STATUS: &str = "Completed";
const PENDING_STATUS_CODE: u64 = 202;
const OUTPUT_PAYLOAD_KEY: &str = "jobResultsPayloadSchema";
const JOB_LINK_BASE: &str = "https://app.opus.com/app/job/";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OpusServiceError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Job {job_execution_id} did not complete after {attempts} checks")]
    NotCompleted {
        job_execution_id: String,
        attempts: usize,
    },
}

/// Text fields of the demo form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HkidSubmission {
    pub name: String,
    pub hkid: String,
    pub date_of_birth: String,
    pub recipient_email: String,
}

impl HkidSubmission {
    /// Workflow payload keyed by the workflow's input ids.
    pub fn payload(&self, file_url: &str) -> Map<String, Value> {
        let inputs = [
            ("workflow_input_sxrvlbmci", WorkflowInput::text("Name", &self.name)),
            ("workflow_input_ozgbyqxhw", WorkflowInput::text("HKID Number", &self.hkid)),
            (
                "workflow_input_t8r8kh4oz",
                WorkflowInput::text("Date of Birth", &self.date_of_birth),
            ),
            ("hkid_image", WorkflowInput::file("HKID Image", file_url)),
            (
                "workflow_input_gq3ljz4w5",
                WorkflowInput::text("Recipient Email Address", &self.recipient_email),
            ),
        ];
        inputs
            .into_iter()
            .map(|(key, input)| (key.to_string(), input.to_value()))
            .collect()
    }
}

/// An extraction workflow: which job to start and which output to collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionJob {
    pub workflow_id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub output_key: &'static str,
}

pub fn job_link(job_execution_id: &str) -> String {
    format!("{JOB_LINK_BASE}{job_execution_id}")
}

fn is_completed(result: &Value) -> bool {
    result.get("status").and_then(Value::as_str) == Some(COMPLETED_STATUS)
}

fn is_pending(result: &Value) -> bool {
    result.get("statusCode").and_then(Value::as_u64) == Some(PENDING_STATUS_CODE)
}

/// Records under `output_key` once the output payload exists. A missing or
/// non-list output reads as no records.
fn output_records(result: &Value, output_key: &str) -> Option<Vec<Value>> {
    let outputs = result.get(OUTPUT_PAYLOAD_KEY)?;
    let records = match outputs.get(output_key).and_then(|o| o.get("value")) {
        Some(Value::Array(records)) => records.clone(),
        _ => Vec::new(),
    };
    Some(records)
}

#[derive(Clone)]
pub struct OpusService {
    api: Arc<dyn OpusApiPort>,
    platform: Arc<dyn PlatformPort>,
}

impl OpusService {
    pub fn new(api: Arc<dyn OpusApiPort>, platform: Arc<dyn PlatformPort>) -> Self {
        Self { api, platform }
    }

    /// Upload the HKID image and start the verification workflow.
    pub async fn submit_hkid(
        &self,
        submission: &HkidSubmission,
        image: PickedFile,
    ) -> Result<RunJobResponse, OpusServiceError> {
        let file_name = image.name.clone();
        let uploaded = self.api.upload_file(image).await?;
        tracing::info!(file = %file_name, "HKID image uploaded");

        let request = RunJobRequest::new(HKID_WORKFLOW_ID, submission.payload(&uploaded.file_url))
            .with_title(HKID_JOB_TITLE)
            .with_description(HKID_JOB_DESCRIPTION);
        let response = self.api.run_job(request).await?;
        tracing::info!(job_execution_id = %response.job_execution_id, "Workflow started");
        Ok(response)
    }

    /// Upload every file in order, stopping at the first failure.
    pub async fn upload_all(&self, files: Vec<PickedFile>) -> Result<Vec<String>, OpusServiceError> {
        let mut urls = Vec::with_capacity(files.len());
        for file in files {
            let file_name = file.name.clone();
            let uploaded = self.api.upload_file(file).await?;
            tracing::debug!(file = %file_name, "File uploaded");
            urls.push(uploaded.file_url);
        }
        tracing::info!(count = urls.len(), "Files uploaded");
        Ok(urls)
    }

    pub async fn start_extraction(
        &self,
        job: &ExtractionJob,
        payload: Map<String, Value>,
    ) -> Result<RunJobResponse, OpusServiceError> {
        let request = RunJobRequest::new(job.workflow_id, payload)
            .with_title(job.title)
            .with_description(job.description);
        let response = self.api.run_job(request).await?;
        tracing::info!(job_execution_id = %response.job_execution_id, workflow = job.workflow_id, "Extraction started");
        Ok(response)
    }

    /// Poll up to `OUTPUT_POLL_ATTEMPTS` times for the job's output records.
    pub async fn wait_for_records(
        &self,
        job_execution_id: &str,
        output_key: &str,
    ) -> Result<Vec<Value>, OpusServiceError> {
        for attempt in 1..=OUTPUT_POLL_ATTEMPTS {
            let result = self.api.job_result(job_execution_id).await?;
            if !is_pending(&result) {
                if let Some(records) = output_records(&result, output_key) {
                    tracing::info!(%job_execution_id, attempt, records = records.len(), "Job output ready");
                    return Ok(records);
                }
            }
            tracing::debug!(%job_execution_id, attempt, "Job output not ready yet");
            if attempt < OUTPUT_POLL_ATTEMPTS {
                self.platform.sleep_ms(POLL_INTERVAL_MS).await;
            }
        }
        tracing::warn!(%job_execution_id, "Gave up waiting for job output");
        Err(OpusServiceError::NotCompleted {
            job_execution_id: job_execution_id.to_string(),
            attempts: OUTPUT_POLL_ATTEMPTS,
        })
    }

    /// Check the job up to `POLL_ATTEMPTS` times, `POLL_INTERVAL_MS` apart.
    pub async fn wait_for_result(&self, job_execution_id: &str) -> Result<Value, OpusServiceError> {
        for attempt in 1..=POLL_ATTEMPTS {
            let result = self.api.job_result(job_execution_id).await?;
            if is_completed(&result) {
                tracing::info!(%job_execution_id, attempt, "Job completed");
                return Ok(result);
            }
            tracing::debug!(%job_execution_id, attempt, "Job not completed yet");
            if attempt < POLL_ATTEMPTS {
                self.platform.sleep_ms(POLL_INTERVAL_MS).await;
            }
        }
        tracing::warn!(%job_execution_id, "Gave up waiting for job result");
        Err(OpusServiceError::NotCompleted {
            job_execution_id: job_execution_id.to_string(),
            attempts: POLL_ATTEMPTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::create_mock_platform;
    use crate::ports::outbound::MockOpusApiPort;
    use lendform_shared::FileUploadResponse;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn submission() -> HkidSubmission {
        HkidSubmission {
            name: "Chan Tai Man".into(),
            hkid: "A123456(7)".into(),
            date_of_birth: "03/06/1985".into(),
            recipient_email: "chan@example.com".into(),
        }
    }

    fn image() -> PickedFile {
        PickedFile {
            name: "hkid.png".into(),
            content_type: Some("image/png".into()),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_payload_shape() {
        let payload = submission().payload("https://files/hkid.png");
        assert_eq!(payload.len(), 5);
        assert_eq!(
            payload["hkid_image"],
            json!({"display_name": "HKID Image", "value": "https://files/hkid.png", "type": "file"})
        );
        assert_eq!(
            payload["workflow_input_ozgbyqxhw"],
            json!({"display_name": "HKID Number", "value": "A123456(7)", "type": "str"})
        );
    }

    #[test]
    fn test_job_link() {
        assert_eq!(job_link("abc"), "https://app.opus.com/app/job/abc");
    }

    #[tokio::test]
    async fn test_submit_uploads_then_runs_job() {
        let mut api = MockOpusApiPort::new();
        api.expect_upload_file()
            .withf(|file| file.name == "hkid.png" && file.bytes == vec![1, 2, 3])
            .times(1)
            .returning(|_| {
                Ok(FileUploadResponse {
                    file_url: "https://files/hkid.png".into(),
                })
            });
        api.expect_run_job()
            .withf(|request| {
                request.workflow_id == HKID_WORKFLOW_ID
                    && request.title.as_deref() == Some(HKID_JOB_TITLE)
                    && request.payload["hkid_image"]["value"] == "https://files/hkid.png"
            })
            .times(1)
            .returning(|_| {
                Ok(RunJobResponse {
                    job_execution_id: "job-1".into(),
                    execute_response: json!({"ok": true}),
                })
            });

        let (platform, _, _) = create_mock_platform();
        let service = OpusService::new(Arc::new(api), Arc::new(platform));
        let response = service.submit_hkid(&submission(), image()).await.unwrap();
        assert_eq!(response.job_execution_id, "job-1");
    }

    #[tokio::test]
    async fn test_submit_stops_when_upload_fails() {
        let mut api = MockOpusApiPort::new();
        api.expect_upload_file().returning(|_| {
            Err(ApiError::Server {
                status: 502,
                message: "Failed to upload file: denied".into(),
            })
        });
        api.expect_run_job().never();

        let (platform, _, _) = create_mock_platform();
        let service = OpusService::new(Arc::new(api), Arc::new(platform));
        let err = service.submit_hkid(&submission(), image()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to upload file: denied");
    }

    #[tokio::test]
    async fn test_poll_stops_on_completion() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut api = MockOpusApiPort::new();
        api.expect_job_result().returning(move |_| {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            if n < 2 {
                Ok(json!({"status": "In Progress"}))
            } else {
                Ok(json!({"status": "Completed", "data": 1}))
            }
        });

        let (platform, _, sleep) = create_mock_platform();
        let service = OpusService::new(Arc::new(api), Arc::new(platform));
        let result = service.wait_for_result("job-1").await.unwrap();
        assert_eq!(result["data"], 1);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(sleep.calls(), vec![POLL_INTERVAL_MS, POLL_INTERVAL_MS]);
    }

    #[tokio::test]
    async fn test_poll_gives_up_after_bound() {
        let mut api = MockOpusApiPort::new();
        api.expect_job_result()
            .times(POLL_ATTEMPTS)
            .returning(|_| Ok(json!({"status": "Running"})));

        let (platform, _, sleep) = create_mock_platform();
        let service = OpusService::new(Arc::new(api), Arc::new(platform));
        let err = service.wait_for_result("job-9").await.unwrap_err();
        assert_eq!(
            err,
            OpusServiceError::NotCompleted {
                job_execution_id: "job-9".into(),
                attempts: POLL_ATTEMPTS
            }
        );
        assert_eq!(sleep.calls().len(), POLL_ATTEMPTS - 1);
    }

    const EXTRACTION: ExtractionJob = ExtractionJob {
        workflow_id: "wf-extract",
        title: "Extract",
        description: "Extracts data",
        output_key: "compiled_json",
    };

    #[tokio::test]
    async fn test_upload_all_keeps_order() {
        let mut api = MockOpusApiPort::new();
        api.expect_upload_file().times(2).returning(|file| {
            Ok(FileUploadResponse {
                file_url: format!("https://files/{}", file.name),
            })
        });

        let (platform, _, _) = create_mock_platform();
        let service = OpusService::new(Arc::new(api), Arc::new(platform));
        let mut second = image();
        second.name = "back.png".into();
        let urls = service.upload_all(vec![image(), second]).await.unwrap();
        assert_eq!(urls, vec!["https://files/hkid.png", "https://files/back.png"]);
    }

    #[tokio::test]
    async fn test_start_extraction_uses_job_metadata() {
        let mut api = MockOpusApiPort::new();
        api.expect_run_job()
            .withf(|request| {
                request.workflow_id == "wf-extract"
                    && request.title.as_deref() == Some("Extract")
                    && request.description.as_deref() == Some("Extracts data")
            })
            .times(1)
            .returning(|_| {
                Ok(RunJobResponse {
                    job_execution_id: "job-7".into(),
                    execute_response: json!({}),
                })
            });

        let (platform, _, _) = create_mock_platform();
        let service = OpusService::new(Arc::new(api), Arc::new(platform));
        let response = service.start_extraction(&EXTRACTION, Map::new()).await.unwrap();
        assert_eq!(response.job_execution_id, "job-7");
    }

    #[tokio::test]
    async fn test_records_wait_out_pending_status() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut api = MockOpusApiPort::new();
        api.expect_job_result().returning(move |_| {
            if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                Ok(json!({"statusCode": 202}))
            } else {
                Ok(json!({"jobResultsPayloadSchema": {"compiled_json": {"value": [{"a": 1}]}}}))
            }
        });

        let (platform, _, sleep) = create_mock_platform();
        let service = OpusService::new(Arc::new(api), Arc::new(platform));
        let records = service.wait_for_records("job-7", EXTRACTION.output_key).await.unwrap();
        assert_eq!(records, vec![json!({"a": 1})]);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(sleep.calls(), vec![POLL_INTERVAL_MS, POLL_INTERVAL_MS]);
    }

    #[tokio::test]
    async fn test_missing_output_reads_as_no_records() {
        let mut api = MockOpusApiPort::new();
        api.expect_job_result()
            .times(1)
            .returning(|_| Ok(json!({"jobResultsPayloadSchema": {}})));

        let (platform, _, _) = create_mock_platform();
        let service = OpusService::new(Arc::new(api), Arc::new(platform));
        let records = service.wait_for_records("job-7", EXTRACTION.output_key).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_records_give_up_after_bound() {
        let mut api = MockOpusApiPort::new();
        api.expect_job_result()
            .times(OUTPUT_POLL_ATTEMPTS)
            .returning(|_| Ok(json!({"statusCode": 202})));

        let (platform, _, sleep) = create_mock_platform();
        let service = OpusService::new(Arc::new(api), Arc::new(platform));
        let err = service.wait_for_records("job-8", "out").await.unwrap_err();
        assert!(matches!(err, OpusServiceError::NotCompleted { attempts: OUTPUT_POLL_ATTEMPTS, .. }));
        assert_eq!(sleep.calls().len(), OUTPUT_POLL_ATTEMPTS - 1);
    }

    #[tokio::test]
    async fn test_poll_propagates_api_error() {
        let mut api = MockOpusApiPort::new();
        api.expect_job_result()
            .times(1)
            .returning(|_| Err(ApiError::RequestFailed("offline".into())));

        let (platform, _, _) = create_mock_platform();
        let service = OpusService::new(Arc::new(api), Arc::new(platform));
        let err = service.wait_for_result("job-1").await.unwrap_err();
        assert!(matches!(err, OpusServiceError::Api(ApiError::RequestFailed(_))));
    }
}
