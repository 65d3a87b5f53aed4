//! Opus proxy use cases.
//!
//! Each flow is a single pass over the port: nothing is retried here, the
//! Player owns polling.

use std::sync::Arc;

use lendform_shared::{
    ExecuteJobRequest, FileUploadResponse, InitiateJobRequest, JobResultRequest,
    PresignedUploadRequest, RunJobRequest, RunJobResponse,
};
use serde_json::Value;

use crate::infrastructure::ports::{OpusError, OpusPort, UploadedFile};

/// Container for Opus use cases.
pub struct OpusUseCases {
    pub upload_file: Arc<UploadFile>,
    pub run_job: Arc<RunJob>,
    pub job_result: Arc<GetJobResult>,
}

impl OpusUseCases {
    pub fn new(
        upload_file: Arc<UploadFile>,
        run_job: Arc<RunJob>,
        job_result: Arc<GetJobResult>,
    ) -> Self {
        Self {
            upload_file,
            run_job,
            job_result,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OpusUseCaseError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("No jobExecutionId returned from initiate step")]
    MissingJobId,
    #[error(transparent)]
    Opus(#[from] OpusError),
}

impl OpusUseCaseError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Upload a file through a presigned URL.
pub struct UploadFile {
    opus: Arc<dyn OpusPort>,
}

impl UploadFile {
    pub fn new(opus: Arc<dyn OpusPort>) -> Self {
        Self { opus }
    }

    pub async fn execute(&self, file: UploadedFile) -> Result<FileUploadResponse, OpusUseCaseError> {
        if file.bytes.is_empty() {
            return Err(OpusUseCaseError::invalid("file is required"));
        }

        let upload = self
            .opus
            .request_upload(PresignedUploadRequest::for_file_name(&file.file_name))
            .await?;
        let size = file.bytes.len();
        self.opus.put_file(&upload.presigned_url, file).await?;

        tracing::info!(size, file_url = %upload.file_url, "Uploaded file to Opus");
        Ok(FileUploadResponse {
            file_url: upload.file_url,
        })
    }
}

/// Initiate a job, then execute it with the given payload.
pub struct RunJob {
    opus: Arc<dyn OpusPort>,
}

impl RunJob {
    pub fn new(opus: Arc<dyn OpusPort>) -> Self {
        Self { opus }
    }

    pub async fn execute(&self, request: RunJobRequest) -> Result<RunJobResponse, OpusUseCaseError> {
        if request.workflow_id.trim().is_empty() {
            return Err(OpusUseCaseError::invalid("workflowId is required"));
        }
        if !request.payload.is_object() {
            return Err(OpusUseCaseError::invalid(
                "payload is required and must be an object",
            ));
        }

        let initiated = self
            .opus
            .initiate_job(InitiateJobRequest::from(&request))
            .await?;
        let job_execution_id = initiated
            .job_execution_id()
            .ok_or(OpusUseCaseError::MissingJobId)?;

        tracing::info!(
            workflow_id = %request.workflow_id,
            job_execution_id = %job_execution_id,
            "Initiated Opus job"
        );

        let execute_response = self
            .opus
            .execute_job(ExecuteJobRequest {
                job_execution_id: job_execution_id.clone(),
                job_payload_schema_instance: request.payload,
            })
            .await?;

        Ok(RunJobResponse {
            job_execution_id,
            execute_response,
        })
    }
}

/// Fetch the current result payload of a job.
pub struct GetJobResult {
    opus: Arc<dyn OpusPort>,
}

impl GetJobResult {
    pub fn new(opus: Arc<dyn OpusPort>) -> Self {
        Self { opus }
    }

    pub async fn execute(&self, request: JobResultRequest) -> Result<Value, OpusUseCaseError> {
        let id = request.job_execution_id.trim();
        if id.is_empty() {
            return Err(OpusUseCaseError::invalid("jobExecutionId is required"));
        }
        Ok(self.opus.job_results(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockOpusPort;
    use lendform_shared::{InitiateJobResponse, PresignedUpload};
    use mockall::predicate::eq;
    use serde_json::json;

    fn png() -> UploadedFile {
        UploadedFile {
            file_name: "hkid.png".into(),
            content_type: Some("image/png".into()),
            bytes: vec![1, 2, 3],
        }
    }

    #[tokio::test]
    async fn test_upload_puts_to_presigned_url() {
        let mut opus = MockOpusPort::new();
        opus.expect_request_upload()
            .withf(|r| r.file_extension == ".png" && r.access_scope == "user")
            .times(1)
            .returning(|_| {
                Ok(PresignedUpload {
                    presigned_url: "https://bucket/put".into(),
                    file_url: "https://files/hkid.png".into(),
                })
            });
        opus.expect_put_file()
            .withf(|url, file| url == "https://bucket/put" && file.bytes == vec![1, 2, 3])
            .times(1)
            .returning(|_, _| Ok(()));

        let response = UploadFile::new(Arc::new(opus)).execute(png()).await.unwrap();
        assert_eq!(response.file_url, "https://files/hkid.png");
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_file() {
        let opus = MockOpusPort::new();
        let mut file = png();
        file.bytes.clear();
        let err = UploadFile::new(Arc::new(opus)).execute(file).await.unwrap_err();
        assert!(matches!(err, OpusUseCaseError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_run_job_validates_before_calling_opus() {
        let use_case = RunJob::new(Arc::new(MockOpusPort::new()));

        let err = use_case
            .execute(RunJobRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "workflowId is required");

        let err = use_case
            .execute(RunJobRequest {
                workflow_id: "wf".into(),
                payload: json!("text"),
                ..RunJobRequest::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "payload is required and must be an object");
    }

    #[tokio::test]
    async fn test_run_job_initiates_then_executes() {
        let mut opus = MockOpusPort::new();
        opus.expect_initiate_job()
            .with(eq(InitiateJobRequest {
                workflow_id: "wf".into(),
                title: "Untitled Job".into(),
                description: "No description provided".into(),
            }))
            .times(1)
            .returning(|_| {
                Ok(InitiateJobResponse {
                    job_execution_id: Some(json!(17)),
                })
            });
        opus.expect_execute_job()
            .withf(|r| {
                r.job_execution_id == "17" && r.job_payload_schema_instance == json!({ "a": 1 })
            })
            .times(1)
            .returning(|_| Ok(json!({ "status": "queued" })));

        let mut payload = serde_json::Map::new();
        payload.insert("a".into(), json!(1));
        let response = RunJob::new(Arc::new(opus))
            .execute(RunJobRequest::new("wf", payload))
            .await
            .unwrap();
        assert_eq!(response.job_execution_id, "17");
        assert_eq!(response.execute_response["status"], "queued");
    }

    #[tokio::test]
    async fn test_run_job_without_id_stops() {
        let mut opus = MockOpusPort::new();
        opus.expect_initiate_job()
            .returning(|_| Ok(InitiateJobResponse::default()));
        opus.expect_execute_job().never();

        let err = RunJob::new(Arc::new(opus))
            .execute(RunJobRequest::new("wf", serde_json::Map::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, OpusUseCaseError::MissingJobId));
    }

    #[tokio::test]
    async fn test_job_result_passes_payload_through() {
        let mut opus = MockOpusPort::new();
        opus.expect_job_results()
            .with(eq("job-1"))
            .returning(|_| Ok(json!({ "status": "Completed", "outputs": [] })));

        let result = GetJobResult::new(Arc::new(opus))
            .execute(JobResultRequest {
                job_execution_id: " job-1 ".into(),
            })
            .await
            .unwrap();
        assert_eq!(result["status"], "Completed");
    }

    #[tokio::test]
    async fn test_job_result_requires_id() {
        let err = GetJobResult::new(Arc::new(MockOpusPort::new()))
            .execute(JobResultRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "jobExecutionId is required");
    }
}
