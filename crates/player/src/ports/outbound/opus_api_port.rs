//! Opus API Port - the Engine's `/api/opus/*` proxy routes.

use lendform_shared::{FileUploadResponse, RunJobRequest, RunJobResponse};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// The proxy answered with an error body
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// A file picked in a file input, with its bytes read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[cfg_attr(test, mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait OpusApiPort: Send + Sync {
    async fn upload_file(&self, file: PickedFile) -> Result<FileUploadResponse, ApiError>;

    async fn run_job(&self, request: RunJobRequest) -> Result<RunJobResponse, ApiError>;

    /// Raw job result payload; callers poll.
    async fn job_result(&self, job_execution_id: &str) -> Result<Value, ApiError>;
}
