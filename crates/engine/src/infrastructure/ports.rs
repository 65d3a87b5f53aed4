//! Port traits for infrastructure boundaries.
//!
//! The Opus API is the only external dependency, so it is the only port.

use async_trait::async_trait;
use lendform_shared::{
    ExecuteJobRequest, InitiateJobRequest, InitiateJobResponse, PresignedUpload,
    PresignedUploadRequest,
};
use serde_json::Value;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OpusError {
    /// Opus answered with a non-success status
    #[error("Failed to {operation}: {body}")]
    Upstream {
        operation: &'static str,
        status: u16,
        body: String,
    },
    /// The request never got an answer
    #[error("Opus request failed: {0}")]
    Request(String),
    #[error("Invalid Opus response: {0}")]
    InvalidResponse(String),
}

impl OpusError {
    pub fn upstream(operation: &'static str, status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            operation,
            status,
            body: body.into(),
        }
    }
}

// =============================================================================
// Opus Port
// =============================================================================

/// A file received from the Player, ready to be PUT to a presigned URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OpusPort: Send + Sync {
    async fn request_upload(
        &self,
        request: PresignedUploadRequest,
    ) -> Result<PresignedUpload, OpusError>;
    async fn put_file(&self, presigned_url: &str, file: UploadedFile) -> Result<(), OpusError>;
    async fn initiate_job(
        &self,
        request: InitiateJobRequest,
    ) -> Result<InitiateJobResponse, OpusError>;
    /// Returns the raw execute response.
    async fn execute_job(&self, request: ExecuteJobRequest) -> Result<Value, OpusError>;
    /// Returns the raw result payload; callers poll.
    async fn job_results(&self, job_execution_id: &str) -> Result<Value, OpusError>;
}
