//! HTTP client for the Engine's Opus proxy routes.

use lendform_shared::{
    ErrorBody, FileUploadResponse, JobResultRequest, RunJobRequest, RunJobResponse,
};
use reqwest::{multipart, Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ports::outbound::{ApiError, OpusApiPort, PickedFile};

#[derive(Clone)]
pub struct OpusHttpClient {
    client: Client,
    base_url: String,
}

impl OpusHttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Decode a success body, or surface the proxy's `{ error }` message.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("Request failed with status {}", status.as_u16()));
        tracing::warn!(status = status.as_u16(), error = %message, "Engine request failed");
        return Err(ApiError::Server {
            status: status.as_u16(),
            message,
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::ParseError(e.to_string()))
}

fn request_failed(e: reqwest::Error) -> ApiError {
    ApiError::RequestFailed(e.to_string())
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl OpusApiPort for OpusHttpClient {
    async fn upload_file(&self, file: PickedFile) -> Result<FileUploadResponse, ApiError> {
        let mut part = multipart::Part::bytes(file.bytes).file_name(file.name);
        if let Some(content_type) = file.content_type.as_deref() {
            part = part.mime_str(content_type).map_err(request_failed)?;
        }
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("/api/opus/file-upload"))
            .multipart(form)
            .send()
            .await
            .map_err(request_failed)?;
        decode(response).await
    }

    async fn run_job(&self, request: RunJobRequest) -> Result<RunJobResponse, ApiError> {
        let response = self
            .client
            .post(self.url("/api/opus/run-job"))
            .json(&request)
            .send()
            .await
            .map_err(request_failed)?;
        decode(response).await
    }

    async fn job_result(&self, job_execution_id: &str) -> Result<Value, ApiError> {
        let body = JobResultRequest {
            job_execution_id: job_execution_id.to_string(),
        };
        let response = self
            .client
            .post(self.url("/api/opus/get-job-result"))
            .json(&body)
            .send()
            .await
            .map_err(request_failed)?;
        decode(response).await
    }
}
