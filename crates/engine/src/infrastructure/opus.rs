//! Opus workflow API client
//!
//! Implements the OpusPort trait with reqwest. Every call to Opus itself
//! carries the service key; PUTs to presigned storage URLs do not.

use async_trait::async_trait;
use lendform_shared::{
    ExecuteJobRequest, InitiateJobRequest, InitiateJobResponse, PresignedUpload,
    PresignedUploadRequest,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use crate::infrastructure::ports::{OpusError, OpusPort, UploadedFile};

const SERVICE_KEY_HEADER: &str = "x-service-key";
const OCTET_STREAM: &str = "application/octet-stream";

/// Client for the Opus API
#[derive(Clone)]
pub struct OpusClient {
    client: Client,
    base_url: String,
    service_key: String,
}

impl OpusClient {
    pub fn new(base_url: &str, service_key: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key: service_key.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(CONTENT_TYPE, "application/json")
            .header(SERVICE_KEY_HEADER, &self.service_key)
    }

    /// Send, fail on a non-success status, decode the JSON body.
    async fn send_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T, OpusError> {
        let response = send(operation, self.authorized(request)).await?;
        response
            .json()
            .await
            .map_err(|e| OpusError::InvalidResponse(e.to_string()))
    }
}

async fn send(operation: &'static str, request: RequestBuilder) -> Result<Response, OpusError> {
    let response = request
        .send()
        .await
        .map_err(|e| OpusError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        tracing::warn!(operation, status = status.as_u16(), "Opus call failed");
        return Err(OpusError::upstream(operation, status.as_u16(), error_text));
    }

    Ok(response)
}

#[async_trait]
impl OpusPort for OpusClient {
    async fn request_upload(
        &self,
        request: PresignedUploadRequest,
    ) -> Result<PresignedUpload, OpusError> {
        self.send_json(
            "request upload",
            self.client.post(self.url("/job/file/upload")).json(&request),
        )
        .await
    }

    async fn put_file(&self, presigned_url: &str, file: UploadedFile) -> Result<(), OpusError> {
        let content_type = file
            .content_type
            .unwrap_or_else(|| OCTET_STREAM.to_string());
        let request = self
            .client
            .put(presigned_url)
            .header(CONTENT_TYPE, content_type)
            .body(file.bytes);
        send("upload file", request).await.map(|_| ())
    }

    async fn initiate_job(
        &self,
        request: InitiateJobRequest,
    ) -> Result<InitiateJobResponse, OpusError> {
        self.send_json(
            "initiate job",
            self.client.post(self.url("/job/initiate")).json(&request),
        )
        .await
    }

    async fn execute_job(&self, request: ExecuteJobRequest) -> Result<Value, OpusError> {
        self.send_json(
            "execute job",
            self.client.post(self.url("/job/execute")).json(&request),
        )
        .await
    }

    async fn job_results(&self, job_execution_id: &str) -> Result<Value, OpusError> {
        self.send_json(
            "fetch job results",
            self.client
                .get(self.url(&format!("/job/{job_execution_id}/results"))),
        )
        .await
    }
}
