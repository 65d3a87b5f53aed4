//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use lendform_shared::{FileUploadResponse, JobResultRequest, RunJobRequest, RunJobResponse};
use serde_json::Value;
use std::sync::Arc;

use super::ApiError;
use crate::app::App;
use crate::infrastructure::ports::UploadedFile;

const FILE_FIELD: &str = "file";

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/opus/file-upload", post(file_upload))
        .route("/api/opus/run-job", post(run_job))
        .route("/api/opus/get-job-result", post(get_job_result))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Opus proxy
// =============================================================================

async fn file_upload(
    State(app): State<Arc<App>>,
    mut multipart: Multipart,
) -> Result<Json<FileUploadResponse>, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        upload = Some(UploadedFile {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
        break;
    }

    let file = upload.ok_or_else(|| ApiError::BadRequest("file is required".to_string()))?;
    let response = app.use_cases.opus.upload_file.execute(file).await?;
    Ok(Json(response))
}

async fn run_job(
    State(app): State<Arc<App>>,
    body: Result<Json<RunJobRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RunJobResponse>), ApiError> {
    let Json(request) = body?;
    let response = app.use_cases.opus.run_job.execute(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_job_result(
    State(app): State<Arc<App>>,
    body: Result<Json<JobResultRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = body?;
    let result = app.use_cases.opus.job_result.execute(request).await?;
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockOpusPort, OpusError};
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Request},
    };
    use lendform_shared::{InitiateJobResponse, PresignedUpload};
    use serde_json::json;
    use tower::ServiceExt;

    fn router(opus: MockOpusPort) -> Router {
        routes().with_state(Arc::new(App::new(Arc::new(opus))))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = router(MockOpusPort::new())
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_run_job_created() {
        let mut opus = MockOpusPort::new();
        opus.expect_initiate_job().returning(|_| {
            Ok(InitiateJobResponse {
                job_execution_id: Some(json!("job-9")),
            })
        });
        opus.expect_execute_job()
            .returning(|_| Ok(json!({ "accepted": true })));

        let response = router(opus)
            .oneshot(post_json(
                "/api/opus/run-job",
                json!({ "workflowId": "wf", "title": "HKID Verification", "payload": {} }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            json_body(response).await,
            json!({ "jobExecutionId": "job-9", "executeResponse": { "accepted": true } })
        );
    }

    #[tokio::test]
    async fn test_run_job_missing_workflow_is_bad_request() {
        let response = router(MockOpusPort::new())
            .oneshot(post_json("/api/opus/run-job", json!({ "payload": {} })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "workflowId is required" })
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request_with_error_body() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/opus/run-job")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = router(MockOpusPort::new()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let mut opus = MockOpusPort::new();
        opus.expect_job_results()
            .returning(|_| Err(OpusError::upstream("fetch job results", 404, "not found")));

        let response = router(opus)
            .oneshot(post_json(
                "/api/opus/get-job-result",
                json!({ "jobExecutionId": "x" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Failed to fetch job results: not found" })
        );
    }

    #[tokio::test]
    async fn test_transport_failure_is_internal_error() {
        let mut opus = MockOpusPort::new();
        opus.expect_job_results()
            .returning(|_| Err(OpusError::Request("connection refused".into())));

        let response = router(opus)
            .oneshot(post_json(
                "/api/opus/get-job-result",
                json!({ "jobExecutionId": "x" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    fn multipart_request(field: &str, file_name: &str, bytes: &str) -> Request<Body> {
        let boundary = "lendform-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
             Content-Type: image/png\r\n\r\n\
             {bytes}\r\n\
             --{boundary}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/api/opus/file-upload")
            .header(CONTENT_TYPE, format!("multipart/form-data; boundary={boundary}"))
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_file_upload_returns_file_url() {
        let mut opus = MockOpusPort::new();
        opus.expect_request_upload()
            .withf(|r| r.file_extension == ".png")
            .returning(|_| {
                Ok(PresignedUpload {
                    presigned_url: "https://bucket/put".into(),
                    file_url: "https://files/id.png".into(),
                })
            });
        opus.expect_put_file()
            .withf(|_, file| {
                file.file_name == "id.png"
                    && file.content_type.as_deref() == Some("image/png")
                    && file.bytes == b"fake-png"
            })
            .returning(|_, _| Ok(()));

        let response = router(opus)
            .oneshot(multipart_request("file", "id.png", "fake-png"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({ "fileUrl": "https://files/id.png" })
        );
    }

    #[tokio::test]
    async fn test_file_upload_without_file_field() {
        let response = router(MockOpusPort::new())
            .oneshot(multipart_request("attachment", "id.png", "fake-png"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await, json!({ "error": "file is required" }));
    }
}
