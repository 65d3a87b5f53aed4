//! HTTP error mapping.
//!
//! Every failure leaves the Engine as `{ "error": message }`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lendform_shared::ErrorBody;

use crate::infrastructure::ports::OpusError;
use crate::use_cases::OpusUseCaseError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    /// Opus answered with a failure status
    #[error("{0}")]
    BadGateway(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Opus proxy request failed");
        }
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

impl From<OpusUseCaseError> for ApiError {
    fn from(e: OpusUseCaseError) -> Self {
        match e {
            OpusUseCaseError::InvalidInput(message) => ApiError::BadRequest(message),
            OpusUseCaseError::Opus(opus @ OpusError::Upstream { .. }) => {
                ApiError::BadGateway(opus.to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_case_errors_map_to_status() {
        let cases = [
            (OpusUseCaseError::invalid("workflowId is required"), StatusCode::BAD_REQUEST),
            (
                OpusUseCaseError::Opus(OpusError::upstream("execute job", 422, "bad payload")),
                StatusCode::BAD_GATEWAY,
            ),
            (
                OpusUseCaseError::Opus(OpusError::Request("connection refused".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (OpusUseCaseError::MissingJobId, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, expected) in cases {
            assert_eq!(ApiError::from(error).status(), expected);
        }
    }

    #[test]
    fn test_upstream_message_names_operation() {
        let error = ApiError::from(OpusUseCaseError::Opus(OpusError::upstream(
            "initiate job",
            401,
            "{\"message\":\"bad key\"}",
        )));
        assert_eq!(error.to_string(), "Failed to initiate job: {\"message\":\"bad key\"}");
    }
}
