//! Opus proxy bodies
//!
//! Two families live here: the bodies the Player exchanges with the Engine's
//! `/api/opus/*` routes, and the upstream bodies the Engine exchanges with the
//! Opus API itself. Every field is camelCase on the wire.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_JOB_TITLE: &str = "Untitled Job";
pub const DEFAULT_JOB_DESCRIPTION: &str = "No description provided";

// =============================================================================
// Player <-> Engine
// =============================================================================

/// Response of `POST /api/opus/file-upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadResponse {
    pub file_url: String,
}

/// Body of `POST /api/opus/run-job`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunJobRequest {
    #[serde(default)]
    pub workflow_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Workflow inputs keyed by input id. Must be a JSON object.
    #[serde(default)]
    pub payload: Value,
}

impl RunJobRequest {
    pub fn new(workflow_id: impl Into<String>, payload: Map<String, Value>) -> Self {
        Self {
            workflow_id: workflow_id.into(),
            title: None,
            description: None,
            payload: Value::Object(payload),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The title sent upstream, falling back when absent or blank.
    pub fn title_or_default(&self) -> &str {
        non_blank(self.title.as_deref()).unwrap_or(DEFAULT_JOB_TITLE)
    }

    pub fn description_or_default(&self) -> &str {
        non_blank(self.description.as_deref()).unwrap_or(DEFAULT_JOB_DESCRIPTION)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Response of `POST /api/opus/run-job` (status 201)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunJobResponse {
    pub job_execution_id: String,
    #[serde(default)]
    pub execute_response: Value,
}

/// Body of `POST /api/opus/get-job-result`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResultRequest {
    #[serde(default)]
    pub job_execution_id: String,
}

/// Error body of every proxy route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// =============================================================================
// Engine <-> Opus
// =============================================================================

/// Body of upstream `POST /job/file/upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUploadRequest {
    /// Extension including the dot, e.g. `.png`
    pub file_extension: String,
    pub access_scope: String,
}

impl PresignedUploadRequest {
    pub const USER_SCOPE: &'static str = "user";

    /// Request for a file name, scoped to the user. Names without an
    /// extension ask for an empty one.
    pub fn for_file_name(file_name: &str) -> Self {
        let file_extension = file_name
            .rsplit_once('.')
            .filter(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
            .map(|(_, ext)| format!(".{}", ext.to_ascii_lowercase()))
            .unwrap_or_default();
        Self {
            file_extension,
            access_scope: Self::USER_SCOPE.to_string(),
        }
    }
}

/// Response of upstream `POST /job/file/upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUpload {
    /// Where the bytes are PUT
    pub presigned_url: String,
    /// Where workflows read the file from
    pub file_url: String,
}

/// Body of upstream `POST /job/initiate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateJobRequest {
    pub workflow_id: String,
    pub title: String,
    pub description: String,
}

impl From<&RunJobRequest> for InitiateJobRequest {
    fn from(request: &RunJobRequest) -> Self {
        Self {
            workflow_id: request.workflow_id.clone(),
            title: request.title_or_default().to_string(),
            description: request.description_or_default().to_string(),
        }
    }
}

/// Response of upstream `POST /job/initiate`
///
/// Opus has returned the id both as a string and as a number, so it is kept
/// raw and normalized by [`InitiateJobResponse::job_execution_id`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateJobResponse {
    #[serde(default)]
    pub job_execution_id: Option<Value>,
}

impl InitiateJobResponse {
    pub fn job_execution_id(&self) -> Option<String> {
        match self.job_execution_id.as_ref()? {
            Value::String(id) if !id.is_empty() => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }
}

/// Body of upstream `POST /job/execute`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteJobRequest {
    pub job_execution_id: String,
    pub job_payload_schema_instance: Value,
}

// =============================================================================
// Job payload inputs
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowInputType {
    Str,
    File,
    #[serde(rename = "array_files")]
    ArrayFiles,
}

/// One workflow input inside a job payload. Opus expects snake_case here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowInput {
    pub display_name: String,
    pub value: Value,
    #[serde(rename = "type")]
    pub input_type: WorkflowInputType,
}

impl WorkflowInput {
    pub fn text(display_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            value: Value::String(value.into()),
            input_type: WorkflowInputType::Str,
        }
    }

    pub fn file(display_name: impl Into<String>, file_url: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            value: Value::String(file_url.into()),
            input_type: WorkflowInputType::File,
        }
    }

    pub fn files(display_name: impl Into<String>, file_urls: &[String]) -> Self {
        Self {
            display_name: display_name.into(),
            value: Value::Array(file_urls.iter().cloned().map(Value::String).collect()),
            input_type: WorkflowInputType::ArrayFiles,
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
