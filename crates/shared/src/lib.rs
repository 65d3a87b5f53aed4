//! Lendform Shared - wire types for Engine and Player communication
//!
//! This crate contains the types both sides of the Opus proxy agree on, plus
//! the shape of the blob the Player persists locally.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and serde_json
//! 2. **No business logic** - Pure data types and serialization
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets

pub mod app_data;
pub mod opus;

pub use app_data::AppData;
pub use opus::{
    ErrorBody, ExecuteJobRequest, FileUploadResponse, InitiateJobRequest, InitiateJobResponse,
    JobResultRequest, PresignedUpload, PresignedUploadRequest, RunJobRequest, RunJobResponse,
    WorkflowInput, WorkflowInputType, DEFAULT_JOB_DESCRIPTION, DEFAULT_JOB_TITLE,
};
