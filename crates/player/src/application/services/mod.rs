//! Application services
//!
//! Each service depends only on port traits so it can be exercised with the
//! mock platform and `mockall` doubles.

pub mod app_data_service;
pub mod opus_service;

pub use app_data_service::AppDataService;
pub use opus_service::{
    job_link, ExtractionJob, HkidSubmission, OpusService, OpusServiceError, HKID_WORKFLOW_ID,
    OUTPUT_POLL_ATTEMPTS, POLL_ATTEMPTS, POLL_INTERVAL_MS,
};
