//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::OpusPort;
use crate::use_cases;

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub opus: use_cases::OpusUseCases,
}

impl App {
    pub fn new(opus: Arc<dyn OpusPort>) -> Self {
        let opus_use_cases = use_cases::OpusUseCases::new(
            Arc::new(use_cases::opus::UploadFile::new(opus.clone())),
            Arc::new(use_cases::opus::RunJob::new(opus.clone())),
            Arc::new(use_cases::opus::GetJobResult::new(opus)),
        );

        Self {
            use_cases: UseCases {
                opus: opus_use_cases,
            },
        }
    }
}
