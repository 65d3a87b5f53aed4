//! Platform-specific implementations
//!
//! Implements the platform traits from `ports/outbound/platform.rs`. The
//! correct platform is selected at compile time based on the target
//! architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

pub mod mock;

#[cfg(target_arch = "wasm32")]
pub use wasm::{
    create_platform, WasmDocumentProvider, WasmEngineConfigProvider, WasmSleepProvider,
    WasmStorageProvider,
};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{
    create_platform, DesktopDocumentProvider, DesktopEngineConfigProvider, DesktopSleepProvider,
    DesktopStorageProvider,
};

/// Engine URL used when nothing else is configured
pub const DEFAULT_ENGINE_URL: &str = "http://localhost:3000";

/// Trim trailing slashes; blank input yields `None`.
pub(crate) fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
