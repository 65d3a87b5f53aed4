//! PlatformPort - Unified platform services interface
//!
//! Implemented by the `Platform` container in `state/platform.rs`.
//!
//! Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`

use std::{future::Future, pin::Pin};

pub trait PlatformPort: Send + Sync {
    /// Sleep for the given number of milliseconds
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;

    /// Save a string value with the given key
    fn storage_save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn storage_load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn storage_remove(&self, key: &str);

    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);

    /// Base HTTP URL of the Engine proxy
    fn engine_base_url(&self) -> String;
}
