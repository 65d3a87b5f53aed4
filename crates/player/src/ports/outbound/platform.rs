//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Presentation code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations
//!
//! The `Platform` struct that aggregates these traits lives in
//! `state/platform.rs`.

use std::{future::Future, pin::Pin};

/// Async sleep abstraction
///
/// Used to avoid `#[cfg]` branches in UI code (submit latency, result polling).
pub trait SleepProvider: Clone + 'static {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;
}

/// Persistent storage abstraction (localStorage/file-based)
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Browser document operations (page title, etc.)
pub trait DocumentProvider: Clone + 'static {
    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}

/// Where the Engine proxy lives
pub trait EngineConfigProvider: Clone + 'static {
    /// Base HTTP URL of the Engine, without a trailing slash
    fn engine_base_url(&self) -> String;
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    /// The single persisted application blob
    pub const APP_DATA: &str = "lendform.app-data";
}
