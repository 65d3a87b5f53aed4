//! WASM platform implementations
//!
//! Browser-backed providers: `localStorage`, `document.title`, and
//! gloo-timers for sleeping.

use crate::ports::outbound::platform::{
    DocumentProvider, EngineConfigProvider, SleepProvider, StorageProvider,
};
use crate::state::Platform;
use std::{future::Future, pin::Pin};

use super::{normalize_base_url, DEFAULT_ENGINE_URL};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// `window.localStorage`; looked up per call so no JS handle is held.
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::error!(key, "Failed to write localStorage");
                }
            }
            None => tracing::warn!("localStorage unavailable"),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }
}

#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        Box::pin(gloo_timers::future::TimeoutFuture::new(ms))
    }
}

/// The Engine serves the Player, so the page origin is the proxy base.
#[derive(Clone, Default)]
pub struct WasmEngineConfigProvider;

impl EngineConfigProvider for WasmEngineConfigProvider {
    fn engine_base_url(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .and_then(|origin| normalize_base_url(&origin))
            .unwrap_or_else(|| DEFAULT_ENGINE_URL.to_string())
    }
}

/// Create platform services for the browser
pub fn create_platform() -> Platform {
    Platform::new(
        WasmSleepProvider,
        WasmStorageProvider,
        WasmDocumentProvider,
        WasmEngineConfigProvider,
    )
}
