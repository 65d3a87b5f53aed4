//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using
//! standard library and native crates.

use crate::ports::outbound::platform::{
    DocumentProvider, EngineConfigProvider, SleepProvider, StorageProvider,
};
use crate::state::Platform;
use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use std::{future::Future, pin::Pin, sync::Arc};

use super::{normalize_base_url, DEFAULT_ENGINE_URL};

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file at:
/// - Linux: ~/.config/lendform/player/storage.json
/// - macOS: ~/Library/Application Support/io.lendform.player/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\lendform\player\storage.json
#[derive(Clone)]
pub struct DesktopStorageProvider {
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Storage under the platform config directory
    pub fn new() -> Self {
        let storage_path = match ProjectDirs::from("io", "lendform", "player") {
            Some(dirs) => dirs.config_dir().join("storage.json"),
            None => PathBuf::from("lendform_storage.json"),
        };
        Self::with_path(storage_path)
    }

    /// Storage backed by an explicit file; existing data is loaded eagerly.
    pub fn with_path(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to parse storage file");
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read storage file");
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!(path = ?storage_path, "Desktop storage initialized");

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    fn persist(&self) {
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!(error = %e, "Failed to create storage directory");
                return;
            }
        }

        let cache = match self.cache.read() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::error!(error = %e, "Failed to acquire read lock for storage");
                return;
            }
        };

        match serde_json::to_string_pretty(&*cache) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!(error = %e, "Failed to write storage file");
                }
            }
            Err(e) => tracing::error!(error = %e, "Failed to serialize storage data"),
        }
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key.to_string(), value.to_string());
                drop(guard); // Release lock before I/O
                self.persist();
            }
            Err(e) => tracing::error!(error = %e, "Failed to acquire write lock for storage"),
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to acquire read lock for storage");
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match self.cache.write() {
            Ok(mut guard) => {
                guard.remove(key);
                drop(guard);
                self.persist();
            }
            Err(e) => tracing::error!(error = %e, "Failed to acquire write lock for storage"),
        }
    }
}

/// Desktop document provider (no-op for page title)
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, _title: &str) {
        // Window title is managed by Dioxus desktop
    }
}

/// Desktop sleep provider using tokio timer
#[derive(Clone, Default)]
pub struct DesktopSleepProvider;

impl SleepProvider for DesktopSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        })
    }
}

/// Engine URL from `LENDFORM_ENGINE_URL`, read once at startup
#[derive(Clone)]
pub struct DesktopEngineConfigProvider {
    base_url: String,
}

impl DesktopEngineConfigProvider {
    pub fn from_env() -> Self {
        let base_url = std::env::var("LENDFORM_ENGINE_URL")
            .ok()
            .and_then(|raw| normalize_base_url(&raw))
            .unwrap_or_else(|| DEFAULT_ENGINE_URL.to_string());
        Self { base_url }
    }
}

impl EngineConfigProvider for DesktopEngineConfigProvider {
    fn engine_base_url(&self) -> String {
        self.base_url.clone()
    }
}

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(
        DesktopSleepProvider,
        DesktopStorageProvider::new(),
        DesktopDocumentProvider,
        DesktopEngineConfigProvider::from_env(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let storage = DesktopStorageProvider::with_path(&path);
        assert_eq!(storage.load("k"), None);
        storage.save("k", "v");
        assert_eq!(storage.load("k").as_deref(), Some("v"));

        let reopened = DesktopStorageProvider::with_path(&path);
        assert_eq!(reopened.load("k").as_deref(), Some("v"));

        reopened.remove("k");
        let reopened = DesktopStorageProvider::with_path(&path);
        assert_eq!(reopened.load("k"), None);
    }

    #[test]
    fn test_corrupt_storage_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let storage = DesktopStorageProvider::with_path(&path);
        assert_eq!(storage.load("anything"), None);
        storage.save("k", "v");
        assert_eq!(storage.load("k").as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_sleep_completes() {
        DesktopSleepProvider.sleep_ms(1).await;
    }
}
