//! In-memory platform for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::{future::Future, pin::Pin};

use crate::ports::outbound::platform::{
    DocumentProvider, EngineConfigProvider, SleepProvider, StorageProvider,
};
use crate::state::Platform;

/// Storage backed by a shared map
#[derive(Clone, Default)]
pub struct MockStorageProvider {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl StorageProvider for MockStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// Records requested sleeps and returns immediately
#[derive(Clone, Default)]
pub struct MockSleepProvider {
    calls: Arc<Mutex<Vec<u64>>>,
}

impl MockSleepProvider {
    pub fn calls(&self) -> Vec<u64> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl SleepProvider for MockSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(ms);
        }
        Box::pin(std::future::ready(()))
    }
}

#[derive(Clone, Default)]
pub struct MockDocumentProvider;

impl DocumentProvider for MockDocumentProvider {
    fn set_page_title(&self, _title: &str) {}
}

#[derive(Clone)]
pub struct MockEngineConfigProvider(pub String);

impl EngineConfigProvider for MockEngineConfigProvider {
    fn engine_base_url(&self) -> String {
        self.0.clone()
    }
}

/// A platform whose storage and sleep can be inspected afterwards.
pub fn create_mock_platform() -> (Platform, MockStorageProvider, MockSleepProvider) {
    let storage = MockStorageProvider::default();
    let sleep = MockSleepProvider::default();
    let platform = Platform::new(
        sleep.clone(),
        storage.clone(),
        MockDocumentProvider,
        MockEngineConfigProvider(super::DEFAULT_ENGINE_URL.to_string()),
    );
    (platform, storage, sleep)
}
