//! Read-merge-write access to the persisted `AppData` blob.

use std::sync::Arc;

use lendform_shared::AppData;

use crate::ports::outbound::{storage_keys, PlatformPort};

#[derive(Clone)]
pub struct AppDataService {
    platform: Arc<dyn PlatformPort>,
}

impl AppDataService {
    pub fn new(platform: Arc<dyn PlatformPort>) -> Self {
        Self { platform }
    }

    /// The stored blob; missing or unreadable data counts as empty.
    pub fn load(&self) -> AppData {
        let Some(raw) = self.platform.storage_load(storage_keys::APP_DATA) else {
            return AppData::default();
        };
        AppData::parse(&raw).unwrap_or_else(|| {
            tracing::warn!("Stored app data is not a JSON object, starting empty");
            AppData::default()
        })
    }

    pub fn save(&self, data: &AppData) {
        self.platform
            .storage_save(storage_keys::APP_DATA, &data.to_json());
    }

    /// Shallow-merge `partial` into the stored blob and write it back.
    pub fn update(&self, partial: AppData) -> AppData {
        let mut data = self.load();
        data.merge(partial);
        self.save(&data);
        tracing::debug!("App data updated");
        data
    }

    pub fn clear(&self) {
        self.platform.storage_remove(storage_keys::APP_DATA);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::{create_mock_platform, MockStorageProvider};
    use crate::ports::outbound::StorageProvider;
    use serde_json::json;

    fn service() -> (AppDataService, MockStorageProvider) {
        let (platform, storage, _) = create_mock_platform();
        (AppDataService::new(Arc::new(platform)), storage)
    }

    #[test]
    fn test_load_empty_when_nothing_stored() {
        let (service, _) = service();
        assert_eq!(service.load(), AppData::default());
    }

    #[test]
    fn test_load_treats_garbage_as_empty() {
        let (service, storage) = service();
        storage.save(storage_keys::APP_DATA, "{not json");
        assert_eq!(service.load(), AppData::default());
        storage.save(storage_keys::APP_DATA, "[1, 2]");
        assert_eq!(service.load(), AppData::default());
    }

    #[test]
    fn test_update_merges_sections() {
        let (service, storage) = service();
        service.update(AppData::default().with_personal_details(json!({"name": "Lok"})));
        service.update(AppData::default().with_consent(json!({"privacy-policy": true})));

        let stored = AppData::parse(&storage.load(storage_keys::APP_DATA).unwrap()).unwrap();
        assert_eq!(stored.personal_details, Some(json!({"name": "Lok"})));
        assert_eq!(stored.consent, Some(json!({"privacy-policy": true})));
    }

    #[test]
    fn test_update_replaces_present_section() {
        let (service, _) = service();
        service.update(AppData::default().with_calculator(json!({"financingAmount": 1})));
        let data = service.update(AppData::default().with_calculator(json!({"financingAmount": 2})));
        assert_eq!(data.calculator, Some(json!({"financingAmount": 2})));
    }

    #[test]
    fn test_clear_removes_blob() {
        let (service, storage) = service();
        service.update(AppData::default().with_extra("buyout", json!({"buyout": true})));
        service.clear();
        assert_eq!(storage.load(storage_keys::APP_DATA), None);
    }
}
