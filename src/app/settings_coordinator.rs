//! Dashboard settings persistence.
//!
//! Settings ride in eframe's window-local storage as JSON, keyed per
//! concern. The theme preference is deliberately absent here; it has its own
//! store with stricter lifecycle guarantees.

use logai::{DashboardSettings, Locale};
use serde::de::DeserializeOwned;
use serde::Serialize;

const SETTINGS_KEY: &str = "dashboard_settings";
const LOCALE_KEY: &str = "locale";
const SIDEBAR_KEY: &str = "sidebar_expanded";

/// Coordinates settings persistence through `eframe::Storage`.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads dashboard settings, falling back to defaults when absent or
    /// unparseable.
    pub fn load_settings(storage: Option<&dyn eframe::Storage>) -> DashboardSettings {
        Self::load_or_default(storage, SETTINGS_KEY)
    }

    pub fn save_settings(storage: &mut dyn eframe::Storage, settings: &DashboardSettings) {
        Self::save(storage, SETTINGS_KEY, settings);
    }

    pub fn load_locale(storage: Option<&dyn eframe::Storage>) -> Locale {
        Self::load_or(storage, LOCALE_KEY, Locale::En)
    }

    pub fn save_locale(storage: &mut dyn eframe::Storage, locale: Locale) {
        Self::save(storage, LOCALE_KEY, &locale);
    }

    pub fn load_sidebar_expanded(storage: Option<&dyn eframe::Storage>) -> bool {
        Self::load_or(storage, SIDEBAR_KEY, true)
    }

    pub fn save_sidebar_expanded(storage: &mut dyn eframe::Storage, expanded: bool) {
        Self::save(storage, SIDEBAR_KEY, &expanded);
    }

    fn load_or_default<T: DeserializeOwned + Default>(
        storage: Option<&dyn eframe::Storage>,
        key: &str,
    ) -> T {
        Self::try_load(storage, key).unwrap_or_default()
    }

    fn load_or<T: DeserializeOwned>(
        storage: Option<&dyn eframe::Storage>,
        key: &str,
        default: T,
    ) -> T {
        Self::try_load(storage, key).unwrap_or(default)
    }

    fn try_load<T: DeserializeOwned>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T> {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        serde_json::from_str(&json_str).ok()
    }

    fn save<T: Serialize>(storage: &mut dyn eframe::Storage, key: &str, value: &T) {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_settings_round_trip() {
        let mut storage = MockStorage::new();

        let mut settings = DashboardSettings::default();
        settings.auto_refresh = false;
        settings.refresh_interval = 120;
        SettingsCoordinator::save_settings(&mut storage, &settings);

        let loaded = SettingsCoordinator::load_settings(Some(&storage));
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_settings_fall_back_to_defaults() {
        let storage = MockStorage::new();
        let loaded = SettingsCoordinator::load_settings(Some(&storage));
        assert_eq!(loaded, DashboardSettings::default());

        // No storage at all behaves the same
        let loaded = SettingsCoordinator::load_settings(None);
        assert_eq!(loaded, DashboardSettings::default());
    }

    #[test]
    fn test_corrupt_settings_fall_back_to_defaults() {
        let mut storage = MockStorage::new();
        storage.set_string("dashboard_settings", "{not json".to_string());

        let loaded = SettingsCoordinator::load_settings(Some(&storage));
        assert_eq!(loaded, DashboardSettings::default());
    }

    #[test]
    fn test_locale_and_sidebar_round_trip() {
        let mut storage = MockStorage::new();

        SettingsCoordinator::save_locale(&mut storage, Locale::Ko);
        SettingsCoordinator::save_sidebar_expanded(&mut storage, false);

        assert_eq!(SettingsCoordinator::load_locale(Some(&storage)), Locale::Ko);
        assert!(!SettingsCoordinator::load_sidebar_expanded(Some(&storage)));
    }
}
