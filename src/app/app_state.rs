//! Centralized application state for the LogAi dashboard.
//!
//! This module implements the State pattern by composing focused state
//! components that each manage one aspect of the application. The theme
//! preference store is one of these components: it is the well-known access
//! point through which every surface reads the active theme, so no panel
//! ever holds a private copy.

use logai::{DashboardSettings, I18n, Locale, PreferenceStore};

use crate::state::{ChatState, DataState, NavState, SettingsState};

/// Main application state composed of focused state components.
pub struct AppState {
    /// Authoritative theme preference (value, persistence, hydration)
    pub prefs: PreferenceStore,

    /// Navigation and sidebar state
    pub nav: NavState,

    /// Loaded snapshot and provenance
    pub data: DataState,

    /// Chat transcript and draft
    pub chat: ChatState,

    /// Settings values and form buffers
    pub settings: SettingsState,

    /// UI string lookup
    pub i18n: I18n,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl AppState {
    /// Creates the application state around an already-constructed
    /// preference store.
    ///
    /// The caller decides the store's storage and detector wiring (real
    /// config-dir storage in the app, mocks in tests) and is responsible
    /// for hydrating it before the first frame.
    pub fn new(prefs: PreferenceStore) -> Self {
        Self {
            prefs,
            nav: NavState::new(),
            data: DataState::new(),
            chat: ChatState::new(),
            settings: SettingsState::default(),
            i18n: I18n::default(),
            error_message: None,
        }
    }

    /// Creates application state with settings restored from persistent
    /// storage.
    pub fn with_settings(
        prefs: PreferenceStore,
        settings: DashboardSettings,
        locale: Locale,
        sidebar_expanded: bool,
    ) -> Self {
        Self {
            prefs,
            nav: NavState::with_sidebar_expanded(sidebar_expanded),
            data: DataState::new(),
            chat: ChatState::new(),
            settings: SettingsState::with_values(settings),
            i18n: I18n::new(locale),
            error_message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logai::preferences::MemoryStorage;
    use logai::ThemePreference;

    fn test_state() -> AppState {
        let mut prefs = PreferenceStore::new(Box::new(MemoryStorage::new()), || false);
        prefs.hydrate();
        AppState::new(prefs)
    }

    #[test]
    fn test_state_composes_hydrated_store() {
        let state = test_state();
        assert!(state.prefs.is_hydrated());
        assert!(state.data.snapshot().is_none());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_theme_mutations_go_through_the_store() {
        let mut state = test_state();
        let before = state.prefs.value();
        state.prefs.toggle_preference();
        assert_eq!(state.prefs.value(), before.opposite());
    }

    #[test]
    fn test_with_settings_restores_persisted_values() {
        let mut prefs = PreferenceStore::new(Box::new(MemoryStorage::new()), || true);
        prefs.hydrate();
        assert_eq!(prefs.value(), ThemePreference::Dark);

        let mut settings = DashboardSettings::default();
        settings.refresh_interval = 90;

        let state = AppState::with_settings(prefs, settings, Locale::Ko, false);
        assert_eq!(state.settings.values().refresh_interval, 90);
        assert_eq!(state.i18n.locale(), Locale::Ko);
        assert!(!state.nav.sidebar_expanded());
    }
}
