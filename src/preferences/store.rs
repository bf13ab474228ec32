//! The authoritative theme preference store.

use tracing::warn;

use super::detector::{system_prefers_dark, SchemeDetector};
use super::storage::{FileStorage, MemoryStorage, PreferenceStorage};
use super::theme::ThemePreference;

/// Fixed durable-storage key for the theme value.
pub const STORAGE_KEY: &str = "logai-theme";

/// Snapshot of the preference as seen by consumers.
///
/// Before `is_hydrated` is true, `value` is the deterministic default and
/// must not be assumed to reflect the user's real choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preference {
    pub value: ThemePreference,
    pub is_hydrated: bool,
}

/// Initialization phase of the store.
///
/// "Not constructed yet" needs no variant: consumers can only reach the
/// store through the application state that owns it, so a store that exists
/// is already hydrating. `Hydrated` is terminal for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationPhase {
    Hydrating,
    Hydrated,
}

/// Single source of truth for the active theme.
///
/// Owns the persistence mechanism and the system-preference fallback.
/// Consumers obtain the current value via [`PreferenceStore::preference`]
/// and mutate it only through [`PreferenceStore::set_preference`] and
/// [`PreferenceStore::toggle_preference`].
///
/// # Pre-hydration mutation policy
///
/// Mutations issued before [`PreferenceStore::hydrate`] completes are
/// **dropped** with a warning diagnostic. Queue-and-replay was considered
/// and rejected: replaying a stale toggle after hydration could flip the
/// user away from the choice that hydration just restored.
pub struct PreferenceStore {
    value: ThemePreference,
    phase: HydrationPhase,
    storage: Box<dyn PreferenceStorage>,
    detector: SchemeDetector,
    /// Set after the first storage failure; the store then runs
    /// in-memory-only for the remainder of the session.
    storage_degraded: bool,
}

impl PreferenceStore {
    /// Creates a store in the hydrating phase with the deterministic
    /// default value (dark).
    pub fn new(storage: Box<dyn PreferenceStorage>, detector: SchemeDetector) -> Self {
        Self {
            value: ThemePreference::Dark,
            phase: HydrationPhase::Hydrating,
            storage,
            detector,
            storage_degraded: false,
        }
    }

    /// Production store: config-directory file storage and the OS
    /// color-scheme probe. Falls back to in-memory storage when the
    /// platform exposes no config directory.
    pub fn from_system() -> Self {
        match FileStorage::new() {
            Ok(storage) => Self::new(Box::new(storage), system_prefers_dark),
            Err(err) => {
                warn!("theme preference persistence disabled: {err}");
                let mut store = Self::new(Box::new(MemoryStorage::new()), system_prefers_dark);
                store.storage_degraded = true;
                store
            }
        }
    }

    /// Current value and hydration flag. No side effects.
    pub fn preference(&self) -> Preference {
        Preference {
            value: self.value,
            is_hydrated: self.is_hydrated(),
        }
    }

    pub fn value(&self) -> ThemePreference {
        self.value
    }

    pub fn is_hydrated(&self) -> bool {
        self.phase == HydrationPhase::Hydrated
    }

    /// Reconciles the store with persisted state, falling back to the
    /// ambient color-scheme signal when no valid persisted value exists.
    ///
    /// Runs its resolution exactly once per session; repeated calls return
    /// without re-reading storage or the environment, so duplicate
    /// invocation from the hosting framework's lifecycle is harmless.
    pub fn hydrate(&mut self) {
        if self.is_hydrated() {
            return;
        }

        let resolved = match self.storage.read_value(STORAGE_KEY) {
            Ok(Some(raw)) => match raw.parse::<ThemePreference>() {
                Ok(value) => value,
                // Anything but the two valid literals is treated as absent.
                Err(_) => self.environment_fallback(),
            },
            Ok(None) => self.environment_fallback(),
            Err(err) => {
                warn!("theme preference read failed, using environment fallback: {err}");
                self.storage_degraded = true;
                self.environment_fallback()
            }
        };

        self.value = resolved;
        self.phase = HydrationPhase::Hydrated;
    }

    /// Sets the active theme and persists it.
    ///
    /// Dropped with a warning when called before hydration completes, so an
    /// un-reconciled default can never overwrite the persisted choice.
    pub fn set_preference(&mut self, value: ThemePreference) {
        if !self.is_hydrated() {
            warn!("theme change to {value} before hydration, dropping");
            return;
        }
        self.value = value;
        self.persist();
    }

    /// Flips between dark and light. Same pre-hydration policy as
    /// [`PreferenceStore::set_preference`].
    pub fn toggle_preference(&mut self) {
        let next = self.value.opposite();
        self.set_preference(next);
    }

    fn environment_fallback(&self) -> ThemePreference {
        if (self.detector)() {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    fn persist(&mut self) {
        if self.storage_degraded {
            return;
        }
        if let Err(err) = self.storage.write_value(STORAGE_KEY, self.value.as_str()) {
            warn!("theme preference write failed, keeping in-memory value: {err}");
            self.storage_degraded = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::error::PreferenceError;

    fn prefers_dark() -> bool {
        true
    }

    fn prefers_light() -> bool {
        false
    }

    fn hydrated_store(storage: Box<dyn PreferenceStorage>) -> PreferenceStore {
        let mut store = PreferenceStore::new(storage, prefers_light);
        store.hydrate();
        store
    }

    /// Storage that fails every operation, simulating a disabled or
    /// quota-exceeded backend.
    struct FailingStorage;

    impl PreferenceStorage for FailingStorage {
        fn read_value(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
            Err(PreferenceError::StorageUnavailable("disk on fire".to_string()))
        }

        fn write_value(&mut self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::StorageUnavailable("disk on fire".to_string()))
        }
    }

    /// Storage that accepts reads but rejects writes.
    struct ReadOnlyStorage(MemoryStorage);

    impl PreferenceStorage for ReadOnlyStorage {
        fn read_value(&self, key: &str) -> Result<Option<String>, PreferenceError> {
            self.0.read_value(key)
        }

        fn write_value(&mut self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::StorageUnavailable("read-only".to_string()))
        }
    }

    #[test]
    fn test_default_value_before_hydration() {
        let store = PreferenceStore::new(Box::new(MemoryStorage::new()), prefers_light);
        let pref = store.preference();
        assert_eq!(pref.value, ThemePreference::Dark);
        assert!(!pref.is_hydrated);
    }

    #[test]
    fn test_set_then_get_post_hydration() {
        for value in [ThemePreference::Dark, ThemePreference::Light] {
            let mut store = hydrated_store(Box::new(MemoryStorage::new()));
            store.set_preference(value);
            assert_eq!(
                store.preference(),
                Preference {
                    value,
                    is_hydrated: true
                }
            );
        }
    }

    #[test]
    fn test_hydrate_is_idempotent() {
        let mut store = PreferenceStore::new(
            Box::new(MemoryStorage::with_entry(STORAGE_KEY, "light")),
            prefers_dark,
        );
        store.hydrate();
        let first = store.preference();
        store.hydrate();
        assert_eq!(store.preference(), first);
    }

    #[test]
    fn test_hydration_never_reverts() {
        let mut store = hydrated_store(Box::new(MemoryStorage::new()));
        store.set_preference(ThemePreference::Light);
        store.toggle_preference();
        store.hydrate();
        assert!(store.is_hydrated());
    }

    #[test]
    fn test_fallback_uses_environment_signal() {
        let mut store = PreferenceStore::new(Box::new(MemoryStorage::new()), prefers_dark);
        store.hydrate();
        assert_eq!(store.value(), ThemePreference::Dark);

        let mut store = PreferenceStore::new(Box::new(MemoryStorage::new()), prefers_light);
        store.hydrate();
        assert_eq!(store.value(), ThemePreference::Light);
    }

    #[test]
    fn test_stored_value_wins_over_environment_signal() {
        // Stored "light" with a dark-preferring environment.
        let mut store = PreferenceStore::new(
            Box::new(MemoryStorage::with_entry(STORAGE_KEY, "light")),
            prefers_dark,
        );
        store.hydrate();
        assert_eq!(
            store.preference(),
            Preference {
                value: ThemePreference::Light,
                is_hydrated: true
            }
        );
    }

    #[test]
    fn test_invalid_stored_value_treated_as_absent() {
        let mut store = PreferenceStore::new(
            Box::new(MemoryStorage::with_entry(STORAGE_KEY, "blue")),
            prefers_dark,
        );
        store.hydrate();
        assert_eq!(store.value(), ThemePreference::Dark);
    }

    #[test]
    fn test_pre_hydration_mutations_are_dropped() {
        // The persisted choice is light; a set issued before hydrate must
        // neither take effect nor overwrite it.
        let mut store = PreferenceStore::new(
            Box::new(MemoryStorage::with_entry(STORAGE_KEY, "light")),
            prefers_dark,
        );

        store.set_preference(ThemePreference::Dark);
        assert!(!store.is_hydrated());

        store.hydrate();
        assert_eq!(store.value(), ThemePreference::Light);
    }

    #[test]
    fn test_pre_hydration_toggle_is_dropped() {
        let mut store = PreferenceStore::new(Box::new(MemoryStorage::new()), prefers_light);
        store.toggle_preference();
        store.hydrate();
        // Toggle was dropped, hydration resolved from the light signal.
        assert_eq!(store.value(), ThemePreference::Light);
    }

    #[test]
    fn test_toggle_flips_and_returns() {
        let mut store = hydrated_store(Box::new(MemoryStorage::new()));
        let original = store.value();
        store.toggle_preference();
        assert_eq!(store.value(), original.opposite());
        store.toggle_preference();
        assert_eq!(store.value(), original);
    }

    #[test]
    fn test_reload_round_trip() {
        let mut first = PreferenceStore::new(Box::new(MemoryStorage::new()), prefers_dark);
        first.hydrate();
        first.set_preference(ThemePreference::Light);

        // Simulate a reload: a fresh store over storage carrying what the
        // first session persisted.
        let mut second = PreferenceStore::new(
            Box::new(MemoryStorage::with_entry(STORAGE_KEY, "light")),
            prefers_dark,
        );
        second.hydrate();
        assert_eq!(second.value(), ThemePreference::Light);
    }

    #[test]
    fn test_write_failure_keeps_in_memory_value() {
        let mut store = PreferenceStore::new(
            Box::new(ReadOnlyStorage(MemoryStorage::new())),
            prefers_dark,
        );
        store.hydrate();

        // The write fails, the caller sees nothing, the value sticks.
        store.set_preference(ThemePreference::Light);
        assert_eq!(
            store.preference(),
            Preference {
                value: ThemePreference::Light,
                is_hydrated: true
            }
        );

        // Later mutations keep working in memory.
        store.toggle_preference();
        assert_eq!(store.value(), ThemePreference::Dark);
    }

    #[test]
    fn test_read_failure_falls_back_to_environment() {
        let mut store = PreferenceStore::new(Box::new(FailingStorage), prefers_dark);
        store.hydrate();
        assert_eq!(
            store.preference(),
            Preference {
                value: ThemePreference::Dark,
                is_hydrated: true
            }
        );

        // Session continues in memory without surfacing errors.
        store.set_preference(ThemePreference::Light);
        assert_eq!(store.value(), ThemePreference::Light);
    }
}
