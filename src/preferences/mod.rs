//! Theme preference subsystem.
//!
//! One authoritative [`PreferenceStore`] per running session owns the active
//! theme, its persistence, and the system-preference fallback. Every display
//! surface reads through the store; the only way to change the theme is
//! [`PreferenceStore::set_preference`] or [`PreferenceStore::toggle_preference`].
//!
//! Initialization is two-phase. The store is constructed with a deterministic
//! default (dark) and stays in the hydrating phase until [`PreferenceStore::hydrate`]
//! reconciles it with persisted storage, falling back to the operating
//! system's color-scheme signal when no valid persisted choice exists.
//! Mutations before hydration completes are dropped, so a not-yet-read
//! persisted choice can never be silently overwritten.

mod detector;
mod error;
mod storage;
mod store;
mod theme;

pub use detector::{system_prefers_dark, SchemeDetector};
pub use error::PreferenceError;
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage};
pub use store::{HydrationPhase, Preference, PreferenceStore, STORAGE_KEY};
pub use theme::ThemePreference;
