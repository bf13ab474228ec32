//! Error taxonomy for the preference subsystem.

use thiserror::Error;

/// Failures the preference subsystem can report.
///
/// Storage failures never escape the store's public operations; they are
/// recovered by falling back to in-memory-only operation for the session.
/// `InvalidPreference` surfaces only from parsing raw strings.
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// A raw value outside the `dark`/`light` enumeration.
    #[error("invalid theme preference {0:?}, expected \"dark\" or \"light\"")]
    InvalidPreference(String),

    /// Durable storage could not be read or written (missing config
    /// directory, permissions, quota).
    #[error("preference storage unavailable: {0}")]
    StorageUnavailable(String),
}
