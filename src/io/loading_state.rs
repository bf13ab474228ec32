//! Shared loading-in-progress flag.

/// Holds the state of an async snapshot loading operation.
///
/// Only the in_progress flag is shared; results come through a channel.
/// Wrapped in an `Arc<Mutex<>>` for sharing between the main thread and the
/// background loading thread.
pub struct LoadingState {
    /// True if a snapshot load is currently in progress
    pub in_progress: bool,
}

impl LoadingState {
    pub fn new() -> Self {
        Self { in_progress: false }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}
