//! Asynchronous snapshot loading.
//!
//! Snapshot files can be large (hours of exported logs), so they load on a
//! background thread while the GUI stays responsive. Demo feeds generate
//! in-memory and load synchronously.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;

use eframe::egui;
use logai::{DashboardSnapshot, DemoFeed, FeedSource, SnapshotReader};

use crate::io::LoadingState;

/// Result of a completed snapshot loading operation.
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        snapshot: DashboardSnapshot,
        /// Source label for the status bar (file path or "demo feed")
        source_name: String,
    },
    /// Loading failed with an error
    Error(String),
    /// No loading operation in progress
    None,
}

/// Coordinates background-thread snapshot loading with the main GUI thread.
pub struct AsyncLoader {
    /// Shared loading state flag
    loading_state: Arc<Mutex<LoadingState>>,

    /// Channel receiver for loading results
    loading_receiver: Option<Receiver<Result<DashboardSnapshot, String>>>,

    /// Source label of the load currently in flight
    pending_source_name: Option<String>,
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
            pending_source_name: None,
        }
    }

    /// Checks if a loading operation is currently in progress.
    pub fn is_loading(&self) -> bool {
        let state = self.loading_state.lock().unwrap();
        state.in_progress
    }

    /// Starts loading a snapshot file asynchronously.
    ///
    /// Call `check_completion()` once per frame to pick up the result; the
    /// context is repainted when the background thread finishes.
    pub fn start_snapshot_load(&mut self, path: PathBuf, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        {
            let mut state = self.loading_state.lock().unwrap();
            state.in_progress = true;
        }

        let path_string = path.to_string_lossy().into_owned();
        self.pending_source_name = Some(path_string.clone());

        let loading_state = Arc::clone(&self.loading_state);
        let ctx_handle = ctx.clone();

        thread::spawn(move || {
            let reader = SnapshotReader::new(path_string);
            let result = reader.fetch().map_err(|e| e.to_string());

            let _ = sender.send(result);

            {
                let mut state = loading_state.lock().unwrap();
                state.in_progress = false;
            }

            ctx_handle.request_repaint();
        });
    }

    /// Generates a demo snapshot in-memory.
    ///
    /// Generation is fast, so this runs synchronously on the UI thread.
    pub fn load_demo_feed(&mut self) -> Result<DashboardSnapshot, String> {
        DemoFeed::new().fetch().map_err(|e| e.to_string())
    }

    /// Checks whether background loading has completed.
    ///
    /// Called once per frame from the update loop.
    pub fn check_completion(&mut self) -> LoadResult {
        if let Some(receiver) = &self.loading_receiver {
            if let Ok(result) = receiver.try_recv() {
                let load_result = match result {
                    Ok(snapshot) => {
                        let source_name = self
                            .pending_source_name
                            .take()
                            .unwrap_or_else(|| "snapshot".to_string());
                        LoadResult::Success {
                            snapshot,
                            source_name,
                        }
                    }
                    Err(error_msg) => {
                        self.pending_source_name = None;
                        LoadResult::Error(error_msg)
                    }
                };

                self.loading_receiver = None;
                return load_result;
            }
        }

        LoadResult::None
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_starts_idle() {
        let loader = AsyncLoader::new();
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_demo_feed_loads_synchronously() {
        let mut loader = AsyncLoader::new();
        let result = loader.load_demo_feed();
        assert!(result.is_ok(), "Demo feed generation should succeed");
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut loader = AsyncLoader::new();
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }
}
