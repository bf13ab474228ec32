//! I/O modules for snapshot loading.

pub mod async_loader;
pub mod loading_state;

// Re-export commonly used types
pub use async_loader::{AsyncLoader, LoadResult};
pub use loading_state::LoadingState;
