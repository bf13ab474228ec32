//! State management modules for the LogAi dashboard.
//!
//! This module contains state-only logic (no UI concerns):
//! - Navigation state (active view, sidebar expansion)
//! - Data state (loaded snapshot, provenance, service filter)
//! - Chat state (transcript, draft buffer)
//! - Settings state (values, text buffers for numeric fields)

mod chat_state;
mod data_state;
mod nav_state;
mod settings_state;

pub use chat_state::ChatState;
pub use data_state::DataState;
pub use nav_state::{NavState, View};
pub use settings_state::SettingsState;
