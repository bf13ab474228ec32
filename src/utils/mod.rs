//! Utility functions for the LogAi dashboard.

pub mod formatting;

pub use formatting::{format_count, format_memory_mb, format_relative, get_current_memory_mb};
