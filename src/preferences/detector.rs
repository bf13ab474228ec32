//! Ambient color-scheme signal.
//!
//! The host environment exposes a single boolean: does the user prefer a
//! dark color scheme. It is read once, at hydration time; the store does not
//! subscribe to live changes.

/// A "prefers dark" probe. Injected into the store at construction so tests
/// can pin the answer.
pub type SchemeDetector = fn() -> bool;

/// Queries the operating system's color-scheme setting.
pub fn system_prefers_dark() -> bool {
    matches!(dark_light::detect(), dark_light::Mode::Dark)
}
