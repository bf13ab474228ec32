//! The two-member theme enumeration and its wire form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PreferenceError;

/// The user-visible theme. Serialized as the literal strings `"dark"` and
/// `"light"`, both on disk and in API payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Dark,
    Light,
}

impl ThemePreference {
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Dark => "dark",
            ThemePreference::Light => "light",
        }
    }

    /// The other member of the enumeration.
    pub const fn opposite(self) -> Self {
        match self {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light => ThemePreference::Dark,
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, ThemePreference::Dark)
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = PreferenceError;

    /// Strict parse: anything other than the two literal wire strings is
    /// invalid. Stored values that fail this parse are treated as absent by
    /// the store.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemePreference::Dark),
            "light" => Ok(ThemePreference::Light),
            other => Err(PreferenceError::InvalidPreference(other.to_string())),
        }
    }
}
