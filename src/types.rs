//! Core type definitions shared by the parser and the tab source client.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of tab document requested from the search collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabKind {
    /// Chord sheets: chord symbols above lyrics.
    #[default]
    Chords,
    /// Guitar tablature.
    Tabs,
}

impl TabKind {
    /// Returns all kinds in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Chords, Self::Tabs]
    }

    /// Returns the name used in search queries.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chords => "chords",
            Self::Tabs => "tabs",
        }
    }
}

impl fmt::Display for TabKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TabKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chords" | "chord" => Ok(Self::Chords),
            "tabs" | "tab" => Ok(Self::Tabs),
            other => Err(format!("unknown tab kind '{other}' (expected chords or tabs)")),
        }
    }
}

/// Location of a tab document, as returned by search and consumed by fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locator(pub String);

impl Locator {
    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Locator {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Locator {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Locator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
