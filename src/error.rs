//! Crate error types.
//!
//! The chord-sheet parser itself never fails; these errors come from the
//! collaborators around it (file IO, tab search, document fetch, config).

use thiserror::Error;

/// Crate result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Error types with enough context to act on
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Network error (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Tab search or fetch endpoint returned an error status
    #[error("Tab source error: {message}")]
    TabSource {
        /// Human-readable error description.
        message: String,
        /// HTTP status code, if from an HTTP response.
        status: Option<u16>,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Malformed collaborator payload (search response)
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },

    /// Search returned no candidates
    #[error("No tab found for \"{artist}\" - \"{title}\"")]
    NoResults {
        /// Artist that was searched for.
        artist: String,
        /// Title that was searched for.
        title: String,
    },
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a tab source error with HTTP status and a matching hint
    pub fn tab_status(message: impl Into<String>, status: u16) -> Self {
        let hint = match status {
            401 | 403 => Some("The tab site refused the request - check CHORDSHEET_USER_AGENT"),
            404 => Some("The tab page no longer exists - try another candidate"),
            429 => Some("Rate limited - wait a moment and try again"),
            500..=599 => Some("Tab site server error - try again later"),
            _ => None,
        };
        Self::TabSource {
            message: message.into(),
            status: Some(status),
            hint,
        }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error for a malformed collaborator payload
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse { message: message.into() }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}
