//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::time::Duration;

use crate::constants::http;
use crate::error::Result;

/// Configuration for the tab search and fetch collaborators.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON search endpoint queried for tab candidates
    pub search_url: Option<String>,
    /// Prefix prepended to a locator before fetching it
    pub fetch_prefix: Option<String>,
    /// HTTP request timeout
    pub timeout: Duration,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: None,
            fetch_prefix: None,
            timeout: Duration::from_secs(http::DEFAULT_TIMEOUT_SECS),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        config.search_url = non_empty_var("CHORDSHEET_SEARCH_URL");
        config.fetch_prefix = non_empty_var("CHORDSHEET_FETCH_PREFIX");

        if let Some(secs) = non_empty_var("CHORDSHEET_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) if secs > 0 => config.timeout = Duration::from_secs(secs),
                _ => tracing::warn!("Ignoring invalid CHORDSHEET_TIMEOUT_SECS={secs}"),
            }
        }

        if let Some(agent) = non_empty_var("CHORDSHEET_USER_AGENT") {
            config.user_agent = agent;
        }

        Ok(config)
    }

    /// Check if a search endpoint is configured
    pub const fn has_search_endpoint(&self) -> bool {
        self.search_url.is_some()
    }

    /// Build the URL a locator is fetched from
    pub fn fetch_url(&self, locator: &str) -> String {
        match &self.fetch_prefix {
            Some(prefix) => format!("{prefix}{locator}"),
            None => locator.to_string(),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
