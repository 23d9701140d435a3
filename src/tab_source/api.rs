use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::services::fetch::DocumentFetch;
use crate::services::search::{rank_candidates, Candidate, TabSearch};
use crate::types::{Locator, TabKind};

/// Client for the tab search endpoint and tab document pages.
#[derive(Clone)]
pub struct TabClient {
    config: Config,
    client: Client,
}

impl TabClient {
    /// Create a new client from config
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            client: Client::builder()
                .timeout(config.timeout)
                .user_agent(config.user_agent.clone())
                .build()
                .unwrap_or_default(),
        }
    }

    /// Make a GET request and fail on non-success status
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<reqwest::Response> {
        let resp = self.client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request to {url} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::tab_status(
                format!("Request to {url} returned {status}"),
                status.as_u16(),
            ));
        }

        Ok(resp)
    }
}

#[async_trait]
impl TabSearch for TabClient {
    async fn search(&self, artist: &str, title: &str, kind: TabKind) -> Result<Vec<Candidate>> {
        let Some(search_url) = self.config.search_url.as_deref() else {
            return Err(Error::config(
                "Tab search endpoint not configured",
                "Set the CHORDSHEET_SEARCH_URL environment variable",
            ));
        };

        let json: Value = self
            .get(search_url, &[("artist", artist), ("title", title), ("type", kind.name())])
            .await?
            .json()
            .await
            .map_err(|e| Error::parse(format!("Invalid JSON from {search_url}: {e}")))?;

        let candidates = parse_search_response(&json)?;
        tracing::info!("Search for {artist} - {title} ({kind}) returned {} candidates", candidates.len());

        Ok(rank_candidates(candidates))
    }

    fn name(&self) -> &'static str {
        "TabClient"
    }
}

#[async_trait]
impl DocumentFetch for TabClient {
    async fn fetch(&self, locator: &Locator) -> Result<String> {
        let url = self.config.fetch_url(locator.as_str());
        let text = self
            .get(&url, &[])
            .await?
            .text()
            .await
            .map_err(|e| Error::Network(format!("Reading body of {url} failed: {e}")))?;

        tracing::debug!("Fetched {} bytes from {url}", text.len());
        Ok(text)
    }
}

/// Parse a search response: a bare array or an object with a `results` array.
///
/// Entries without a locator are skipped; missing rating or votes count as 0.
fn parse_search_response(json: &Value) -> Result<Vec<Candidate>> {
    let hits = json.as_array()
        .or_else(|| json["results"].as_array())
        .ok_or_else(|| Error::parse("Missing results array in search response"))?;

    Ok(hits.iter().filter_map(|hit| {
        let locator = hit["url"].as_str()
            .or_else(|| hit["locator"].as_str())
            .filter(|s| !s.is_empty())?;
        let rating = number(&hit["rating"]).unwrap_or(0.0).max(0.0);
        let votes = hit["votes"].as_u64()
            .or_else(|| hit["voteCount"].as_u64())
            .unwrap_or(0);
        Some(Candidate::new(locator, rating, votes))
    }).collect())
}

/// Read a number that may arrive as a JSON number or a numeric string
fn number(value: &Value) -> Option<f64> {
    value.as_f64().or_else(|| value.as_str()?.trim().parse().ok())
}
