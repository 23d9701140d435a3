//! Document fetching and the search → fetch → parse flow.

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::services::search::TabSearch;
use crate::sheet::{self, Song};
use crate::types::{Locator, TabKind};

/// Trait for sources that return the raw text of a tab document.
#[async_trait]
pub trait DocumentFetch: Send + Sync {
    /// Fetch the raw document behind `locator`.
    async fn fetch(&self, locator: &Locator) -> Result<String>;
}

/// Search for a song, fetch the best candidate and parse it.
///
/// Collaborator errors are returned as-is; nothing is retried here.
pub async fn fetch_song(
    search: &dyn TabSearch,
    fetcher: &dyn DocumentFetch,
    artist: &str,
    title: &str,
    kind: TabKind,
) -> Result<Song> {
    let candidate = search
        .best_candidate(artist, title, kind)
        .await?
        .ok_or_else(|| Error::NoResults {
            artist: artist.to_string(),
            title: title.to_string(),
        })?;

    tracing::info!(
        "{} picked {} (rating {:.2}, {} votes)",
        search.name(),
        candidate.locator,
        candidate.rating,
        candidate.vote_count
    );

    let text = fetcher.fetch(&candidate.locator).await?;
    Ok(sheet::parse(&text, Some(candidate.locator.as_str())))
}
