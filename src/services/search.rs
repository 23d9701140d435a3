//! Tab search abstractions and candidate ranking.
//!
//! A search backend returns candidate documents with community ratings;
//! candidates are ranked so that a well-rated tab with many votes beats a
//! perfect rating from a handful of voters.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Locator, TabKind};

/// A tab document offered by search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Where to fetch the document from.
    pub locator: Locator,
    /// Average community rating.
    pub rating: f64,
    /// Number of votes behind the rating.
    pub vote_count: u64,
    /// Ranking score, see [`score`].
    pub score: f64,
}

impl Candidate {
    /// Create a candidate and compute its score.
    pub fn new(locator: impl Into<Locator>, rating: f64, vote_count: u64) -> Self {
        Self {
            locator: locator.into(),
            rating,
            vote_count,
            score: score(rating, vote_count),
        }
    }
}

/// `rating × ln(votes)` when there are votes, the bare rating otherwise.
#[allow(clippy::cast_precision_loss)]
pub fn score(rating: f64, vote_count: u64) -> f64 {
    if vote_count > 0 {
        rating * (vote_count as f64).ln()
    } else {
        rating
    }
}

/// Sort candidates best first. Equal scores keep their original order.
pub fn rank_candidates(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates
}

/// The top-ranked candidate, if any.
pub fn best_candidate(ranked: &[Candidate]) -> Option<&Candidate> {
    ranked.first()
}

/// Trait for tab search backends.
#[async_trait]
pub trait TabSearch: Send + Sync {
    /// Find candidate documents, ranked best first.
    async fn search(&self, artist: &str, title: &str, kind: TabKind) -> Result<Vec<Candidate>>;

    /// The best candidate for a song, if search found any.
    async fn best_candidate(
        &self,
        artist: &str,
        title: &str,
        kind: TabKind,
    ) -> Result<Option<Candidate>> {
        Ok(self.search(artist, title, kind).await?.into_iter().next())
    }

    /// Get the name of this backend (for logging).
    fn name(&self) -> &'static str;
}
