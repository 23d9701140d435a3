//! Collaborator abstractions around the parser.
//!
//! Search and fetch are traits so the parse flow can be driven by the HTTP
//! client in [`crate::tab_source`] or by in-memory stand-ins in tests.

pub mod fetch;
pub mod search;

pub use fetch::{fetch_song, DocumentFetch};
pub use search::{best_candidate, rank_candidates, Candidate, TabSearch};
