//! `chordsheet` - chord-sheet parsing.
//!
//! Converts the markdown-like text of a scraped guitar chord sheet into a
//! structured song: ordered sections of lines, each pairing a chord symbol
//! with the lyric fragment it sits above. Tab search and document fetch are
//! thin collaborators around the parser.

// Re-export public modules for use in integration tests and as a library
pub mod config;
pub mod constants;
pub mod error;
pub mod services;
pub mod sheet;
pub mod tab_source;
pub mod types;

pub use error::{Error, Result};
pub use sheet::{parse, Song};
