//! Chord-sheet parsing.
//!
//! Turns the markdown-like text of a scraped chord sheet into a [`Song`]:
//! sections of lines, each pairing an optional chord with the lyric fragment
//! it sits above.
//!
//! ~~~text
//! Key: G
//! ```
//! [Verse]
//! G       D
//! Hello   world
//! ```
//! ~~~
//!
//! yields one `Verse` section with `G` over "Hello" and `D` over "world",
//! both sharing a line group. Parsing is pure and never fails; anything the
//! heuristics cannot place is dropped or kept as plain lyric text.

pub mod chords;
pub mod classify;
pub mod metadata;
pub mod model;

mod align;
mod scanner;
mod sections;

use std::path::Path;

use crate::error::{Error, Result};

pub use align::{align, Aligned, Lookahead};
pub use chords::{find_chords, ChordPosition};
pub use model::{Chord, Line, Section, Song};
pub use sections::SectionAccumulator;

/// Parse a chord-sheet document.
///
/// `locator` is where the document came from; when it has the usual
/// `/tab/<artist>/<title>-...` shape it supplies artist and title.
pub fn parse(text: &str, locator: Option<&str>) -> Song {
    scanner::Scanner::new(text).run(locator)
}

/// Read a chord-sheet document from disk and parse it.
pub fn parse_file(path: &Path, locator: Option<&str>) -> Result<Song> {
    let text = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
    Ok(parse(&text, locator))
}
