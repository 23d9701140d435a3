//! Chord symbol recognition.
//!
//! Finds chord symbols such as `C`, `F#m7`, `Bbmaj7`, `Dsus4`, `Cadd9` or
//! `G/B` inside a line and reports the character column each one starts at.

use std::sync::LazyLock;

use regex::Regex;

/// Root, accidental, quality, extensions, alterations, sus, add, slash bass.
#[allow(clippy::expect_used)]
static RE_CHORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b[A-G][#b]?(?:maj|min|aug|dim|m|M|\+|°)?\d*(?:[#b]\d+)*(?:sus[24])?(?:add\d+)?(?:/[A-G][#b]?)?",
    )
    .expect("valid regex: RE_CHORD")
});

/// A chord symbol and the zero-based character column it starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordPosition {
    /// Chord symbol as written.
    pub name: String,
    /// Character column of the first symbol character.
    pub column: usize,
}

impl ChordPosition {
    /// Number of characters the symbol occupies.
    pub fn width(&self) -> usize {
        self.name.chars().count()
    }
}

/// Find every chord symbol in `line`, in order of appearance.
///
/// Matches must start on a word boundary but may run into the following
/// word: `Be` yields `B` and `Amazing` yields `Am`. Telling those apart from
/// real chords is left to the classifier's remainder heuristic.
pub fn find_chords(line: &str) -> Vec<ChordPosition> {
    RE_CHORD
        .find_iter(line)
        .map(|m| ChordPosition {
            name: m.as_str().to_string(),
            column: line[..m.start()].chars().count(),
        })
        .collect()
}
