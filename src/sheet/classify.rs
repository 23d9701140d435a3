//! Line classification: fence, section header, chord line or lyric line.

use std::sync::LazyLock;

use regex::Regex;

use super::chords::{find_chords, ChordPosition};
use crate::constants::sheet::{FENCE_MARKER, MAX_CHORD_LINE_REMAINDER, PROSE_PUNCTUATION};

/// Regex matching `[Verse 1]` style section headers on a trimmed line.
#[allow(clippy::expect_used)]
static RE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[([^\[\]]+)\]$").expect("valid regex: RE_HEADER")
});

/// What a single raw line is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace only.
    Blank,
    /// Opens or closes the fenced content block.
    Fence,
    /// `[Name]` section header.
    Header(String),
    /// Chord symbols and little else.
    Chords(Vec<ChordPosition>),
    /// Anything else.
    Lyric,
}

/// Classify one raw line.
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if trimmed.starts_with(FENCE_MARKER) {
        return LineKind::Fence;
    }
    if let Some(name) = section_header(trimmed) {
        return LineKind::Header(name);
    }

    let chords = find_chords(line);
    if is_chord_line(line, &chords) {
        LineKind::Chords(chords)
    } else {
        LineKind::Lyric
    }
}

/// Header name if `line` is a `[Name]` header.
pub fn section_header(line: &str) -> Option<String> {
    let caps = RE_HEADER.captures(line.trim())?;
    let name = caps.get(1)?.as_str().trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Decide whether `line` holds only chords.
///
/// Every match is cut out of a copy of the line, rightmost first so the
/// remaining columns stay valid. What is left must be short and free of
/// sentence punctuation.
pub fn is_chord_line(line: &str, chords: &[ChordPosition]) -> bool {
    if chords.is_empty() {
        return false;
    }

    let remainder = strip_chords(line, chords);
    let remainder = remainder.trim();

    remainder.chars().count() < MAX_CHORD_LINE_REMAINDER
        && !remainder.contains(PROSE_PUNCTUATION)
}

fn strip_chords(line: &str, chords: &[ChordPosition]) -> String {
    let mut chars: Vec<char> = line.chars().collect();

    let mut by_column: Vec<&ChordPosition> = chords.iter().collect();
    by_column.sort_by(|a, b| b.column.cmp(&a.column));

    for chord in by_column {
        let start = chord.column.min(chars.len());
        let end = (chord.column + chord.width()).min(chars.len());
        chars.drain(start..end);
    }

    chars.into_iter().collect()
}
