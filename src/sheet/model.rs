//! Song model produced by the chord-sheet parser.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::constants::sheet::{DEFAULT_ARTIST, DEFAULT_TITLE};

/// A parsed song: metadata plus ordered sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    artist: String,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    capo: Option<u32>,
    sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_url: Option<String>,
}

impl Song {
    /// Assemble a finished song.
    pub(crate) const fn new(
        artist: String,
        title: String,
        key: Option<String>,
        capo: Option<u32>,
        sections: Vec<Section>,
        source_url: Option<String>,
    ) -> Self {
        Self { artist, title, key, capo, sections, source_url }
    }

    /// Artist name, or "Unknown Artist".
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Song title, or "Unknown Title".
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Key named by a `Key:` label, if any.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Capo fret named by a `Capo:` label, if any.
    pub const fn capo(&self) -> Option<u32> {
        self.capo
    }

    /// Sections in header order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Locator the document was fetched from.
    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    /// Whether artist and title are still the placeholders.
    pub fn has_default_display_fields(&self) -> bool {
        self.artist == DEFAULT_ARTIST && self.title == DEFAULT_TITLE
    }

    /// Replace the display fields with enriched metadata.
    #[must_use]
    pub fn with_display_fields(self, artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            ..self
        }
    }
}

/// A named block of the song, opened by a `[Name]` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Header text without brackets.
    pub name: String,
    /// Lines in source order.
    pub lines: Vec<Line>,
}

impl Section {
    /// Create an empty section.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), lines: Vec::new() }
    }

    /// Number of distinct line groups in this section.
    pub fn group_count(&self) -> usize {
        self.lines.iter().map(|l| l.line_group).collect::<BTreeSet<_>>().len()
    }
}

/// A chord annotation sitting above a lyric fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    /// Chord symbol as written, e.g. `F#m7/C#`.
    pub name: String,
}

/// One rendered fragment: an optional chord over a lyric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    /// Chord above this fragment, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chord: Option<Chord>,
    /// Lyric text, empty for instrumental chords.
    pub lyric: String,
    /// Shared by every fragment that came from the same source row.
    pub line_group: u32,
}

impl Line {
    /// A lyric fragment with no chord.
    pub fn lyric(lyric: impl Into<String>, line_group: u32) -> Self {
        Self { chord: None, lyric: lyric.into(), line_group }
    }

    /// A chord over a lyric fragment.
    pub fn chord(name: impl Into<String>, lyric: impl Into<String>, line_group: u32) -> Self {
        Self {
            chord: Some(Chord { name: name.into() }),
            lyric: lyric.into(),
            line_group,
        }
    }

    /// Chord name, if this fragment has one.
    pub fn chord_name(&self) -> Option<&str> {
        self.chord.as_ref().map(|c| c.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn sample() -> Song {
        let mut verse = Section::new("Verse");
        verse.lines.push(Line::chord("G", "Hello", 0));
        verse.lines.push(Line::chord("D", "world", 0));
        verse.lines.push(Line::lyric("Goodbye", 1));
        Song::new(
            DEFAULT_ARTIST.to_string(),
            DEFAULT_TITLE.to_string(),
            Some("G".to_string()),
            None,
            vec![verse],
            None,
        )
    }

    #[test]
    fn serializes_with_camel_case_and_omits_none() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["key"], "G");
        assert!(json.get("capo").is_none());
        assert!(json.get("sourceUrl").is_none());

        let first = &json["sections"][0]["lines"][0];
        assert_eq!(first["chord"]["name"], "G");
        assert_eq!(first["lineGroup"], 0);

        let plain = &json["sections"][0]["lines"][2];
        assert!(plain.get("chord").is_none());
        assert_eq!(plain["lyric"], "Goodbye");
    }

    #[test]
    fn group_count_counts_distinct_groups() {
        assert_eq!(sample().sections()[0].group_count(), 2);
    }

    #[test]
    fn with_display_fields_keeps_content() {
        let song = sample();
        assert!(song.has_default_display_fields());

        let enriched = song.clone().with_display_fields("Oasis", "Wonderwall");
        assert_eq!(enriched.artist(), "Oasis");
        assert_eq!(enriched.title(), "Wonderwall");
        assert_eq!(enriched.sections(), song.sections());
        assert!(!enriched.has_default_display_fields());
    }
}
