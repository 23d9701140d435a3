//! Chord to lyric alignment.
//!
//! A chord line is either paired with the lyric line under it, splitting the
//! lyric at each chord's column, or emitted on its own as an instrumental row.

use super::chords::ChordPosition;
use super::model::Line;

/// The line following a chord line, as far as alignment cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookahead<'a> {
    /// A lyric line the chords can sit on.
    Lyric(&'a str),
    /// Missing, blank, another chord line, a header or a fence.
    Unpairable,
}

/// Lines produced for one chord line, and how many source lines they used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aligned {
    /// Output fragments, all in the same line group.
    pub lines: Vec<Line>,
    /// Source lines consumed: 2 when paired, 1 otherwise.
    pub consumed: usize,
}

/// Align `chords` against the following line, tagging output with `group`.
pub fn align(chords: &[ChordPosition], lookahead: Lookahead<'_>, group: u32) -> Aligned {
    match lookahead {
        Lookahead::Lyric(lyric) => Aligned {
            lines: pair(chords, lyric, group),
            consumed: 2,
        },
        Lookahead::Unpairable => Aligned {
            lines: instrumental(chords, group),
            consumed: 1,
        },
    }
}

fn pair(chords: &[ChordPosition], lyric: &str, group: u32) -> Vec<Line> {
    let lyric: Vec<char> = lyric.chars().collect();

    let mut sorted = chords.to_vec();
    sorted.sort_by_key(|c| c.column);

    let mut lines = Vec::with_capacity(sorted.len() + 1);

    if let Some(first) = sorted.first() {
        if first.column > 0 {
            let prefix = column_slice(&lyric, 0, Some(first.column));
            if !prefix.is_empty() {
                lines.push(Line::lyric(prefix, group));
            }
        }
    }

    for (i, chord) in sorted.iter().enumerate() {
        let end = sorted.get(i + 1).map(|next| next.column);
        lines.push(Line::chord(&chord.name, column_slice(&lyric, chord.column, end), group));
    }

    lines
}

fn instrumental(chords: &[ChordPosition], group: u32) -> Vec<Line> {
    chords
        .iter()
        .map(|chord| Line::chord(&chord.name, "", group))
        .collect()
}

/// Trimmed text between two character columns, clamped to the line.
fn column_slice(chars: &[char], start: usize, end: Option<usize>) -> String {
    let end = end.unwrap_or(chars.len()).min(chars.len());
    let start = start.min(end);
    chars[start..end].iter().collect::<String>().trim().to_string()
}
