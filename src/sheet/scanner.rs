//! Single-pass document scanner.
//!
//! Walks the document top to bottom. Only the first fenced block is read:
//! its opening fence starts collection and its closing fence ends the scan,
//! whatever follows.

use super::align::{align, Lookahead};
use super::classify::{classify, LineKind};
use super::metadata::{identity_from_locator, Metadata};
use super::model::{Line, Song};
use super::sections::SectionAccumulator;

/// Where the scanner is relative to the fenced block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Preamble,
    InFencedBlock,
    Terminated,
}

/// Parse state owned by one `parse` call.
pub(crate) struct Scanner<'a> {
    lines: Vec<&'a str>,
    cursor: usize,
    segment: Segment,
    next_group: u32,
    metadata: Metadata,
    sections: SectionAccumulator,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().collect(),
            cursor: 0,
            segment: Segment::Preamble,
            next_group: 0,
            metadata: Metadata::default(),
            sections: SectionAccumulator::new(),
        }
    }

    /// Consume the whole document and build the song.
    pub(crate) fn run(mut self, locator: Option<&str>) -> Song {
        while self.segment != Segment::Terminated {
            let Some(&line) = self.lines.get(self.cursor) else {
                break;
            };
            self.metadata.observe(line);
            self.cursor += self.step(line);
        }

        let (artist, title) = identity_from_locator(locator);
        let Metadata { key, capo } = self.metadata;
        let sections = self.sections.finish();

        tracing::debug!(
            "Parsed \"{title}\" by {artist}: {} sections, {} line groups",
            sections.len(),
            self.next_group
        );

        Song::new(artist, title, key, capo, sections, locator.map(String::from))
    }

    /// Handle the line under the cursor and return how many lines it used.
    fn step(&mut self, line: &str) -> usize {
        match self.segment {
            Segment::Preamble => {
                if classify(line) == LineKind::Fence {
                    self.segment = Segment::InFencedBlock;
                }
                1
            }
            Segment::InFencedBlock => self.step_in_block(line),
            Segment::Terminated => 1,
        }
    }

    fn step_in_block(&mut self, line: &str) -> usize {
        match classify(line) {
            LineKind::Blank => 1,
            LineKind::Fence => {
                self.segment = Segment::Terminated;
                1
            }
            LineKind::Header(name) => {
                self.sections.open(name);
                1
            }
            // Content before the first header belongs to no section.
            _ if !self.sections.is_open() => 1,
            LineKind::Lyric => {
                let group = self.take_group();
                self.sections.push([Line::lyric(line.trim(), group)]);
                1
            }
            LineKind::Chords(chords) => {
                let next = self.lines.get(self.cursor + 1).copied();
                let lookahead = match next {
                    // Fences and headers never pair, so a closing fence still ends the block.
                    Some(text) if classify(text) == LineKind::Lyric => Lookahead::Lyric(text),
                    _ => Lookahead::Unpairable,
                };

                let group = self.take_group();
                let aligned = align(&chords, lookahead, group);
                if let (2, Some(text)) = (aligned.consumed, next) {
                    self.metadata.observe(text);
                }
                self.sections.push(aligned.lines);
                aligned.consumed
            }
        }
    }

    fn take_group(&mut self) -> u32 {
        let group = self.next_group;
        self.next_group += 1;
        group
    }
}
