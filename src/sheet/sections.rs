//! Section accumulation.

use super::model::{Line, Section};

/// Collects lines into the open section and keeps finished sections in
/// header order.
#[derive(Debug, Default)]
pub struct SectionAccumulator {
    finished: Vec<Section>,
    open: Option<Section>,
}

impl SectionAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a header has been seen and lines are being collected.
    pub const fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Close the current section, if any, and start a new one.
    pub fn open(&mut self, name: impl Into<String>) {
        self.close();
        self.open = Some(Section::new(name));
    }

    /// Append lines to the open section.
    ///
    /// Returns `false` and drops the lines when no section is open.
    pub fn push(&mut self, lines: impl IntoIterator<Item = Line>) -> bool {
        match &mut self.open {
            Some(section) => {
                section.lines.extend(lines);
                true
            }
            None => false,
        }
    }

    /// Move the open section, if any, onto the finished list.
    pub fn close(&mut self) {
        if let Some(section) = self.open.take() {
            tracing::trace!("Closed section [{}] with {} lines", section.name, section.lines.len());
            self.finished.push(section);
        }
    }

    /// Close the open section and return every section in order.
    pub fn finish(mut self) -> Vec<Section> {
        self.close();
        self.finished
    }
}
