//! Application constants.
//!
//! Centralizes magic numbers and default values used by the parser and the
//! tab source client.

/// Chord-sheet parser constants.
pub mod sheet {
    /// Marker that opens and closes the fenced content block.
    pub const FENCE_MARKER: &str = "```";

    /// A line stops being a chord line once this many non-chord characters remain.
    pub const MAX_CHORD_LINE_REMAINDER: usize = 5;

    /// Characters that mark a leftover remainder as prose.
    pub const PROSE_PUNCTUATION: &[char] = &[',', '.'];

    /// Artist used when the locator does not yield one.
    pub const DEFAULT_ARTIST: &str = "Unknown Artist";

    /// Title used when the locator does not yield one.
    pub const DEFAULT_TITLE: &str = "Unknown Title";
}

/// HTTP client constants.
pub mod http {
    /// Default request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Maximum number of ranked candidates printed by the CLI.
    pub const MAX_LISTED_CANDIDATES: usize = 20;
}
