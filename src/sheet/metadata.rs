//! Song metadata embedded in the document text or its locator.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::sheet::{DEFAULT_ARTIST, DEFAULT_TITLE};

/// Regex matching `Key: Bm` style labels.
#[allow(clippy::expect_used)]
static RE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?i:key):\s*([A-G][#b]?(?:maj|min|m)?)").expect("valid regex: RE_KEY")
});

/// Regex matching `Capo: 2` or `Capo: no capo` labels.
#[allow(clippy::expect_used)]
static RE_CAPO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?i:capo):\s*((?i:no capo)|\d+)").expect("valid regex: RE_CAPO")
});

/// Locator path segments after `/tab/`: artist slug, then title slug.
#[allow(clippy::expect_used)]
static RE_LOCATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/tab/([^/?#]+)/([^/?#]+)").expect("valid regex: RE_LOCATOR")
});

/// Slug suffixes naming the document kind rather than the song.
const KIND_SUFFIXES: &[&str] = &[
    "chords", "chord", "tabs", "tab", "ukulele", "bass", "drums", "power", "official", "pro",
];

/// Key and capo collected while scanning the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// First `Key:` value seen.
    pub key: Option<String>,
    /// First numeric `Capo:` value seen.
    pub capo: Option<u32>,
}

impl Metadata {
    /// Look for key and capo labels in one raw line.
    ///
    /// The first match of each wins. `Capo: no capo` leaves capo unset so a
    /// later numeric label can still fill it.
    pub fn observe(&mut self, line: &str) {
        if self.key.is_none() {
            if let Some(key) = RE_KEY.captures(line).and_then(|caps| caps.get(1)) {
                self.key = Some(key.as_str().to_string());
            }
        }

        if self.capo.is_none() {
            if let Some(capo) = RE_CAPO.captures(line).and_then(|caps| caps.get(1)) {
                let capo = capo.as_str();
                if !capo.eq_ignore_ascii_case("no capo") {
                    self.capo = capo.parse::<u32>().ok();
                }
            }
        }
    }
}

/// Artist and title for a document, derived from its locator when possible.
pub fn identity_from_locator(locator: Option<&str>) -> (String, String) {
    locator
        .and_then(parse_locator)
        .unwrap_or_else(|| (DEFAULT_ARTIST.to_string(), DEFAULT_TITLE.to_string()))
}

/// Parse `.../tab/<artist-slug>/<title-slug>-...` into display names.
fn parse_locator(locator: &str) -> Option<(String, String)> {
    let caps = RE_LOCATOR.captures(locator)?;
    let artist_slug = caps.get(1)?.as_str();
    let title_slug = caps.get(2)?.as_str();

    if !title_slug.contains('-') {
        return None;
    }

    let mut parts: Vec<&str> = title_slug.split('-').filter(|p| !p.is_empty()).collect();
    while parts.len() > 1 {
        let last = parts[parts.len() - 1];
        let is_id = last.chars().all(|c| c.is_ascii_digit());
        let is_kind = KIND_SUFFIXES.contains(&last.to_lowercase().as_str());
        if !(is_id || is_kind) {
            break;
        }
        parts.pop();
    }

    let artist = title_case(artist_slug);
    let title = title_case(&parts.join("-"));
    if artist.is_empty() || title.is_empty() {
        return None;
    }
    Some((artist, title))
}

/// Turn a slug into words with capitalized first letters.
fn title_case(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn scan(lines: &[&str]) -> Metadata {
        let mut meta = Metadata::default();
        for line in lines {
            meta.observe(line);
        }
        meta
    }

    #[test]
    fn test_key_label() {
        assert_eq!(scan(&["Key: Bm"]).key.as_deref(), Some("Bm"));
        assert_eq!(scan(&["KEY:F#"]).key.as_deref(), Some("F#"));
        assert_eq!(scan(&["Tuning: E A D G B E", "key: Bbmaj"]).key.as_deref(), Some("Bbmaj"));
        assert_eq!(scan(&["Monkey business"]).key, None);
    }

    #[test]
    fn test_first_key_wins() {
        let meta = scan(&["Key: G", "Key: A"]);
        assert_eq!(meta.key.as_deref(), Some("G"));
    }

    #[test]
    fn test_capo_label() {
        assert_eq!(scan(&["Capo: 2"]).capo, Some(2));
        assert_eq!(scan(&["capo: 3rd fret"]).capo, Some(3));
        assert_eq!(scan(&["Capo: no capo"]).capo, None);
        assert_eq!(scan(&["Capo: No Capo", "Capo: 4"]).capo, Some(4));
        assert_eq!(scan(&["Capo: 1", "Capo: 5"]).capo, Some(1));
    }

    #[test]
    fn test_locator_identity() {
        let (artist, title) =
            identity_from_locator(Some("https://tabs.example.com/tab/oasis/wonderwall-chords-27596"));
        assert_eq!(artist, "Oasis");
        assert_eq!(title, "Wonderwall");

        let (artist, title) =
            identity_from_locator(Some("https://tabs.example.com/tab/the-beatles/hey-jude-chords-1061739"));
        assert_eq!(artist, "The Beatles");
        assert_eq!(title, "Hey Jude");
    }

    #[test]
    fn test_locator_defaults() {
        let defaults = (DEFAULT_ARTIST.to_string(), DEFAULT_TITLE.to_string());
        assert_eq!(identity_from_locator(None), defaults);
        assert_eq!(identity_from_locator(Some("https://example.com/songs/42")), defaults);
        assert_eq!(identity_from_locator(Some("https://example.com/tab/oasis/wonderwall")), defaults);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("red_hot-chili-peppers"), "Red Hot Chili Peppers");
        assert_eq!(title_case("ac-dc"), "Ac Dc");
    }
}
