//! End-to-end tests for chord-sheet parsing.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use chordsheet::sheet::{parse, Line, Song};

fn section_names(song: &Song) -> Vec<&str> {
    song.sections().iter().map(|s| s.name.as_str()).collect()
}

#[test]
fn parsing_is_deterministic() {
    let doc = "Key: C\n```\n[Verse]\nC   G\nOne two\n[Chorus]\nF\n```\n";
    assert_eq!(parse(doc, None), parse(doc, None));
}

#[test]
fn section_count_matches_headers() {
    let doc = "```\n[Intro]\nG\n[Verse 1]\nwords\n[Chorus]\n[Verse 2]\nmore words\n[Chorus]\nla la la la\n```\n";
    let song = parse(doc, None);
    assert_eq!(song.sections().len(), 5);
    assert_eq!(section_names(&song), vec!["Intro", "Verse 1", "Chorus", "Verse 2", "Chorus"]);
}

#[test]
fn only_the_first_fenced_block_is_read() {
    let doc = "\
```
[Verse]
G       D
Hello   world
```
[Chorus]
C
Should not appear
```
[Bridge]
```
";
    let song = parse(doc, None);
    assert_eq!(section_names(&song), vec!["Verse"]);
    assert_eq!(
        song.sections()[0].lines,
        vec![Line::chord("G", "Hello", 0), Line::chord("D", "world", 0)]
    );
}

#[test]
fn metadata_after_the_block_is_ignored() {
    let doc = "```\n[Verse]\nla la la la\n```\nKey: D\nCapo: 3\n";
    let song = parse(doc, None);
    assert_eq!(song.key(), None);
    assert_eq!(song.capo(), None);
}

#[test]
fn instrumental_lines_share_a_group() {
    let doc = "```\n[Solo]\nAm  F  C  G\n\n[Outro]\nEm  D\n```";
    let song = parse(doc, None);

    let solo = &song.sections()[0];
    assert_eq!(solo.lines.len(), 4);
    assert!(solo.lines.iter().all(|l| l.lyric.is_empty() && l.line_group == 0));
    let names: Vec<_> = solo.lines.iter().filter_map(Line::chord_name).collect();
    assert_eq!(names, vec!["Am", "F", "C", "G"]);

    let outro = &song.sections()[1];
    assert_eq!(outro.lines, vec![Line::chord("Em", "", 1), Line::chord("D", "", 1)]);
}

#[test]
fn chord_line_at_end_of_document_is_instrumental() {
    let song = parse("```\n[Outro]\nG  C  D", None);
    assert_eq!(
        song.sections()[0].lines,
        vec![Line::chord("G", "", 0), Line::chord("C", "", 0), Line::chord("D", "", 0)]
    );
}

#[test]
fn metadata_labels() {
    let song = parse("Key: Bm\nCapo: 2\n```\n```", None);
    assert_eq!(song.key(), Some("Bm"));
    assert_eq!(song.capo(), Some(2));

    let song = parse("Capo: no capo\n", None);
    assert_eq!(song.capo(), None);
    assert!(song.sections().is_empty());
}

#[test]
fn paired_alignment() {
    let song = parse("```\n[Verse]\nG       D\nHello   world\n```", None);
    assert_eq!(section_names(&song), vec!["Verse"]);

    let lines = &song.sections()[0].lines;
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].chord_name(), Some("G"));
    assert_eq!(lines[0].lyric, "Hello");
    assert_eq!(lines[1].chord_name(), Some("D"));
    assert_eq!(lines[1].lyric, "world");
    assert_eq!(lines[0].line_group, lines[1].line_group);
}

#[test]
fn text_before_the_first_chord_becomes_a_prefix() {
    let song = parse("```\n[Verse]\n    Am\nSee you   again\n```", None);
    assert_eq!(
        song.sections()[0].lines,
        vec![Line::lyric("See", 0), Line::chord("Am", "you   again", 0)]
    );
}

#[test]
fn group_ids_match_invocations() {
    let doc = "\
```
Am          G
Lost before the header
[Verse]
Just words here
G       D
Hello   world
C   G
Am  F

Last words
```";
    let song = parse(doc, None);
    assert_eq!(section_names(&song), vec!["Verse"]);

    let verse = &song.sections()[0];
    // lyric, paired row, two instrumental rows, lyric
    assert_eq!(verse.group_count(), 5);
    assert_eq!(
        verse.lines,
        vec![
            Line::lyric("Just words here", 0),
            Line::chord("G", "Hello", 1),
            Line::chord("D", "world", 1),
            Line::chord("C", "", 2),
            Line::chord("G", "", 2),
            Line::chord("Am", "", 3),
            Line::chord("F", "", 3),
            Line::lyric("Last words", 4),
        ]
    );
}

#[test]
fn documents_without_sections() {
    assert!(parse("", None).sections().is_empty());
    assert!(parse("[Verse]\nG\nHello", None).sections().is_empty());
    assert!(parse("```\nG       D\nHello   world\n```", None).sections().is_empty());
}

#[test]
fn unterminated_block_keeps_open_section() {
    let song = parse("```\n[Verse]\nla la la la", None);
    assert_eq!(song.sections()[0].lines, vec![Line::lyric("la la la la", 0)]);
}

#[test]
fn short_words_are_read_as_chords() {
    // "A" and "Be" pass the chord-line heuristic and come out as instrumentals.
    let song = parse("```\n[Verse]\nA\nBe\n```", None);
    assert_eq!(
        song.sections()[0].lines,
        vec![Line::chord("A", "", 0), Line::chord("B", "", 1)]
    );
}

#[test]
fn chords_are_not_paired_across_headers_or_fences() {
    let song = parse("```\n[Intro]\nG  D\n[Verse]\nHello\n```", None);
    assert_eq!(song.sections()[0].lines, vec![Line::chord("G", "", 0), Line::chord("D", "", 0)]);
    assert_eq!(song.sections()[1].lines, vec![Line::lyric("Hello", 1)]);

    let song = parse("```\n[Outro]\nG  D\n```\nHello again\n", None);
    assert_eq!(song.sections()[0].lines.len(), 2);
    assert!(song.sections()[0].lines.iter().all(|l| l.lyric.is_empty()));
}

#[test]
fn song_serializes_to_expected_json() {
    let locator = "https://tabs.example.com/tab/the-beatles/let-it-be-chords-17427";
    let song = parse("Key: C\n```\n[Verse]\nC       G\nWhen I  find\n```", Some(locator));

    let json = serde_json::to_value(&song).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "artist": "The Beatles",
            "title": "Let It Be",
            "key": "C",
            "sections": [{
                "name": "Verse",
                "lines": [
                    {"chord": {"name": "C"}, "lyric": "When I", "lineGroup": 0},
                    {"chord": {"name": "G"}, "lyric": "find", "lineGroup": 0}
                ]
            }],
            "sourceUrl": locator
        })
    );

    let back: Song = serde_json::from_value(json).unwrap();
    assert_eq!(back, song);
}

#[test]
fn parse_is_usable_from_many_threads() {
    let doc = "```\n[Verse]\nG       D\nHello   world\n```";
    let expected = parse(doc, None);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| parse(doc, None))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
