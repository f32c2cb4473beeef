//! End-to-end tests: song text → parse → expand → resolve → table.

use chordcalc::notation::{parse, parse_chord};
use chordcalc::{calculate, column_totals, expand_song, resolve, ChordError, PitchClass, TableConfig};

/// Helper: pitch classes of a single chord symbol, ascending.
fn compute(chord: &str) -> Vec<u8> {
    let chord = parse_chord(chord).expect("chord should parse");
    resolve(&chord).iter().map(PitchClass::value).collect()
}

/// Helper: assert a song is rejected with a grammar violation.
fn assert_rejected(song: &str) {
    match parse(song) {
        Err(ChordError::GrammarViolation { .. }) => {}
        other => panic!("expected grammar violation for {:?}, got {:?}", song, other),
    }
}

#[test]
fn note_letters_map_to_pitch_classes() {
    let cases = [
        ("C", 0),
        ("D", 2),
        ("E", 4),
        ("F", 5),
        ("G", 7),
        ("A", 9),
        ("B", 11),
        ("Cb", 11),
        ("B#", 0),
        ("F#", 6),
        ("Ab", 8),
    ];
    for (note, pc) in cases {
        let chord = parse_chord(note).unwrap();
        assert_eq!(chord.root_pc().value(), pc, "root of {}", note);
    }
}

#[test]
fn documented_chord_examples() {
    assert_eq!(compute("C"), vec![0, 4, 7]);
    assert_eq!(compute("C-"), vec![0, 3, 7]);
    assert_eq!(compute("Co"), vec![0, 3, 6]);
    assert_eq!(compute("C5"), vec![0, 7]);
    assert_eq!(compute("C1"), vec![0]);
    assert_eq!(compute("Csus4"), vec![0, 5, 7]);
    assert_eq!(compute("Csus24"), vec![0, 2, 5, 7]);
    assert_eq!(compute("C7"), vec![0, 4, 7, 10]);
    assert_eq!(compute("C^7"), vec![0, 4, 7, 11]);
    assert_eq!(compute("C9"), vec![0, 2, 4, 7, 10]);
    assert_eq!(compute("Cno3"), vec![0, 7]);
    assert_eq!(compute("Cno35"), vec![0]);
    assert_eq!(compute("C(#5)"), vec![0, 4, 8]);
    assert_eq!(compute("C(9)"), vec![0, 2, 4, 7]);
}

#[test]
fn grammar_rejections() {
    assert_rejected("C^6 |");
    assert_rejected("C-sus4 |");
    assert_rejected("16/4 C |");
    assert_rejected("% | C |");
    assert_rejected("C | G | trailing");
    assert_rejected("C | G || |");
    assert_rejected("Csus |");
    assert_rejected("Cno |");
    assert_rejected("C(b9 |");
    assert_rejected("NC C |");
    assert_rejected("4/3 C |");
    assert_rejected("0/4 C |");
}

#[test]
fn repeat_bar_adds_no_rows_or_totals() {
    let song = parse("C | % | G |").unwrap();
    let rows = expand_song(&song).unwrap();
    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["C", "G"]);
    assert_eq!(column_totals(&rows), [1, 0, 1, 0, 1, 0, 0, 2, 0, 0, 0, 1]);
}

#[test]
fn meters_are_kept_per_bar() {
    let song = parse("4/4 C | 3/4 G |").unwrap();
    let meters: Vec<String> = song
        .bars
        .iter()
        .map(|b| b.meter.map(|m| m.to_string()).unwrap_or_default())
        .collect();
    assert_eq!(meters, vec!["4/4", "3/4"]);
}

#[test]
fn full_song_renders_table() {
    let song = "\
4/4 C^7 | A-7 |
    D-9 | G7b9 |
    % | NC |
    Fsus4/G | C(9) ||
";
    let table = calculate(song, &TableConfig::default()).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    // header, divider, six chords, divider, totals
    assert_eq!(lines.len(), 10);
    assert!(lines[2].ends_with("  C^7"));
    assert!(lines[7].ends_with("  C(9)"));
    assert!(lines[7].starts_with("  6. "));
}

#[test]
fn failing_song_reports_character_offset() {
    let err = calculate("C | X |", &TableConfig::default()).unwrap_err();
    assert_eq!(err.offset(), Some(4));
    assert!(err.to_string().starts_with("Grammar violation at offset 4"));
}
