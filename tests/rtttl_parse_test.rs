// RTTTL parsing tests
//
// End-to-end checks through the public crate API: part splitting,
// defaults resolution, note parsing and canonical reconstruction.

use rtttl_wasm::{
    nearest_bpm, nearest_duration, nearest_octave, parse, DiagnosticSeverity, Note, ParseResult,
    Pitch, RtttlPart,
};

#[test]
fn test_flintstones_parses_cleanly() {
    let result = ParseResult::parse("Flntstn:d=4,o=5,b=200:g#,c#,8p,c#6,8a#");

    assert!(result.is_name_valid());
    assert!(result.is_defaults_valid());
    assert!(result.is_notes_valid());
    assert_eq!(result.bpm(), 200);
    assert_eq!(result.default_octave(), 5);
    assert_eq!(result.default_duration(), 4);
    assert_eq!(result.note_count(), 5);
    assert!(result.errors().is_empty());
    assert!(result.warnings().is_empty());
}

#[test]
fn test_two_parts_is_single_fatal_error() {
    let result = parse("Flntstn:g#,c#,8p");

    assert_eq!(result.errors().len(), 1);
    assert!(result.warnings().is_empty());
    assert_eq!(result.note_count(), 0);
    assert!(!result.is_name_valid());
    assert!(!result.is_defaults_valid());
    assert!(!result.is_notes_valid());
    assert_eq!(result.diagnostics().marks[0].part, RtttlPart::Input);
}

#[test]
fn test_invalid_default_duration_substituted() {
    let result = parse("Tune:d=99,o=5,b=63:c");

    assert!(!result.is_defaults_valid());
    assert_eq!(result.default_duration(), 32);
    assert_eq!(result.errors().len(), 1);
    assert!(result.errors()[0].contains("99"));
    assert!(result.errors()[0].contains("32"));
    // The substituted default flows into notes without a duration
    assert_eq!(result.notes()[0].duration, 32);
}

#[test]
fn test_bpm_substitution_is_only_a_warning() {
    let result = parse("Tune:b=130:c");

    assert!(!result.is_defaults_valid());
    assert_eq!(result.bpm(), 125);
    assert!(result.errors().is_empty());
    assert_eq!(result.warnings().len(), 1);
}

#[test]
fn test_note_with_too_many_dots_is_dropped() {
    let result = parse("Tune:d=4,o=5,b=100:c,4c....,d");

    assert!(!result.is_notes_valid());
    assert_eq!(result.note_count(), 2);
    assert_eq!(result.errors(), vec!["more than 2 dots present in note 2"]);
    assert_eq!(result.notes()[1].pitch, Pitch::D);
}

#[test]
fn test_sharpened_pitch_note_is_kept() {
    let result = parse("Tune:d=4,o=5,b=100:e#,c");

    assert!(result.is_notes_valid());
    assert_eq!(result.note_count(), 2);
    assert!(result.errors().is_empty());
    assert_eq!(result.notes()[0].pitch, Pitch::ESharp);
}

#[test]
fn test_huge_default_reported_with_original_digits() {
    let result = parse("Tune:d=99999999999:c");

    assert_eq!(
        result.errors(),
        vec!["invalid default duration 99999999999, using nearest valid value 32"]
    );
    assert_eq!(result.default_duration(), 32);
}

#[test]
fn test_trailing_commas_tolerated() {
    let result = parse("Tune:d=4,o=5,:c,d,");

    assert!(result.is_defaults_valid());
    assert!(result.is_notes_valid());
    assert_eq!(result.note_count(), 2);
    assert!(result.errors().is_empty());
    assert!(result.warnings().is_empty());
    assert_eq!(result.to_rtttl(), "Tune:d=4,o=5,:c,d,");
}

#[test]
fn test_resolved_notes() {
    let result = parse("Mix:d=8,o=6,b=140:c,16d#7,2p.,h5..,;");

    assert!(result.is_notes_valid());
    assert_eq!(
        result.notes(),
        &[
            Note::new(8, Pitch::C, 6, 0),
            Note::new(16, Pitch::DSharp, 7, 0),
            Note::new(2, Pitch::P, 6, 1),
            Note::new(8, Pitch::B, 5, 2),
            Note::new(8, Pitch::P, 6, 0),
        ]
    );
}

#[test]
fn test_diagnostics_ordered_by_part() {
    let result = parse("TwelveChars!:d=4,d=8,o=9: c");

    let severities: Vec<(RtttlPart, DiagnosticSeverity)> = result
        .diagnostics()
        .marks
        .iter()
        .map(|m| (m.part, m.severity))
        .collect();
    assert_eq!(
        severities,
        vec![
            (RtttlPart::Name, DiagnosticSeverity::Warning),
            (RtttlPart::Defaults, DiagnosticSeverity::Warning),
            (RtttlPart::Defaults, DiagnosticSeverity::Error),
            (RtttlPart::Notes, DiagnosticSeverity::Error),
        ]
    );
    assert_eq!(result.default_duration(), 8);
    assert_eq!(result.default_octave(), 8);
}

#[test]
fn test_canonical_reconstruction() {
    let valid = "Flntstn:d=4,o=5,b=200:g#,c#,8p,c#6,8a#";
    assert_eq!(parse(valid).to_rtttl(), valid);

    let long = "An Unreasonably Long Ringtone Name:d=8,o=6,b=180:c,e,g";
    assert_eq!(
        parse(long).to_rtttl(),
        "An Unreasonably Long:d=8,o=6,b=180:c,e,g"
    );

    let fixed = parse("Tune:d=5,o=5,b=100:c,nonsense");
    assert_eq!(fixed.to_rtttl(), "Tune:d=4,o=5,b=100:c,nonsense");
}

#[test]
fn test_lookup_free_functions() {
    assert_eq!(nearest_bpm(24), 25);
    assert_eq!(nearest_bpm(1000), 900);
    assert_eq!(nearest_duration(3), 2);
    assert_eq!(nearest_octave(4), 5);
}
