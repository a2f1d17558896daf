//! Diagnostic dump of a parse result
//!
//! Plain text for debugging and demos. The layout is not a stable format.

use crate::parse::ParseResult;

fn validity(valid: bool) -> &'static str {
    if valid {
        "valid"
    } else {
        "INVALID"
    }
}

/// Render parts, effective defaults, the note table and all diagnostics
pub fn dump(result: &ParseResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("Name:     {} ({})\n", result.name(), validity(result.is_name_valid())));
    out.push_str(&format!(
        "Defaults: {} ({})\n",
        result.defaults_str(),
        validity(result.is_defaults_valid())
    ));
    out.push_str(&format!(
        "Notes:    {} ({})\n\n",
        result.notes_str(),
        validity(result.is_notes_valid())
    ));

    let defaults = result.defaults();
    out.push_str(&format!(
        "Effective defaults: duration={} octave={} bpm={}\n\n",
        defaults.duration, defaults.octave, defaults.bpm
    ));

    out.push_str(&format!(
        "{:>4}  {:>8}  {:<5}  {:>6}  {:>4}\n",
        "#", "duration", "pitch", "octave", "dots"
    ));
    for (i, note) in result.notes().iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:>8}  {:<5}  {:>6}  {:>4}\n",
            i + 1,
            note.duration,
            note.pitch.as_str(),
            note.octave,
            note.dots
        ));
    }
    out.push('\n');

    let warnings = result.warnings();
    out.push_str(&format!("Warnings ({}):\n", warnings.len()));
    for warning in warnings {
        out.push_str(&format!("  - {}\n", warning));
    }

    let errors = result.errors();
    out.push_str(&format!("Errors ({}):\n", errors.len()));
    for error in errors {
        out.push_str(&format!("  - {}\n", error));
    }

    out
}

#[cfg(test)]
mod tests {
    use crate::parse::parse;

    #[test]
    fn test_dump_lists_notes_and_diagnostics() {
        let text = parse("LongerThanTen:d=4,o=5,b=100:8c#.6,x").dump();

        assert!(text.contains("Name:     LongerThanTen (INVALID)"));
        assert!(text.contains("Defaults: d=4,o=5,b=100 (valid)"));
        assert!(text.contains("Effective defaults: duration=4 octave=5 bpm=100"));
        assert!(text.contains("   1         8  C#          6     1"));
        assert!(text.contains("Warnings (1):"));
        assert!(text.contains("Errors (1):\n  - invalid syntax in note 2"));
    }

    #[test]
    fn test_dump_section_layout() {
        let text = parse("Tune::c").dump();

        assert!(text.starts_with(
            "Name:     Tune (valid)\nDefaults:  (valid)\nNotes:    c (valid)\n\nEffective defaults:"
        ));
        assert!(text.ends_with("Warnings (0):\nErrors (0):\n"));
    }
}
