//! Notes part validation (`8c#.6,4p,...`)
//!
//! Note grammar, case-insensitive:
//!
//! ```text
//! [duration: 0-2 digits] [pitch: p ; b e h c d f g a, optional #] [dots] [octave: 4-8] [dots]
//! ```
//!
//! Dots may sit after the pitch or after the octave; both runs count.

use lazy_static::lazy_static;
use regex::Regex;

use crate::diagnostics::{DiagnosticMark, Diagnostics, RtttlPart};
use crate::models::{Defaults, Note, Pitch};
use crate::parse::split_entries;
use crate::parse::tables::{self, DURATION_VALUES, OCTAVE_VALUES};

/// Most dots a note may carry
pub const MAX_DOTS: u32 = 2;

lazy_static! {
    static ref NOTE: Regex =
        Regex::new(r"(?i)^([0-9]{0,2})([pbehcdfga;]#?)(\.{0,2})([4-8]?)(\.{0,2})$").unwrap();
}

/// Result of validating the notes part
#[derive(Clone, Debug, PartialEq)]
pub struct NotesOutcome {
    pub valid: bool,
    pub notes: Vec<Note>,
}

/// Validate the notes part, resolving omitted durations and octaves from
/// `defaults`.
pub fn validate_notes(raw: &str, defaults: Defaults, diagnostics: &mut Diagnostics) -> NotesOutcome {
    let entries = split_entries(raw);
    if entries.is_empty() {
        diagnostics.add(DiagnosticMark::error(
            RtttlPart::Notes,
            "no_notes",
            "no notes present",
        ));
        return NotesOutcome {
            valid: false,
            notes: Vec::new(),
        };
    }

    let mut valid = true;
    let mut notes = Vec::new();

    for (i, entry) in entries.into_iter().enumerate() {
        let index = i + 1;
        match parse_note(entry, index, defaults, diagnostics) {
            NoteEntry::Clean(note) => notes.push(note),
            NoteEntry::Corrected(note) => {
                notes.push(note);
                valid = false;
            }
            NoteEntry::Rejected => valid = false,
        }
    }

    log::debug!("parsed {} notes (valid: {})", notes.len(), valid);
    NotesOutcome { valid, notes }
}

enum NoteEntry {
    Clean(Note),
    /// Kept, but duration or octave had to be replaced
    Corrected(Note),
    /// Reported and left out of the note list
    Rejected,
}

fn invalid_syntax(index: usize, diagnostics: &mut Diagnostics) -> NoteEntry {
    diagnostics.add(
        DiagnosticMark::error(
            RtttlPart::Notes,
            "invalid_note",
            format!("invalid syntax in note {}", index),
        )
        .at_entry(index),
    );
    NoteEntry::Rejected
}

fn parse_note(entry: &str, index: usize, defaults: Defaults, diagnostics: &mut Diagnostics) -> NoteEntry {
    let Some(caps) = NOTE.captures(entry) else {
        return invalid_syntax(index, diagnostics);
    };

    let dots = (caps[3].len() + caps[5].len()) as u32;
    if dots > MAX_DOTS {
        diagnostics.add(
            DiagnosticMark::error(
                RtttlPart::Notes,
                "too_many_dots",
                format!("more than {} dots present in note {}", MAX_DOTS, index),
            )
            .at_entry(index),
        );
        return NoteEntry::Rejected;
    }

    // The grammar only admits tokens `Pitch` knows
    let Ok(pitch) = caps[2].parse::<Pitch>() else {
        return invalid_syntax(index, diagnostics);
    };

    let mut corrected = false;
    let duration = match &caps[1] {
        "" => defaults.duration,
        digits => {
            let raw = tables::parse_number(digits);
            let resolved = resolve(raw, digits, DURATION_VALUES, "duration", index, diagnostics);
            corrected |= resolved != raw;
            resolved
        }
    };
    let octave = match &caps[4] {
        "" => defaults.octave,
        digit => {
            let raw = tables::parse_number(digit);
            let resolved = resolve(raw, digit, OCTAVE_VALUES, "octave", index, diagnostics);
            corrected |= resolved != raw;
            resolved
        }
    };

    let note = Note::new(duration, pitch, octave, dots);
    if corrected {
        NoteEntry::Corrected(note)
    } else {
        NoteEntry::Clean(note)
    }
}

/// `written` is the digit string as it appeared, reported unaltered
fn resolve(
    value: u32,
    written: &str,
    table: &[u32],
    what: &str,
    index: usize,
    diagnostics: &mut Diagnostics,
) -> u32 {
    if tables::is_valid(table, value) {
        return value;
    }
    let nearest = tables::nearest(table, value);
    diagnostics.add(
        DiagnosticMark::error(
            RtttlPart::Notes,
            format!("invalid_{}", what),
            format!(
                "invalid {} {} in note {}, using nearest valid value {}",
                what, written, index, nearest
            ),
        )
        .at_entry(index),
    );
    nearest
}
