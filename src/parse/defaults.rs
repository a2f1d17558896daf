//! Defaults part validation (`d=4,o=6,b=63`)
//!
//! Each entry is checked on its own. A bad entry is reported and skipped,
//! an out-of-table value is replaced by the nearest allowed one.

use lazy_static::lazy_static;
use regex::Regex;

use crate::diagnostics::{DiagnosticMark, Diagnostics, RtttlPart};
use crate::models::Defaults;
use crate::parse::split_entries;
use crate::parse::tables::{self, BPM_VALUES, DURATION_VALUES, OCTAVE_VALUES};

lazy_static! {
    static ref DEFAULT_ENTRY: Regex = Regex::new(r"^([dob])=([0-9]+)$").unwrap();
}

/// Result of validating the defaults part
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefaultsOutcome {
    pub valid: bool,
    pub defaults: Defaults,
}

/// Validate the defaults part and compute the effective defaults
pub fn validate_defaults(raw: &str, diagnostics: &mut Diagnostics) -> DefaultsOutcome {
    let mut defaults = Defaults::default();
    if raw.is_empty() {
        log::debug!("no defaults given, using {}", defaults);
        return DefaultsOutcome { valid: true, defaults };
    }

    let mut valid = true;
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.len() != raw.len() {
        diagnostics.add(DiagnosticMark::warning(
            RtttlPart::Defaults,
            "whitespace",
            "whitespace in defaults removed",
        ));
    }

    let mut duration = None;
    let mut octave = None;
    let mut bpm = None;

    for (i, entry) in split_entries(&stripped).into_iter().enumerate() {
        let index = i + 1;
        let Some(caps) = DEFAULT_ENTRY.captures(entry) else {
            diagnostics.add(
                DiagnosticMark::warning(
                    RtttlPart::Defaults,
                    "invalid_default",
                    format!("invalid default setting '{}'", entry),
                )
                .at_entry(index),
            );
            valid = false;
            continue;
        };

        let key = &caps[1];
        let written = &caps[2];
        let value = tables::parse_number(written);
        let slot = match key {
            "d" => &mut duration,
            "o" => &mut octave,
            _ => &mut bpm,
        };

        if slot.is_some() {
            diagnostics.add(
                DiagnosticMark::warning(
                    RtttlPart::Defaults,
                    "duplicate_default",
                    format!("default '{}' specified more than once", key),
                )
                .at_entry(index),
            );
            valid = false;
        }

        let resolved = match key {
            "d" => substitute(value, written, DURATION_VALUES, "duration", index, diagnostics, true),
            "o" => substitute(value, written, OCTAVE_VALUES, "octave", index, diagnostics, true),
            _ => substitute(value, written, BPM_VALUES, "bpm", index, diagnostics, false),
        };
        if resolved != value {
            valid = false;
        }
        *slot = Some(resolved);
    }

    if let Some(d) = duration {
        defaults.duration = d;
    }
    if let Some(o) = octave {
        defaults.octave = o;
    }
    if let Some(b) = bpm {
        defaults.bpm = b;
    }

    log::debug!("effective defaults {} (valid: {})", defaults, valid);
    DefaultsOutcome { valid, defaults }
}

/// Check `value` against `table`, reporting and returning the nearest
/// member when it is not allowed. The report quotes the digits as
/// `written`. Tempo corrections are only warnings.
fn substitute(
    value: u32,
    written: &str,
    table: &[u32],
    what: &str,
    index: usize,
    diagnostics: &mut Diagnostics,
    as_error: bool,
) -> u32 {
    if tables::is_valid(table, value) {
        return value;
    }

    let nearest = tables::nearest(table, value);
    let message = format!(
        "invalid default {} {}, using nearest valid value {}",
        what, written, nearest
    );
    let kind = format!("invalid_{}", what);
    let mark = if as_error {
        DiagnosticMark::error(RtttlPart::Defaults, kind, message)
    } else {
        DiagnosticMark::warning(RtttlPart::Defaults, kind, message)
    };
    diagnostics.add(mark.at_entry(index));
    nearest
}
