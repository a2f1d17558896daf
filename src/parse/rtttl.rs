//! RTTTL parsing entry point
//!
//! A ringtone is `name:defaults:notes`. The three parts are validated
//! independently into a `ParseBuilder`, which is then frozen into an
//! immutable `ParseResult`.
//!
//! # Diagnostic order
//!
//! Marks are recorded in the order found: name, then defaults, then notes.
//! A wrong part count is the only fatal problem and is the sole mark.

use std::fmt;

use serde::Serialize;

use crate::diagnostics::{DiagnosticMark, DiagnosticSeverity, Diagnostics, RtttlPart};
use crate::error::RtttlError;
use crate::models::{Defaults, Note};
use crate::parse::defaults::validate_defaults;
use crate::parse::name::validate_name;
use crate::parse::notes::validate_notes;
use crate::renderers;

/// Parse an RTTTL string
pub fn parse(rtttl: &str) -> ParseResult {
    ParseBuilder::new().run(rtttl).finish()
}

/// Mutable accumulator used while a ringtone is being parsed
#[derive(Debug, Default)]
struct ParseBuilder {
    name: String,
    defaults_str: String,
    notes_str: String,
    name_valid: bool,
    defaults_valid: bool,
    notes_valid: bool,
    defaults: Defaults,
    notes: Vec<Note>,
    diagnostics: Diagnostics,
}

impl ParseBuilder {
    fn new() -> Self {
        Self::default()
    }

    fn run(mut self, rtttl: &str) -> Self {
        log::debug!("parsing RTTTL '{}'", rtttl);

        let parts: Vec<&str> = rtttl.split(':').collect();
        let [name, defaults, notes] = parts.as_slice() else {
            self.diagnostics.add(DiagnosticMark::error(
                RtttlPart::Input,
                "part_count",
                format!(
                    "expected 3 parts separated by ':', found {}",
                    parts.len()
                ),
            ));
            return self;
        };

        self.name = name.to_string();
        self.defaults_str = defaults.to_string();
        self.notes_str = notes.to_string();

        self.name_valid = validate_name(name, &mut self.diagnostics);

        let outcome = validate_defaults(defaults, &mut self.diagnostics);
        self.defaults_valid = outcome.valid;
        self.defaults = outcome.defaults;

        let outcome = validate_notes(notes, self.defaults, &mut self.diagnostics);
        self.notes_valid = outcome.valid;
        self.notes = outcome.notes;

        log::info!(
            "parsed '{}': {} notes, {} diagnostics",
            self.name,
            self.notes.len(),
            self.diagnostics.len()
        );
        self
    }

    fn finish(self) -> ParseResult {
        ParseResult {
            name: self.name,
            defaults_str: self.defaults_str,
            notes_str: self.notes_str,
            name_valid: self.name_valid,
            defaults_valid: self.defaults_valid,
            notes_valid: self.notes_valid,
            defaults: self.defaults,
            notes: self.notes,
            diagnostics: self.diagnostics,
        }
    }
}

/// Outcome of parsing one RTTTL string
#[derive(Clone, Debug)]
pub struct ParseResult {
    name: String,
    defaults_str: String,
    notes_str: String,
    name_valid: bool,
    defaults_valid: bool,
    notes_valid: bool,
    defaults: Defaults,
    notes: Vec<Note>,
    diagnostics: Diagnostics,
}

impl ParseResult {
    pub fn parse(rtttl: &str) -> Self {
        parse(rtttl)
    }

    /// Raw name part
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw defaults part
    pub fn defaults_str(&self) -> &str {
        &self.defaults_str
    }

    /// Raw notes part
    pub fn notes_str(&self) -> &str {
        &self.notes_str
    }

    pub fn is_name_valid(&self) -> bool {
        self.name_valid
    }

    pub fn is_defaults_valid(&self) -> bool {
        self.defaults_valid
    }

    pub fn is_notes_valid(&self) -> bool {
        self.notes_valid
    }

    /// All three parts passed strict validation
    pub fn is_valid(&self) -> bool {
        self.name_valid && self.defaults_valid && self.notes_valid
    }

    /// Effective defaults after applying the defaults part
    pub fn defaults(&self) -> Defaults {
        self.defaults
    }

    pub fn bpm(&self) -> u32 {
        self.defaults.bpm
    }

    pub fn default_duration(&self) -> u32 {
        self.defaults.duration
    }

    pub fn default_octave(&self) -> u32 {
        self.defaults.octave
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.diagnostics.messages(DiagnosticSeverity::Error)
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.diagnostics.messages(DiagnosticSeverity::Warning)
    }

    /// Errors and warnings interleaved in the order they were found
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Rebuild an RTTTL string from the parsed parts
    pub fn to_rtttl(&self) -> String {
        renderers::canonical::to_rtttl(self)
    }

    /// Human-readable dump of parts, defaults, notes and diagnostics
    pub fn dump(&self) -> String {
        renderers::dump::dump(self)
    }

    /// Serializable summary of this result
    pub fn report(&self) -> ParseReport<'_> {
        ParseReport {
            name: &self.name,
            defaults_str: &self.defaults_str,
            notes_str: &self.notes_str,
            name_valid: self.name_valid,
            defaults_valid: self.defaults_valid,
            notes_valid: self.notes_valid,
            defaults: self.defaults,
            notes: &self.notes,
            errors: self.errors(),
            warnings: self.warnings(),
            diagnostics: &self.diagnostics.marks,
            canonical: self.to_rtttl(),
        }
    }

    pub fn to_json(&self) -> Result<String, RtttlError> {
        Ok(serde_json::to_string_pretty(&self.report())?)
    }
}

impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rtttl())
    }
}

/// Serializable view of a `ParseResult`
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ParseReport<'a> {
    pub name: &'a str,
    pub defaults_str: &'a str,
    pub notes_str: &'a str,
    pub name_valid: bool,
    pub defaults_valid: bool,
    pub notes_valid: bool,
    pub defaults: Defaults,
    pub notes: &'a [Note],
    pub errors: Vec<&'a str>,
    pub warnings: Vec<&'a str>,
    pub diagnostics: &'a [DiagnosticMark],
    pub canonical: String,
}
