//! Diagnostics module for RTTTL validation
//!
//! Every problem found while parsing a ringtone becomes a mark in an ordered
//! list. Parsing keeps going past a mark; only the part-count check stops it.

use serde::Serialize;

/// Severity level for diagnostic marks
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// Likely rejected by a strict RTTTL consumer
    Error,
    /// Deviates from strict syntax but commonly tolerated
    Warning,
}

/// Section of the ringtone a mark refers to
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RtttlPart {
    /// The whole string (part-count check)
    Input,
    Name,
    Defaults,
    Notes,
}

/// A diagnostic mark for one issue in the ringtone
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DiagnosticMark {
    pub part: RtttlPart,
    /// 1-based index of the comma-separated entry within the part, if any
    pub entry: Option<usize>,
    pub severity: DiagnosticSeverity,
    /// Kind identifier (e.g., "invalid_note", "duplicate_default")
    pub kind: String,
    /// Human-readable message
    pub message: String,
}

impl DiagnosticMark {
    /// Create a new diagnostic mark
    pub fn new(
        part: RtttlPart,
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            part,
            entry: None,
            severity,
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn error(part: RtttlPart, kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(part, DiagnosticSeverity::Error, kind, message)
    }

    pub fn warning(part: RtttlPart, kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(part, DiagnosticSeverity::Warning, kind, message)
    }

    /// Attach the entry index the mark refers to
    pub fn at_entry(mut self, entry: usize) -> Self {
        self.entry = Some(entry);
        self
    }
}

/// Ordered collection of diagnostic marks for one ringtone
#[derive(Serialize, Clone, Debug, Default)]
pub struct Diagnostics {
    /// All diagnostic marks, in the order they were found
    pub marks: Vec<DiagnosticMark>,
}

impl Diagnostics {
    /// Create empty diagnostics
    pub fn new() -> Self {
        Self { marks: Vec::new() }
    }

    /// Add a mark, mirroring it to the log
    pub fn add(&mut self, mark: DiagnosticMark) {
        match mark.severity {
            DiagnosticSeverity::Error => log::error!("{:?}: {}", mark.part, mark.message),
            DiagnosticSeverity::Warning => log::warn!("{:?}: {}", mark.part, mark.message),
        }
        self.marks.push(mark);
    }

    /// Extend with multiple marks
    pub fn extend(&mut self, marks: impl IntoIterator<Item = DiagnosticMark>) {
        for mark in marks {
            self.add(mark);
        }
    }

    /// Messages of the given severity, in order
    pub fn messages(&self, severity: DiagnosticSeverity) -> Vec<&str> {
        self.marks
            .iter()
            .filter(|m| m.severity == severity)
            .map(|m| m.message.as_str())
            .collect()
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.marks
            .iter()
            .any(|m| m.severity == DiagnosticSeverity::Error)
    }

    /// Check if there are any diagnostics
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }
}
