//! Parsing module for RTTTL ringtones
//!
//! This module contains the part validators and the entry point that
//! splits a ringtone into name, defaults and notes.

pub mod tables;
pub mod name;
pub mod defaults;
pub mod notes;
pub mod rtttl;

// Re-export commonly used types
pub use tables::{
    is_valid_bpm, is_valid_duration, is_valid_octave, nearest_bpm, nearest_duration,
    nearest_octave,
};
pub use name::{MAX_NAME_LEN, NAME_HARD_LIMIT};
pub use notes::MAX_DOTS;
pub use rtttl::{parse, ParseReport, ParseResult};

/// Split a part on commas. Trailing empty entries are dropped, so `c,d,`
/// has two entries and `,` has none.
pub(crate) fn split_entries(part: &str) -> Vec<&str> {
    let mut entries: Vec<&str> = part.split(',').collect();
    while entries.last().is_some_and(|e| e.is_empty()) {
        entries.pop();
    }
    entries
}
