//! Models module for the RTTTL parser
//!
//! Value types produced by parsing: pitches, notes and playback defaults.

pub mod note;

// Re-export commonly used types
pub use note::*;
