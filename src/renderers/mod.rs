//! Renderers module for RTTTL results
//!
//! Turns a parsed ringtone back into text: the canonical RTTTL string
//! and a human-readable dump for debugging.

pub mod canonical;
pub mod dump;

// Re-export commonly used functions
pub use canonical::to_rtttl;
pub use dump::dump;
