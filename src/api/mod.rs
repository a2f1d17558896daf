//! RTTTL WASM API
//!
//! JavaScript-facing entry points for parsing and validating ringtones.
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros and serialization helpers
//! - `core`: parse/validate/lookup functions exported to JavaScript

pub mod helpers;
pub mod core;

pub use self::core::*;
