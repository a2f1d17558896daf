//! RTTTL Parser WASM Module
//!
//! Parses and validates RTTTL (Ring Tone Text Transfer Language) strings
//! of the form `name:defaults:notes`, producing resolved notes plus the
//! errors and warnings found along the way.

pub mod api;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod parse;
pub mod renderers;

// Re-export commonly used types
pub use diagnostics::{DiagnosticMark, DiagnosticSeverity, Diagnostics, RtttlPart};
pub use error::RtttlError;
pub use models::*;
pub use parse::{
    is_valid_bpm, is_valid_duration, is_valid_octave, nearest_bpm, nearest_duration,
    nearest_octave, parse, ParseReport, ParseResult, MAX_DOTS, MAX_NAME_LEN, NAME_HARD_LIMIT,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        api::helpers::log_warn("logger already initialized");
    }

    log::info!("RTTTL parser WASM module initialized");
}
