//! WASM API for the RTTTL parser
//!
//! Each call parses its argument from scratch; no state is kept between
//! calls.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{expect_string, serialize, to_js_error};
use crate::parse::{self, ParseResult};
use crate::{wasm_info, wasm_log, wasm_warn};

fn parse_js(input: &JsValue, context: &str) -> Result<ParseResult, JsValue> {
    let rtttl = expect_string(input, context)?;
    wasm_log!("{} called ({} chars)", context, rtttl.len());

    let result = parse::parse(&rtttl);
    if !result.errors().is_empty() {
        wasm_warn!("{}: {} errors in '{}'", context, result.errors().len(), result.name());
    }
    Ok(result)
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse a ringtone and return the full report as a JS object
///
/// # Returns
/// `{ name, defaultsStr, notesStr, nameValid, defaultsValid, notesValid,
///    defaults, notes, errors, warnings, diagnostics, canonical }`
#[wasm_bindgen(js_name = parseRtttl)]
pub fn parse_rtttl(input: JsValue) -> Result<JsValue, JsValue> {
    let result = parse_js(&input, "parseRtttl")?;
    serialize(&result.report(), "parseRtttl")
}

/// Parse a ringtone and return the report as pretty-printed JSON
#[wasm_bindgen(js_name = parseRtttlJson)]
pub fn parse_rtttl_json(input: JsValue) -> Result<String, JsValue> {
    let result = parse_js(&input, "parseRtttlJson")?;
    let json = result.to_json().map_err(|e| to_js_error(&e))?;
    wasm_info!("parseRtttlJson: {} bytes", json.len());
    Ok(json)
}

/// Canonical reconstruction of a ringtone
#[wasm_bindgen(js_name = canonicalRtttl)]
pub fn canonical_rtttl(input: JsValue) -> Result<String, JsValue> {
    Ok(parse_js(&input, "canonicalRtttl")?.to_rtttl())
}

/// Text dump of a parsed ringtone, for debugging
#[wasm_bindgen(js_name = dumpRtttl)]
pub fn dump_rtttl(input: JsValue) -> Result<String, JsValue> {
    Ok(parse_js(&input, "dumpRtttl")?.dump())
}

// ============================================================================
// Lookup Tables
// ============================================================================

#[wasm_bindgen(js_name = isValidBpm)]
pub fn is_valid_bpm(bpm: u32) -> bool {
    parse::is_valid_bpm(bpm)
}

#[wasm_bindgen(js_name = isValidDuration)]
pub fn is_valid_duration(duration: u32) -> bool {
    parse::is_valid_duration(duration)
}

#[wasm_bindgen(js_name = isValidOctave)]
pub fn is_valid_octave(octave: u32) -> bool {
    parse::is_valid_octave(octave)
}

#[wasm_bindgen(js_name = nearestBpm)]
pub fn nearest_bpm(bpm: u32) -> u32 {
    parse::nearest_bpm(bpm)
}

#[wasm_bindgen(js_name = nearestDuration)]
pub fn nearest_duration(duration: u32) -> u32 {
    parse::nearest_duration(duration)
}

#[wasm_bindgen(js_name = nearestOctave)]
pub fn nearest_octave(octave: u32) -> u32 {
    parse::nearest_octave(octave)
}
