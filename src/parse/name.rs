//! Name part validation

use crate::diagnostics::{DiagnosticMark, Diagnostics, RtttlPart};

/// Longest name a strict consumer accepts
pub const MAX_NAME_LEN: usize = 10;
/// Longest name tolerated at all; canonical output truncates to this
pub const NAME_HARD_LIMIT: usize = 20;

/// Validate the name part. Returns true only for names of at most
/// `MAX_NAME_LEN` characters; longer names up to `NAME_HARD_LIMIT` get a
/// warning, anything beyond gets an error.
pub fn validate_name(name: &str, diagnostics: &mut Diagnostics) -> bool {
    let len = name.chars().count();
    log::debug!("validating name '{}' ({} chars)", name, len);

    if len <= MAX_NAME_LEN {
        true
    } else if len <= NAME_HARD_LIMIT {
        diagnostics.add(DiagnosticMark::warning(
            RtttlPart::Name,
            "name_too_long",
            format!("name is longer than {} characters ({})", MAX_NAME_LEN, len),
        ));
        false
    } else {
        diagnostics.add(DiagnosticMark::error(
            RtttlPart::Name,
            "name_too_long",
            format!("name is longer than {} characters ({})", NAME_HARD_LIMIT, len),
        ));
        false
    }
}

/// Name as written in canonical output: first `NAME_HARD_LIMIT` characters
pub fn truncate_name(name: &str) -> String {
    name.chars().take(NAME_HARD_LIMIT).collect()
}
