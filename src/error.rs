//! Error types for the RTTTL module
//!
//! Parse problems inside a ringtone are reported as diagnostics, not errors.
//! These types cover the few places where a value cannot be produced at all.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RtttlError {
    /// Token is not a pitch letter (C D E F G A B H P ;) with optional sharp
    #[error("unknown pitch '{0}'")]
    UnknownPitch(String),

    /// Report could not be serialized (JSON or JsValue)
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RtttlError {
    fn from(e: serde_json::Error) -> Self {
        RtttlError::Serialization(e.to_string())
    }
}
