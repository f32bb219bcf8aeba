//! Transport encoding of a submitted snapshot.
//!
//! The snapshot is serialized to JSON and the UTF-8 bytes are base64 encoded
//! with the standard padded alphabet. The result is printable ASCII and
//! decodes back to the same snapshot.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

use crate::models::FormSnapshot;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("snapshot serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("payload is not a form snapshot: {0}")]
    Deserialize(#[source] serde_json::Error),
}

pub fn encode_snapshot(snapshot: &FormSnapshot) -> Result<String, CodecError> {
    let json = serde_json::to_string(snapshot).map_err(CodecError::Serialize)?;
    Ok(STANDARD.encode(json.as_bytes()))
}

pub fn decode_snapshot(encoded: &str) -> Result<FormSnapshot, CodecError> {
    let bytes = STANDARD.decode(encoded.trim())?;
    let json = String::from_utf8(bytes)?;
    serde_json::from_str(&json).map_err(CodecError::Deserialize)
}
