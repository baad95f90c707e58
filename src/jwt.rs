use base64::{
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
    Engine,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// A JWT split into its three parts, with header and payload decoded to JSON.
///
/// The signature is kept as the raw third segment: it is binary data, not
/// JSON, and this tool does not verify it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedToken {
    pub header: Value,
    pub payload: Value,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("JWT must have 3 parts (header.payload.signature)")]
    MalformedStructure,
    #[error("Invalid JWT")]
    InvalidToken,
}

/// Decode a JWT without verifying it.
///
/// Splits on `.`, base64url-decodes the header and payload segments and
/// parses them as JSON. Header and payload are decoded independently, but
/// every decode failure maps to the same [`DecodeError::InvalidToken`].
pub fn decode(token: &str) -> Result<DecodedToken, DecodeError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(DecodeError::MalformedStructure);
    }

    let header = decode_segment(parts[0])?;
    let payload = decode_segment(parts[1])?;

    Ok(DecodedToken {
        header,
        payload,
        signature: parts[2].to_string(),
    })
}

/// Base64url-decode one segment and parse it as JSON.
///
/// JWT segments are canonically unpadded, but trailing `=` padding is
/// accepted too since tokens copied out of other tools sometimes carry it.
fn decode_segment(segment: &str) -> Result<Value, DecodeError> {
    let bytes = if segment.ends_with('=') {
        URL_SAFE.decode(segment)
    } else {
        URL_SAFE_NO_PAD.decode(segment)
    }
    .map_err(|_| DecodeError::InvalidToken)?;

    serde_json::from_slice(&bytes).map_err(|_| DecodeError::InvalidToken)
}

/// Read a registered time claim (`exp`, `iat`, `nbf`) as Unix seconds.
pub fn time_claim(payload: &Value, name: &str) -> Option<i64> {
    payload.get(name).and_then(Value::as_i64)
}

/// Format a Unix-seconds claim as a UTC timestamp.
pub fn format_timestamp(secs: i64) -> String {
    chrono::DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "invalid timestamp".to_string())
}

/// Expiry status of a payload's `exp` claim relative to the current clock.
pub enum Expiry {
    NoExpiry,
    Expired(i64),
    ValidUntil(i64),
}

pub fn expiry(payload: &Value) -> Expiry {
    match time_claim(payload, "exp") {
        None => Expiry::NoExpiry,
        Some(exp) if exp <= chrono::Utc::now().timestamp() => Expiry::Expired(exp),
        Some(exp) => Expiry::ValidUntil(exp),
    }
}
