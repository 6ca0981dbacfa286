//! Trace codes for correlating failures with log lines.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Length of a generated trace code: 16 bytes in unpadded base64.
pub const TRACE_CODE_LEN: usize = 22;

/// Generate a new trace code from 128 random bits.
///
/// Encoded as URL-safe base64 without padding, so the result contains no
/// `=`, `+` or `/` and can be pasted into URLs and log queries as-is.
pub fn generate() -> String {
    URL_SAFE_NO_PAD.encode(uuid::Uuid::new_v4().as_bytes())
}
