use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::Result;

/// Lowercase hex encoding, used for the `iv` query parameter and the user's key.
pub fn bytes_to_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode a hex string. Odd lengths and non-hex characters are rejected.
pub fn hex_to_bytes(data: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(data)?)
}

/// Base64-encode and swap the characters that need escaping in a URL.
pub fn url_safe_encode(data: &[u8]) -> String {
    clean(&BASE64.encode(data))
}

/// Replace `+`, `/` and `=` with `-`, `.` and `_`.
///
/// This is not the RFC 4648 URL-safe alphabet; the relay reverses exactly
/// this substitution before decoding.
pub fn clean(encoded: &str) -> String {
    encoded
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '.',
            '=' => '_',
            other => other,
        })
        .collect()
}
