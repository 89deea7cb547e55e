//! Hex helpers for key material.

use crate::error::{SdkError, SdkResult};

/// Length of a private key scalar in bytes.
pub const PRIVATE_KEY_LEN: usize = 32;

/// Strip the legacy `00` pad from a 66-char private key hex string.
///
/// Some wallets emit keys as 33 bytes with a leading zero byte so that a
/// signed big-integer parser reads them as positive. Any other input is
/// returned unchanged.
pub fn normalize_private_key_hex(key_hex: &str) -> &str {
    let key_hex = key_hex.strip_prefix("0x").unwrap_or(key_hex);
    if key_hex.len() == 2 * (PRIVATE_KEY_LEN + 1) && key_hex.starts_with("00") {
        &key_hex[2..]
    } else {
        key_hex
    }
}

/// Decode a hex string (case-insensitive).
pub fn decode_hex(s: &str) -> SdkResult<Vec<u8>> {
    if s.len() % 2 != 0 {
        return Err(SdkError::InvalidHex(
            "Must have an even number of hex digits".to_string(),
        ));
    }
    Ok(hex::decode(s)?)
}
