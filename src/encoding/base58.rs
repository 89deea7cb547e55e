//! Base58 and Base58Check.
//!
//! Bitcoin alphabet; leading zero bytes encode as leading `1`s.

use crate::encoding::hash::sha256d;
use crate::error::{SdkError, SdkResult};

/// Checksum length appended by [`check_encode`].
pub const CHECKSUM_LEN: usize = 4;

/// Encode bytes as Base58.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_string()
}

/// Decode a Base58 string.
pub fn decode(s: &str) -> SdkResult<Vec<u8>> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| SdkError::Validation(format!("Invalid base58: {}", e)))
}

/// `encode(data || sha256d(data)[..4])`.
pub fn check_encode(data: &[u8]) -> String {
    let checksum = sha256d(data);
    let mut payload = Vec::with_capacity(data.len() + CHECKSUM_LEN);
    payload.extend_from_slice(data);
    payload.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    encode(&payload)
}

/// Decode a Base58Check string and verify its checksum. Returns the payload.
pub fn check_decode(s: &str) -> SdkResult<Vec<u8>> {
    let decoded = decode(s)?;
    if decoded.len() < CHECKSUM_LEN {
        return Err(SdkError::Validation(
            "Base58Check data too short for checksum".to_string(),
        ));
    }
    let (payload, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if sha256d(payload)[..CHECKSUM_LEN] != *checksum {
        return Err(SdkError::Validation("Base58Check checksum mismatch".to_string()));
    }
    Ok(payload.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_zeros() {
        assert_eq!(encode(&[0, 0, 1]), "112");
        assert_eq!(decode("112").unwrap(), vec![0, 0, 1]);
    }

    #[test]
    fn test_check_roundtrip() {
        let payload = [0x3cu8; 21];
        let encoded = check_encode(&payload);
        assert_eq!(check_decode(&encoded).unwrap(), payload.to_vec());
    }

    #[test]
    fn test_check_decode_detects_corruption() {
        let encoded = check_encode(&[0x89u8; 21]);
        let mut chars: Vec<char> = encoded.chars().collect();
        let last = chars.len() - 1;
        chars[last] = if chars[last] == '2' { '3' } else { '2' };
        let corrupted: String = chars.into_iter().collect();
        assert!(check_decode(&corrupted).is_err());
    }

    #[test]
    fn test_invalid_characters() {
        assert!(decode("0OIl").is_err());
    }
}
