//! secp256k1 private key scalar.

use k256::ecdsa::{SigningKey, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use crate::encoding::bytes::{decode_hex, normalize_private_key_hex, PRIVATE_KEY_LEN};
use crate::error::{SdkError, SdkResult};

/// secp256k1 group order, big-endian.
pub const CURVE_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36,
    0x41, 0x41,
];

/// Upper bound on rejection-sampling draws in [`PrivateKey::generate`].
///
/// A uniformly random 32-byte string is rejected with probability ~2^-128,
/// so reaching this bound means the RNG is broken.
pub const MAX_GENERATION_ATTEMPTS: u32 = 1_000_000;

/// `0 < k < n` for the big-endian 32-byte scalar `k`.
pub fn is_valid_private_key(bytes: &[u8]) -> bool {
    bytes.len() == PRIVATE_KEY_LEN
        && bytes.iter().any(|b| *b != 0)
        && bytes < CURVE_ORDER.as_slice()
}

/// A validated secp256k1 private key.
#[derive(Clone)]
pub struct PrivateKey {
    bytes: Zeroizing<[u8; 32]>,
}

impl PrivateKey {
    /// Wrap raw bytes after checking the range invariant.
    pub fn from_bytes(bytes: &[u8]) -> SdkResult<Self> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(SdkError::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_LEN,
                bytes.len()
            )));
        }
        if !is_valid_private_key(bytes) {
            return Err(SdkError::InvalidPrivateKey(
                "scalar is zero or not below the curve order".to_string(),
            ));
        }
        let mut arr = Zeroizing::new([0u8; 32]);
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Parse 64 hex chars, or 66 with the legacy `00` pad.
    pub fn from_hex(key_hex: &str) -> SdkResult<Self> {
        let key_hex = normalize_private_key_hex(key_hex.trim());
        if key_hex.is_empty() {
            return Err(SdkError::InvalidHex("private key hex is empty".to_string()));
        }
        let mut bytes = decode_hex(key_hex)?;
        let key = Self::from_bytes(&bytes);
        bytes.zeroize();
        key
    }

    /// Draw a fresh key from the OS CSPRNG.
    pub fn generate() -> SdkResult<Self> {
        Self::generate_with(&mut rand::rngs::OsRng)
    }

    /// Rejection-sample 32 random bytes until they form a valid scalar.
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> SdkResult<Self> {
        let mut candidate = Zeroizing::new([0u8; 32]);
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            rng.fill_bytes(&mut candidate[..]);
            if is_valid_private_key(&candidate[..]) {
                return Ok(Self { bytes: candidate });
            }
            tracing::debug!(attempt, "Rejected out-of-range private key draw");
        }
        Err(SdkError::InvalidPrivateKey(format!(
            "no valid scalar after {} draws",
            MAX_GENERATION_ATTEMPTS
        )))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// 64-char lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes[..])
    }

    /// 66-char hex with the `00` pad expected by older wallets.
    pub fn to_legacy_hex(&self) -> String {
        format!("00{}", self.to_hex())
    }

    pub(crate) fn signing_key(&self) -> SdkResult<SigningKey> {
        SigningKey::from_slice(&self.bytes[..])
            .map_err(|e| SdkError::InvalidPrivateKey(e.to_string()))
    }

    /// Uncompressed SEC1 public key (65 bytes, `0x04` prefix).
    pub fn public_key_bytes(&self) -> SdkResult<Vec<u8>> {
        let signing_key = self.signing_key()?;
        let verifying_key: &VerifyingKey = signing_key.verifying_key();
        Ok(verifying_key.to_encoded_point(false).as_bytes().to_vec())
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes[..] == other.bytes[..]
    }
}

impl Eq for PrivateKey {}
