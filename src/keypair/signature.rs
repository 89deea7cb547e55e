//! Composite message signature: `"{base64(DER ECDSA)}.{base58(pubkey x||y)}"`.
//!
//! The signed value is SHA-256 of the UTF-8 message. The public key half is
//! the uncompressed point with its `0x04` prefix stripped (64 bytes).

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::{Signature, VerifyingKey};

use crate::encoding::{base58, sha256};
use crate::error::{SdkError, SdkResult};
use crate::keypair::private_key::PrivateKey;

const SEPARATOR: char = '.';
const RAW_PUBLIC_KEY_LEN: usize = 64;

/// Parsed form of the composite signature string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeSignature {
    /// DER-encoded ECDSA signature.
    pub der: Vec<u8>,
    /// Uncompressed public key without the `0x04` prefix.
    pub public_key: [u8; RAW_PUBLIC_KEY_LEN],
}

impl CompositeSignature {
    /// Sign `message` with `key`.
    pub fn sign(message: &str, key: &PrivateKey) -> SdkResult<Self> {
        let digest = sha256(message.as_bytes());
        let signing_key = key.signing_key()?;
        let signature: Signature = signing_key
            .sign_prehash(&digest)
            .map_err(|e| SdkError::Signing(format!("Signing failed: {}", e)))?;

        let public_key = key.public_key_bytes()?;
        let stripped = match public_key.split_first() {
            Some((&0x04, rest)) => rest,
            _ => public_key.as_slice(),
        };
        let public_key: [u8; RAW_PUBLIC_KEY_LEN] = stripped.try_into().map_err(|_| {
            SdkError::Signing(format!("Unexpected public key length {}", stripped.len()))
        })?;

        Ok(Self {
            der: signature.to_der().as_bytes().to_vec(),
            public_key,
        })
    }

    /// Parse `"{base64}.{base58}"`.
    pub fn parse(s: &str) -> SdkResult<Self> {
        let (sig_part, key_part) = s
            .split_once(SEPARATOR)
            .ok_or_else(|| SdkError::Signing("Missing '.' separator".to_string()))?;
        if key_part.contains(SEPARATOR) {
            return Err(SdkError::Signing("More than one '.' separator".to_string()));
        }

        let der = BASE64
            .decode(sig_part)
            .map_err(|e| SdkError::Signing(format!("Invalid base64 signature: {}", e)))?;
        let key_bytes = base58::decode(key_part)?;
        let public_key: [u8; RAW_PUBLIC_KEY_LEN] =
            key_bytes.as_slice().try_into().map_err(|_| {
                SdkError::Signing(format!(
                    "Public key must be {} bytes, got {}",
                    RAW_PUBLIC_KEY_LEN,
                    key_bytes.len()
                ))
            })?;

        Ok(Self { der, public_key })
    }

    /// Check the signature against SHA-256(`message`) and the embedded key.
    pub fn verify(&self, message: &str) -> SdkResult<()> {
        let mut sec1 = Vec::with_capacity(RAW_PUBLIC_KEY_LEN + 1);
        sec1.push(0x04);
        sec1.extend_from_slice(&self.public_key);
        let verifying_key = VerifyingKey::from_sec1_bytes(&sec1)
            .map_err(|e| SdkError::Signing(format!("Invalid public key: {}", e)))?;
        let signature = Signature::from_der(&self.der)
            .map_err(|e| SdkError::Signing(format!("Invalid DER signature: {}", e)))?;
        verifying_key
            .verify_prehash(&sha256(message.as_bytes()), &signature)
            .map_err(|e| SdkError::Signing(format!("Signature does not verify: {}", e)))
    }
}

impl std::fmt::Display for CompositeSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            BASE64.encode(&self.der),
            SEPARATOR,
            base58::encode(&self.public_key)
        )
    }
}

/// Parse and verify a composite signature string.
pub fn verify_signature(message: &str, signature: &str) -> SdkResult<()> {
    CompositeSignature::parse(signature)?.verify(message)
}
