//! Byte-level encoding primitives shared by the keypair and transaction code.
//!
//! # Responsibilities
//! - SHA-256, double SHA-256, RIPEMD-160 and Hash160 digests
//! - Base58 and Base58Check (4-byte double SHA-256 checksum)
//! - Hex parsing of private keys, including the legacy `00`-padded form

pub mod base58;
pub mod bytes;
pub mod hash;

pub use base58::{check_decode, check_encode};
pub use bytes::{decode_hex, normalize_private_key_hex};
pub use hash::{hash160, ripemd160, sha256, sha256_hex, sha256d};
