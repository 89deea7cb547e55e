//! Identity derivation and signing.
//!
//! # Data Flow
//! ```text
//! random bytes ──────────────┐
//! mnemonic ── BIP-39 seed ───┤
//! email+password ── stretch ─┴─ BIP-32 m/0'/0'/{index}' ─→ PrivateKey
//!                                                            │
//!                              secp256k1 scalar mult ←───────┘
//!                                        │
//!             address.rs (SHA-256 → RIPEMD-160 → version → Base58Check)
//!             signature.rs ("{base64 DER}.{base58 pubkey}")
//! ```
//!
//! # Security Constraints
//! - Key material is zeroized on drop and never logged
//! - Every derived or drawn scalar is range-checked against the curve order

pub mod address;
pub mod derivation;
pub mod private_key;
pub mod service;
pub mod signature;

pub use address::{decode_address, encode_address, is_valid_address};
pub use derivation::{email_password_seed, MnemonicWords};
pub use private_key::{is_valid_private_key, PrivateKey};
pub use service::KeypairService;
pub use signature::{verify_signature, CompositeSignature};
