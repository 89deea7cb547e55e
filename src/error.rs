//! Error types shared by every subsystem.
//!
//! # Taxonomy
//! ```text
//! Validation     → malformed address / domain / key, rejected before any network call
//! RemoteRequest  → transport failure, non-success HTTP status, per-call timeout
//! Protocol       → ledger answered but rejected the signature or transaction
//! Unknown        → anything else
//! ```
//!
//! Derivation and encoding code returns `SdkError` directly so callers can
//! match on the variant. The transaction pipeline wraps the same errors in a
//! [`PipelineError`] tagged with the step that failed.

use std::fmt;

use thiserror::Error;

/// Coarse error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    RemoteRequest,
    Protocol,
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::RemoteRequest => "remote_request",
            ErrorKind::Protocol => "protocol",
            ErrorKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by key derivation, encoding and the ledger clients.
#[derive(Debug, Error)]
pub enum SdkError {
    /// Input rejected before any network call (address, domain, amount).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Hex input could not be decoded.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Scalar is zero, out of range, or has the wrong length.
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// Mnemonic phrase is malformed or has an unsupported word count.
    #[error("Mnemonic error: {0}")]
    Mnemonic(String),

    /// BIP-32 derivation failed.
    #[error("Key derivation failed: {0}")]
    Derivation(String),

    /// ECDSA signing or signature parsing failed.
    #[error("Signing error: {0}")]
    Signing(String),

    /// Transport failure or non-success HTTP status.
    #[error("Remote request failed: {0}")]
    RemoteRequest(String),

    /// A remote call exceeded its deadline.
    #[error("Remote request timed out after {0} seconds")]
    Timeout(u64),

    /// The ledger answered but rejected or garbled the exchange.
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl SdkError {
    /// Classify this error into the public taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SdkError::Validation(_)
            | SdkError::InvalidHex(_)
            | SdkError::InvalidPrivateKey(_)
            | SdkError::Mnemonic(_) => ErrorKind::Validation,
            SdkError::RemoteRequest(_) | SdkError::Timeout(_) => ErrorKind::RemoteRequest,
            SdkError::Protocol(_) => ErrorKind::Protocol,
            SdkError::Derivation(_) | SdkError::Signing(_) | SdkError::Unknown(_) => {
                ErrorKind::Unknown
            }
        }
    }
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SdkError::Protocol(format!("Undecodable response body: {}", e))
        } else {
            SdkError::RemoteRequest(e.to_string())
        }
    }
}

impl From<hex::FromHexError> for SdkError {
    fn from(e: hex::FromHexError) -> Self {
        SdkError::InvalidHex(e.to_string())
    }
}

/// Result type for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

/// One stage of the raw transaction handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineStep {
    Timestamp,
    Nonce,
    Fee,
    Hash,
    Sign,
    ValidateSignature,
    Verify,
    Send,
}

impl PipelineStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStep::Timestamp => "timestamp",
            PipelineStep::Nonce => "nonce",
            PipelineStep::Fee => "fee",
            PipelineStep::Hash => "hash",
            PipelineStep::Sign => "sign",
            PipelineStep::ValidateSignature => "validate_signature",
            PipelineStep::Verify => "verify",
            PipelineStep::Send => "send",
        }
    }
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transaction pipeline failure, tagged with the step that aborted it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Transaction failed at {step} ({kind}): {detail}")]
pub struct PipelineError {
    pub step: PipelineStep,
    pub kind: ErrorKind,
    pub detail: String,
}

impl PipelineError {
    pub fn new(step: PipelineStep, kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self {
            step,
            kind,
            detail: detail.into(),
        }
    }

    /// Wrap an [`SdkError`] raised while running `step`.
    pub fn from_sdk(step: PipelineStep, err: SdkError) -> Self {
        Self::new(step, err.kind(), err.to_string())
    }
}

/// Failure of a wallet-level operation: either rejected before the
/// handshake started, or aborted inside it.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error(transparent)]
    Precondition(#[from] SdkError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

impl WalletError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WalletError::Precondition(e) => e.kind(),
            WalletError::Pipeline(e) => e.kind,
        }
    }

    /// Handshake step that failed, if the handshake was entered.
    pub fn step(&self) -> Option<PipelineStep> {
        match self {
            WalletError::Precondition(_) => None,
            WalletError::Pipeline(e) => Some(e.step),
        }
    }
}
