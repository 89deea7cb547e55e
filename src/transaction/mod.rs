//! Raw transaction handshake.
//!
//! # Data Flow
//! ```text
//! TransactionIntent ──► timestamp ──► nonce ──► draft ──► fee ──► hash
//!                                                                   │
//!        hash ◄── send (skipped in dry run) ◄── verify ◄── validate ◄── sign
//! ```
//!
//! Every arrow after the draft is one ledger round trip; each request body
//! depends on the previous response, so nothing runs in parallel.
//! [`AddressSequencer`] serializes runs per sender so two submissions
//! never race for the same nonce.

pub mod draft;
pub mod intent;
pub mod sequencer;
pub mod service;

pub use draft::{TransactionDraft, TransactionEnvelope};
pub use intent::TransactionIntent;
pub use sequencer::AddressSequencer;
pub use service::RawTransactionService;
