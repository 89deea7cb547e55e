//! HTTP clients for the ledger API.
//!
//! # Data Flow
//! ```text
//! SdkConfig (base URL, timeouts)
//!     → base.rs (reqwest client, per-call deadline, status/result mapping)
//!     → ledger.rs (`/raw/*` transaction handshake endpoints, `LedgerApi`)
//!     → address.rs (`/addresses/*` read-only lookups, `AddressApi`)
//! ```
//!
//! # Design Decisions
//! - Every call has a deadline; a timeout is a distinct error variant
//! - Handshake POSTs are never retried here (they are not idempotent
//!   with respect to nonce state); retrying is the caller's decision
//! - Both APIs are traits so the pipeline can run against in-memory fakes

pub mod address;
pub mod base;
pub mod ledger;

pub use address::{AddressApi, AddressApiClient};
pub use base::ApiClient;
pub use ledger::{LedgerApi, RawTransactionApiClient};
