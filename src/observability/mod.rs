//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! keypair / client / transaction produce:
//!     → logging.rs (structured tracing events, one span per pipeline run)
//!     → metrics.rs (remote call counters and latencies, pipeline outcomes)
//!
//! Consumers:
//!     → whatever subscriber / metrics recorder the host application installs
//! ```
//!
//! # Design Decisions
//! - The library never installs a global subscriber or recorder on its own
//! - Secrets (keys, mnemonics, passwords) never reach a log field

pub mod logging;
pub mod metrics;
