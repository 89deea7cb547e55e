//! Wallet SDK for the VFX account ledger.
//!
//! Key derivation (random, BIP-39 mnemonic, email/password), address and
//! signature encoding, and the raw transaction handshake against the
//! ledger's `/raw` API.
//!
//! ```no_run
//! use vfx_sdk::{Network, SdkConfig, VfxWallet};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let wallet = VfxWallet::new(&SdkConfig::for_network(Network::Testnet))?;
//! let key = wallet.keys().generate_private_key()?;
//! let keypair = wallet.keys().keypair_from_private_key(&key)?;
//! let hash = wallet
//!     .send_coin(&keypair, "xEwT5cfC1y4Rwi8zBvQSKcp7tnFWDer1La", 1.0)
//!     .await?;
//! println!("{}", hash);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod encoding;
pub mod error;
pub mod keypair;
pub mod observability;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use config::schema::SdkConfig;
pub use error::{ErrorKind, PipelineError, PipelineStep, SdkError, SdkResult, WalletError};
pub use keypair::KeypairService;
pub use transaction::RawTransactionService;
pub use types::{AddressDetails, Keypair, Network, TxType};
pub use wallet::VfxWallet;
