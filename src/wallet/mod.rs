//! High-level wallet combining key management, explorer lookups, and the
//! transaction handshake.
//!
//! # Responsibilities
//! - Build the three supported intents (coin, vBTC, domain purchase)
//! - Run the domain-purchase gates against the explorer
//! - Serialize submissions per sender through [`AddressSequencer`]

pub mod domain;

use std::sync::Arc;

use crate::client::address::{AddressApi, AddressApiClient};
use crate::client::ledger::{LedgerApi, RawTransactionApiClient};
use crate::config::SdkConfig;
use crate::error::{SdkError, SdkResult, WalletError};
use crate::keypair::{is_valid_address, KeypairService};
use crate::transaction::{AddressSequencer, RawTransactionService, TransactionIntent};
use crate::types::{AddressDetails, Keypair, Network};

pub use domain::{clean_vfx_domain, domain_without_suffix, is_valid_vfx_domain};

/// Wallet entry point.
#[derive(Clone)]
pub struct VfxWallet {
    keys: KeypairService,
    addresses: Arc<dyn AddressApi>,
    transactions: RawTransactionService,
    sequencer: AddressSequencer,
}

impl VfxWallet {
    /// Wallet talking to the HTTP APIs described by `config`.
    pub fn new(config: &SdkConfig) -> SdkResult<Self> {
        let ledger = Arc::new(RawTransactionApiClient::new(config)?);
        let addresses = Arc::new(AddressApiClient::new(config)?);
        tracing::info!(
            network = %config.network,
            api = %config.api_base_url(),
            dry_run = config.transactions.dry_run,
            "Wallet initialized"
        );
        Ok(Self::with_clients(
            config.network,
            ledger,
            addresses,
            config.transactions.dry_run,
        ))
    }

    /// Wallet over caller-supplied API implementations.
    pub fn with_clients(
        network: Network,
        ledger: Arc<dyn LedgerApi>,
        addresses: Arc<dyn AddressApi>,
        dry_run: bool,
    ) -> Self {
        Self {
            keys: KeypairService::new(network),
            addresses,
            transactions: RawTransactionService::new(ledger, dry_run),
            sequencer: AddressSequencer::new(),
        }
    }

    pub fn network(&self) -> Network {
        self.keys.network()
    }

    /// Key derivation and signing for this wallet's network.
    pub fn keys(&self) -> &KeypairService {
        &self.keys
    }

    pub async fn get_address_details(&self, address: &str) -> SdkResult<Option<AddressDetails>> {
        self.addresses.get_address_details(address).await
    }

    pub async fn domain_available(&self, domain: &str) -> SdkResult<bool> {
        self.addresses.domain_available(domain).await
    }

    pub async fn lookup_domain(&self, domain: &str) -> SdkResult<Option<String>> {
        self.addresses.lookup_domain(domain).await
    }

    /// Transfer `amount` to `to_address`. Returns the transaction hash.
    pub async fn send_coin(
        &self,
        keypair: &Keypair,
        to_address: &str,
        amount: f64,
    ) -> Result<String, WalletError> {
        self.check_destination(to_address)?;
        let intent = TransactionIntent::transfer(to_address, amount)?;

        let _guard = self.sequencer.lock(&keypair.address).await;
        Ok(self.transactions.process(keypair, &intent).await?)
    }

    /// Transfer `amount` of the tokenized coin `contract_uid`.
    pub async fn send_vbtc(
        &self,
        keypair: &Keypair,
        to_address: &str,
        contract_uid: &str,
        amount: f64,
    ) -> Result<String, WalletError> {
        self.check_destination(to_address)?;
        let intent = TransactionIntent::tokenized_transfer(to_address, contract_uid, amount)?;

        let _guard = self.sequencer.lock(&keypair.address).await;
        Ok(self.transactions.process(keypair, &intent).await?)
    }

    /// Buy `domain` for the sender.
    ///
    /// Fails with a validation error if the domain is malformed, the sender
    /// already owns a domain, or the domain is taken.
    pub async fn buy_vfx_domain(
        &self,
        keypair: &Keypair,
        domain: &str,
    ) -> Result<String, WalletError> {
        let domain = clean_vfx_domain(domain);
        if !is_valid_vfx_domain(&domain) {
            return Err(SdkError::Validation(format!("Invalid vfx domain: {}", domain)).into());
        }
        let intent = TransactionIntent::domain_purchase(domain_without_suffix(&domain))?;

        let _guard = self.sequencer.lock(&keypair.address).await;

        if let Some(existing) = self
            .addresses
            .get_address_details(&keypair.address)
            .await?
            .and_then(|details| details.adnr)
        {
            return Err(SdkError::Validation(format!(
                "Address already has a domain: {}",
                existing
            ))
            .into());
        }

        if !self.addresses.domain_available(&domain).await? {
            return Err(SdkError::Validation(format!("Domain already exists: {}", domain)).into());
        }

        tracing::debug!(domain = %domain, address = %keypair.address, "Domain purchase gates passed");
        Ok(self.transactions.process(keypair, &intent).await?)
    }

    fn check_destination(&self, to_address: &str) -> SdkResult<()> {
        if !is_valid_address(to_address, self.network()) {
            return Err(SdkError::Validation(format!(
                "Invalid {} address: {}",
                self.network(),
                to_address
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for VfxWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VfxWallet")
            .field("network", &self.network())
            .field("transactions", &self.transactions)
            .finish_non_exhaustive()
    }
}
