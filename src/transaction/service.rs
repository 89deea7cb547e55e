//! Ordered handshake that turns an intent into a signed, ledger-verified
//! transaction.
//!
//! # Design Decisions
//! - Timestamp and nonce are fetched fresh on every run, never cached.
//! - A `false` from validate/verify/send aborts with [`ErrorKind::Protocol`].
//! - Failures carry the [`PipelineStep`] that raised them.
//! - No step is retried here. Retrying means calling `process` again.

use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use crate::client::ledger::{LedgerApi, RawTransactionApiClient};
use crate::config::SdkConfig;
use crate::error::{ErrorKind, PipelineError, PipelineStep, SdkError};
use crate::keypair::{CompositeSignature, PrivateKey};
use crate::observability::metrics;
use crate::transaction::draft::TransactionDraft;
use crate::transaction::intent::TransactionIntent;
use crate::types::Keypair;

/// Drives [`LedgerApi`] through the handshake for one transaction at a time.
#[derive(Clone)]
pub struct RawTransactionService {
    ledger: Arc<dyn LedgerApi>,
    dry_run: bool,
}

impl RawTransactionService {
    pub fn new(ledger: Arc<dyn LedgerApi>, dry_run: bool) -> Self {
        Self { ledger, dry_run }
    }

    /// Service backed by the HTTP ledger client described by `config`.
    pub fn from_config(config: &SdkConfig) -> Result<Self, SdkError> {
        let ledger = RawTransactionApiClient::new(config)?;
        Ok(Self::new(Arc::new(ledger), config.transactions.dry_run))
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Run the handshake for `intent` signed by `keypair`.
    ///
    /// Returns the ledger's transaction hash. In dry-run mode the hash is
    /// returned after verification and nothing is broadcast.
    pub async fn process(
        &self,
        keypair: &Keypair,
        intent: &TransactionIntent,
    ) -> Result<String, PipelineError> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "transaction",
            run_id = %run_id,
            from = %keypair.address,
            dry_run = self.dry_run
        );

        let result = self.run(keypair, intent).instrument(span).await;

        match &result {
            Ok(hash) => {
                tracing::info!(run_id = %run_id, hash = %hash, dry_run = self.dry_run, "Transaction accepted");
                metrics::record_pipeline_run(None, self.dry_run);
            }
            Err(e) => {
                tracing::warn!(
                    run_id = %run_id,
                    step = %e.step,
                    kind = %e.kind,
                    detail = %e.detail,
                    "Transaction pipeline aborted"
                );
                metrics::record_pipeline_run(Some(e.step), self.dry_run);
            }
        }
        result
    }

    async fn run(
        &self,
        keypair: &Keypair,
        intent: &TransactionIntent,
    ) -> Result<String, PipelineError> {
        let from = keypair.address.as_str();

        let timestamp = self
            .ledger
            .get_timestamp()
            .await
            .map_err(|e| PipelineError::from_sdk(PipelineStep::Timestamp, e))?;

        let nonce = self
            .ledger
            .get_nonce(from)
            .await
            .map_err(|e| PipelineError::from_sdk(PipelineStep::Nonce, e))?;
        tracing::debug!(timestamp, nonce, "Fetched timestamp and nonce");

        let mut draft = TransactionDraft::new(from, intent, timestamp, nonce);

        let fee = self
            .ledger
            .get_fee(&draft)
            .await
            .map_err(|e| PipelineError::from_sdk(PipelineStep::Fee, e))?;
        if !fee.is_finite() || fee < 0.0 {
            return Err(PipelineError::new(
                PipelineStep::Fee,
                ErrorKind::Protocol,
                format!("Ledger quoted an invalid fee: {}", fee),
            ));
        }
        draft.fee = fee;

        let hash = self
            .ledger
            .get_hash(&draft)
            .await
            .map_err(|e| PipelineError::from_sdk(PipelineStep::Hash, e))?;
        tracing::debug!(fee, hash = %hash, "Draft priced and hashed");
        draft.hash = hash.clone();

        let signature = PrivateKey::from_hex(&keypair.private_key)
            .and_then(|key| CompositeSignature::sign(&hash, &key))
            .map_err(|e| PipelineError::from_sdk(PipelineStep::Sign, e))?
            .to_string();

        let valid = self
            .ledger
            .validate_signature(&hash, from, &signature)
            .await
            .map_err(|e| PipelineError::from_sdk(PipelineStep::ValidateSignature, e))?;
        if !valid {
            return Err(PipelineError::new(
                PipelineStep::ValidateSignature,
                ErrorKind::Protocol,
                "Ledger rejected the signature",
            ));
        }
        draft.signature = signature;

        let verified = self
            .ledger
            .verify_transaction(&draft)
            .await
            .map_err(|e| PipelineError::from_sdk(PipelineStep::Verify, e))?;
        if !verified {
            return Err(PipelineError::new(
                PipelineStep::Verify,
                ErrorKind::Protocol,
                "Ledger rejected the transaction",
            ));
        }

        if self.dry_run {
            tracing::info!(hash = %hash, "Dry run, transaction not broadcast");
            return Ok(hash);
        }

        let sent = self
            .ledger
            .send_transaction(&draft)
            .await
            .map_err(|e| PipelineError::from_sdk(PipelineStep::Send, e))?;
        if !sent {
            return Err(PipelineError::new(
                PipelineStep::Send,
                ErrorKind::Protocol,
                "Ledger did not accept the broadcast",
            ));
        }

        Ok(hash)
    }
}

impl std::fmt::Debug for RawTransactionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawTransactionService")
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}
