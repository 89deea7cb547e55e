//! `/raw` transaction handshake endpoints.

use async_trait::async_trait;
use serde::Deserialize;

use crate::client::base::ApiClient;
use crate::config::SdkConfig;
use crate::error::{SdkError, SdkResult};
use crate::transaction::draft::{TransactionDraft, TransactionEnvelope};

const SUCCESS: &str = "Success";

/// The remote authority that prices, hashes, checks, and accepts
/// transactions.
#[async_trait]
pub trait LedgerApi: Send + Sync {
    /// Server-authoritative unix seconds.
    async fn get_timestamp(&self) -> SdkResult<i64>;

    /// Next sequence number for `address`.
    async fn get_nonce(&self, address: &str) -> SdkResult<u64>;

    /// Fee the ledger charges for `draft`.
    async fn get_fee(&self, draft: &TransactionDraft) -> SdkResult<f64>;

    /// Canonical hash the ledger expects to be signed for `draft`.
    async fn get_hash(&self, draft: &TransactionDraft) -> SdkResult<String>;

    async fn validate_signature(
        &self,
        message: &str,
        address: &str,
        signature: &str,
    ) -> SdkResult<bool>;

    /// Semantic check: balance, nonce, well-formedness.
    async fn verify_transaction(&self, draft: &TransactionDraft) -> SdkResult<bool>;

    /// Broadcast. True iff the ledger accepted the transaction.
    async fn send_transaction(&self, draft: &TransactionDraft) -> SdkResult<bool>;
}

/// `{Result, Fee?, Hash?, Message?}` envelope returned by the JSON endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawResponse {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    fee: Option<f64>,
    #[serde(default)]
    hash: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl RawResponse {
    fn is_success(&self) -> bool {
        self.result.as_deref() == Some(SUCCESS)
    }

    fn describe(&self) -> String {
        format!(
            "Result={} Message={}",
            self.result.as_deref().unwrap_or("<none>"),
            self.message.as_deref().unwrap_or("<none>")
        )
    }
}

/// reqwest-backed [`LedgerApi`].
#[derive(Debug, Clone)]
pub struct RawTransactionApiClient {
    api: ApiClient,
}

impl RawTransactionApiClient {
    pub fn new(config: &SdkConfig) -> SdkResult<Self> {
        Ok(Self {
            api: ApiClient::new(config, "/raw")?,
        })
    }

    async fn post_draft(
        &self,
        endpoint: &'static str,
        path: &str,
        draft: &TransactionDraft,
    ) -> SdkResult<RawResponse> {
        self.api
            .post_json(endpoint, path, &TransactionEnvelope { transaction: draft })
            .await
    }
}

fn parse_number<T: std::str::FromStr>(endpoint: &str, text: &str) -> SdkResult<T> {
    text.trim().parse().map_err(|_| {
        SdkError::Protocol(format!("Unexpected {} response: '{}'", endpoint, text.trim()))
    })
}

#[async_trait]
impl LedgerApi for RawTransactionApiClient {
    async fn get_timestamp(&self) -> SdkResult<i64> {
        let text = self.api.post_text("timestamp", "/timestamp/").await?;
        parse_number("timestamp", &text)
    }

    async fn get_nonce(&self, address: &str) -> SdkResult<u64> {
        let text = self
            .api
            .post_text("nonce", &format!("/nonce/{}/", address))
            .await?;
        parse_number("nonce", &text)
    }

    async fn get_fee(&self, draft: &TransactionDraft) -> SdkResult<f64> {
        let response = self.post_draft("fee", "/fee/", draft).await?;
        match (response.is_success(), response.fee) {
            (true, Some(fee)) => Ok(fee),
            _ => Err(SdkError::Protocol(format!(
                "Unexpected fee result: {}",
                response.describe()
            ))),
        }
    }

    async fn get_hash(&self, draft: &TransactionDraft) -> SdkResult<String> {
        let response = self.post_draft("hash", "/hash/", draft).await?;
        match (response.is_success(), response.hash) {
            (true, Some(hash)) if !hash.is_empty() => Ok(hash),
            (_, hash) => Err(SdkError::Protocol(format!(
                "Unexpected hash result: Result={} Hash={}",
                response.result.as_deref().unwrap_or("<none>"),
                hash.as_deref().unwrap_or("<none>")
            ))),
        }
    }

    async fn validate_signature(
        &self,
        message: &str,
        address: &str,
        signature: &str,
    ) -> SdkResult<bool> {
        self.api
            .post_bool(
                "validate_signature",
                &format!("/validate-signature/{}/{}/{}/", message, address, signature),
            )
            .await
    }

    async fn verify_transaction(&self, draft: &TransactionDraft) -> SdkResult<bool> {
        let response = self.post_draft("verify", "/verify/", draft).await?;
        if !response.is_success() {
            tracing::debug!(detail = %response.describe(), "Transaction verification rejected");
        }
        Ok(response.is_success())
    }

    async fn send_transaction(&self, draft: &TransactionDraft) -> SdkResult<bool> {
        let response = self.post_draft("send", "/send/", draft).await?;
        if !response.is_success() {
            tracing::debug!(detail = %response.describe(), "Transaction broadcast rejected");
        }
        Ok(response.is_success())
    }
}
