//! Read-only account and domain queries under `/addresses`.

use async_trait::async_trait;
use serde::Deserialize;

use crate::client::base::ApiClient;
use crate::config::SdkConfig;
use crate::error::SdkResult;
use crate::types::AddressDetails;

/// Explorer lookups used as pre-condition gates.
#[async_trait]
pub trait AddressApi: Send + Sync {
    /// Account state, or `None` if the explorer has no record.
    async fn get_address_details(&self, address: &str) -> SdkResult<Option<AddressDetails>>;

    /// True iff no record exists for the fully-qualified `domain`.
    async fn domain_available(&self, domain: &str) -> SdkResult<bool>;

    /// Address bound to `domain`, if any.
    async fn lookup_domain(&self, domain: &str) -> SdkResult<Option<String>>;
}

#[derive(Debug, Deserialize)]
struct DomainRecord {
    #[serde(default)]
    address: Option<String>,
}

/// reqwest-backed [`AddressApi`].
#[derive(Debug, Clone)]
pub struct AddressApiClient {
    api: ApiClient,
}

impl AddressApiClient {
    pub fn new(config: &SdkConfig) -> SdkResult<Self> {
        Ok(Self {
            api: ApiClient::new(config, "/addresses")?,
        })
    }

    async fn domain_record(&self, domain: &str) -> SdkResult<Option<DomainRecord>> {
        self.api
            .get_json_opt("domain_lookup", &format!("/adnr/{}/", domain))
            .await
    }
}

#[async_trait]
impl AddressApi for AddressApiClient {
    async fn get_address_details(&self, address: &str) -> SdkResult<Option<AddressDetails>> {
        self.api
            .get_json_opt("address_details", &format!("/{}", address))
            .await
    }

    async fn domain_available(&self, domain: &str) -> SdkResult<bool> {
        Ok(self.domain_record(domain).await?.is_none())
    }

    async fn lookup_domain(&self, domain: &str) -> SdkResult<Option<String>> {
        Ok(self
            .domain_record(domain)
            .await?
            .and_then(|record| record.address)
            .filter(|address| !address.is_empty()))
    }
}
