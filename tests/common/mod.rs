//! Shared utilities for integration tests: a scripted ledger and explorer
//! mounted on a wiremock server.

use std::sync::atomic::{AtomicU64, Ordering};

use vfx_sdk::{Network, SdkConfig};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Testnet sender. Address `xPUHbZww91eKwrGWg3FC6FVaB1a8fWXwzj`.
#[allow(dead_code)]
pub const SENDER_KEY: &str = "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d";

#[allow(dead_code)]
pub const SENDER_ADDRESS: &str = "xPUHbZww91eKwrGWg3FC6FVaB1a8fWXwzj";

#[allow(dead_code)]
pub const RECIPIENT: &str = "xEwT5cfC1y4Rwi8zBvQSKcp7tnFWDer1La";

/// Responses the scripted ledger gives at each step.
#[derive(Debug, Clone)]
pub struct LedgerScript {
    pub timestamp: i64,
    pub first_nonce: u64,
    pub fee: f64,
    pub hash: String,
    pub signature_valid: bool,
    pub verify_result: &'static str,
    pub send_result: &'static str,
}

impl Default for LedgerScript {
    fn default() -> Self {
        Self {
            timestamp: 1_700_000_000,
            first_nonce: 1,
            fee: 0.00001,
            hash: "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08".to_string(),
            signature_valid: true,
            verify_result: "Success",
            send_result: "Success",
        }
    }
}

/// Hands out an increasing nonce on every call.
struct NonceCounter(AtomicU64);

impl Respond for NonceCounter {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let nonce = self.0.fetch_add(1, Ordering::SeqCst);
        ResponseTemplate::new(200).set_body_string(nonce.to_string())
    }
}

/// Start a server answering every `/raw` endpoint per `script`.
pub async fn start_ledger(script: &LedgerScript) -> MockServer {
    let server = MockServer::start().await;
    mount_ledger(&server, script).await;
    server
}

pub async fn mount_ledger(server: &MockServer, script: &LedgerScript) {
    Mock::given(method("POST"))
        .and(path("/raw/timestamp/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(script.timestamp.to_string()))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/raw/nonce/[A-Za-z0-9]+/$"))
        .respond_with(NonceCounter(AtomicU64::new(script.first_nonce)))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/raw/fee/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "Result": "Success", "Fee": script.fee })),
        )
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/raw/hash/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "Result": "Success", "Hash": script.hash })),
        )
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/raw/validate-signature/.+/$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(script.signature_valid.to_string()))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/raw/verify/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "Result": script.verify_result })),
        )
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/raw/send/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "Result": script.send_result })),
        )
        .mount(server)
        .await;
}

/// Explorer record for `address`, optionally already owning a domain.
#[allow(dead_code)]
pub async fn mount_address(server: &MockServer, address: &str, adnr: Option<&str>) {
    Mock::given(method("GET"))
        .and(path(format!("/addresses/{}", address)))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "address": address,
            "balance": 100.0,
            "balance_total": 100.0,
            "balance_locked": 0.0,
            "adnr": adnr,
            "activated": true
        })))
        .mount(server)
        .await;
}

/// Domain record: taken domains resolve to `owner`, others return 404.
#[allow(dead_code)]
pub async fn mount_domain(server: &MockServer, domain: &str, owner: Option<&str>) {
    let response = match owner {
        Some(owner) => ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({ "address": owner, "domain": domain })),
        None => ResponseTemplate::new(404),
    };
    Mock::given(method("GET"))
        .and(path(format!("/addresses/adnr/{}/", domain)))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Testnet config pointed at `server`.
#[allow(dead_code)]
pub fn config_for(server: &MockServer, dry_run: bool) -> SdkConfig {
    let mut config = SdkConfig::for_network(Network::Testnet);
    config.api.base_url = Some(server.uri());
    config.api.request_timeout_secs = 1;
    config.transactions.dry_run = dry_run;
    config
}

/// Paths of every request the server has seen, in arrival order.
#[allow(dead_code)]
pub async fn request_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.url.path().to_string())
        .collect()
}
