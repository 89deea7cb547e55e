//! Shared HTTP plumbing: URL building, deadlines, and error mapping.

use std::time::{Duration, Instant};

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::time::timeout;

use crate::config::SdkConfig;
use crate::error::{SdkError, SdkResult};
use crate::observability::metrics;

/// HTTP client rooted at `{api_base_url}{base_path}`.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout_duration: Duration,
}

impl ApiClient {
    /// Build a client for the API section `base_path` (e.g. `/raw`).
    pub fn new(config: &SdkConfig, base_path: &str) -> SdkResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.api.connect_timeout())
            .timeout(config.api.request_timeout())
            .build()
            .map_err(|e| SdkError::Unknown(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: format!("{}{}", config.api_base_url(), base_path),
            timeout_duration: config.api.request_timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue one request under the per-call deadline. Non-2xx is an error
    /// unless `allow_not_found` is set and the status is 404.
    async fn execute<B: Serialize + ?Sized>(
        &self,
        endpoint: &'static str,
        method: Method,
        path: &str,
        body: Option<&B>,
        allow_not_found: bool,
    ) -> SdkResult<Option<reqwest::Response>> {
        let url = self.url(path);
        let mut request = self.http.request(method, &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let started = Instant::now();
        let result = match timeout(self.timeout_duration, request.send()).await {
            Ok(Ok(response)) => {
                let status = response.status();
                if status.is_success() {
                    Ok(Some(response))
                } else if allow_not_found && status == StatusCode::NOT_FOUND {
                    Ok(None)
                } else {
                    let text = response.text().await.unwrap_or_default();
                    Err(SdkError::RemoteRequest(format!(
                        "{} returned HTTP {}: {}",
                        endpoint,
                        status,
                        text.trim()
                    )))
                }
            }
            Ok(Err(e)) => Err(SdkError::from(e)),
            Err(_) => Err(SdkError::Timeout(self.timeout_duration.as_secs())),
        };

        metrics::record_remote_call(endpoint, result.is_ok(), started.elapsed());
        if let Err(e) = &result {
            tracing::warn!(endpoint, error = %e, "Remote call failed");
        }
        result
    }

    async fn read_text(&self, endpoint: &'static str, response: reqwest::Response) -> SdkResult<String> {
        let result = match timeout(self.timeout_duration, response.text()).await {
            Ok(text) => text.map_err(SdkError::from),
            Err(_) => Err(SdkError::Timeout(self.timeout_duration.as_secs())),
        };
        if let Err(e) = &result {
            tracing::warn!(endpoint, error = %e, "Failed to read response body");
        }
        result
    }

    async fn decode_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        response: reqwest::Response,
    ) -> SdkResult<T> {
        let text = self.read_text(endpoint, response).await?;
        serde_json::from_str(&text).map_err(|e| {
            SdkError::Protocol(format!("Unexpected {} response '{}': {}", endpoint, text, e))
        })
    }

    /// POST without a body, returning the response text.
    pub async fn post_text(&self, endpoint: &'static str, path: &str) -> SdkResult<String> {
        let response = self
            .execute::<()>(endpoint, Method::POST, path, None, false)
            .await?
            .ok_or_else(|| SdkError::RemoteRequest(format!("{} returned no body", endpoint)))?;
        self.read_text(endpoint, response).await
    }

    /// POST without a body; true iff the trimmed text is `true`.
    pub async fn post_bool(&self, endpoint: &'static str, path: &str) -> SdkResult<bool> {
        Ok(self.post_text(endpoint, path).await?.trim() == "true")
    }

    /// POST a JSON body and decode a JSON response.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
        body: &B,
    ) -> SdkResult<T> {
        let response = self
            .execute(endpoint, Method::POST, path, Some(body), false)
            .await?
            .ok_or_else(|| SdkError::RemoteRequest(format!("{} returned no body", endpoint)))?;
        self.decode_json(endpoint, response).await
    }

    /// GET a JSON document; `Ok(None)` on 404.
    pub async fn get_json_opt<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
    ) -> SdkResult<Option<T>> {
        match self
            .execute::<()>(endpoint, Method::GET, path, None, true)
            .await?
        {
            Some(response) => Ok(Some(self.decode_json(endpoint, response).await?)),
            None => Ok(None),
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}
