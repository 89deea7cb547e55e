//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::Network;

/// Root configuration for the SDK.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct SdkConfig {
    /// Ledger network (address version byte and default API).
    pub network: Network,

    /// Ledger/explorer HTTP API settings.
    pub api: ApiConfig,

    /// Transaction submission settings.
    pub transactions: TransactionConfig,

    /// Log output settings.
    pub logging: LoggingConfig,
}

impl SdkConfig {
    /// Defaults for `network`.
    pub fn for_network(network: Network) -> Self {
        Self {
            network,
            ..Self::default()
        }
    }

    /// Configured API base URL, or the network default. No trailing slash.
    pub fn api_base_url(&self) -> String {
        self.api
            .base_url
            .as_deref()
            .unwrap_or_else(|| self.network.default_api_base_url())
            .trim_end_matches('/')
            .to_string()
    }
}

/// HTTP API configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Override for the network's default base URL.
    pub base_url: Option<String>,

    /// Deadline for each remote call in seconds.
    pub request_timeout_secs: u64,

    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            request_timeout_secs: 10,
            connect_timeout_secs: 5,
        }
    }
}

/// Transaction submission configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct TransactionConfig {
    /// Run every validation round trip but skip the broadcast.
    pub dry_run: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
