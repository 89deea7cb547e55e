//! Ledger-wide types and constants.

use serde::{Deserialize, Serialize, Serializer};

/// Default explorer/ledger API for mainnet.
pub const MAINNET_API_BASE_URL: &str = "https://data.verifiedx.io/api";

/// Default explorer/ledger API for testnet.
pub const TESTNET_API_BASE_URL: &str = "https://data-testnet.verifiedx.io/api";

/// Destination address for domain-name record transactions.
pub const ADNR_BASE_ADDRESS: &str = "Adnr_Base";

pub const DOMAIN_PURCHASE_COST: f64 = 5.0;
pub const DOMAIN_TRANSFER_COST: f64 = 5.0;
pub const DOMAIN_DELETE_COST: f64 = 5.0;

/// Ledger network selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    /// Address version byte.
    pub fn address_version(&self) -> u8 {
        match self {
            Network::Mainnet => 0x3c,
            Network::Testnet => 0x89,
        }
    }

    /// First character every address on this network starts with.
    pub fn address_prefix(&self) -> char {
        match self {
            Network::Mainnet => 'R',
            Network::Testnet => 'x',
        }
    }

    pub fn default_api_base_url(&self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_API_BASE_URL,
            Network::Testnet => TESTNET_API_BASE_URL,
        }
    }

    /// Infer the network from an address' leading character.
    pub fn from_address(address: &str) -> Network {
        if address.starts_with('x') {
            Network::Testnet
        } else {
            Network::Mainnet
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}

/// Ledger transaction type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TxType {
    RbxTransfer = 0,
    Node = 1,
    NftMint = 2,
    NftTx = 3,
    NftBurn = 4,
    NftSale = 5,
    Adnr = 6,
    DstShop = 7,
    VoteTopic = 8,
    Vote = 9,
    Reserve = 10,
    TokenTx = 15,
    TokenDeploy = 17,
    TokenizeTx = 18,
}

impl TxType {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl Serialize for TxType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// A derived identity. A pure function of the private key and network.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keypair {
    /// 32-byte scalar as hex (64 chars, or 66 with the legacy `00` pad).
    pub private_key: String,
    /// Uncompressed SEC1 point as hex, `04` prefixed.
    pub public_key: String,
    /// Base58Check address.
    pub address: String,
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("private_key", &"[REDACTED]")
            .field("public_key", &self.public_key)
            .field("address", &self.address)
            .finish()
    }
}

/// Account state as reported by the explorer API.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AddressDetails {
    pub address: String,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub balance_total: f64,
    #[serde(default)]
    pub balance_locked: f64,
    #[serde(default)]
    pub adnr: Option<String>,
    #[serde(default)]
    pub activated: bool,
}

impl AddressDetails {
    /// Details for an address the explorer has never seen.
    pub fn without_activity(address: &str) -> Self {
        Self {
            address: address.to_string(),
            balance: 0.0,
            balance_total: 0.0,
            balance_locked: 0.0,
            adnr: None,
            activated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_version_bytes() {
        assert_eq!(Network::Mainnet.address_version(), 0x3c);
        assert_eq!(Network::Testnet.address_version(), 0x89);
    }

    #[test]
    fn test_network_from_address() {
        assert_eq!(Network::from_address("xPLSSRzfUsfCf4vfyywb7JUwnZ3ermSo35"), Network::Testnet);
        assert_eq!(Network::from_address("RQJzd53UoyyjghC16gJ3meXNKiD2ABSHW7"), Network::Mainnet);
    }

    #[test]
    fn test_network_serde() {
        let n: Network = serde_json::from_str("\"testnet\"").unwrap();
        assert_eq!(n, Network::Testnet);
        assert_eq!(serde_json::to_string(&Network::Mainnet).unwrap(), "\"mainnet\"");
    }

    #[test]
    fn test_tx_type_serializes_as_code() {
        assert_eq!(serde_json::to_string(&TxType::Adnr).unwrap(), "6");
        assert_eq!(serde_json::to_string(&TxType::TokenizeTx).unwrap(), "18");
    }

    #[test]
    fn test_keypair_debug_redacts_private_key() {
        let kp = Keypair {
            private_key: "deadbeef".into(),
            public_key: "04ab".into(),
            address: "Rabc".into(),
        };
        let dbg = format!("{:?}", kp);
        assert!(!dbg.contains("deadbeef"));
        assert!(dbg.contains("REDACTED"));
    }

    #[test]
    fn test_address_details_from_snake_case() {
        let json = serde_json::json!({
            "address": "Rabc",
            "balance": 12.5,
            "balance_total": 13.0,
            "balance_locked": 0.5,
            "adnr": "alice.vfx",
            "activated": true
        });
        let details: AddressDetails = serde_json::from_value(json).unwrap();
        assert_eq!(details.adnr.as_deref(), Some("alice.vfx"));
        assert_eq!(details.balance_locked, 0.5);
    }
}
