//! Ledger address codec.
//!
//! ```text
//! h1       = SHA-256(uncompressed public key)
//! h2       = RIPEMD-160(h1)
//! versioned = version_byte || h2
//! address  = Base58(versioned || SHA-256(SHA-256(versioned))[..4])
//! ```
//! Mainnet addresses always start with `R`, testnet with `x`, and both are
//! always 34 characters long.

use crate::encoding::{base58, hash160};
use crate::error::{SdkError, SdkResult};
use crate::types::Network;

/// Length of every encoded address.
pub const ADDRESS_LEN: usize = 34;

const PAYLOAD_LEN: usize = 21;

/// Encode an address from an uncompressed (or any SEC1) public key.
pub fn encode_address(public_key: &[u8], network: Network) -> String {
    let mut versioned = [0u8; PAYLOAD_LEN];
    versioned[0] = network.address_version();
    versioned[1..].copy_from_slice(&hash160(public_key));
    base58::check_encode(&versioned)
}

/// Cheap shape check: length, network marker, alphanumeric.
pub fn is_valid_address(address: &str, network: Network) -> bool {
    address.len() == ADDRESS_LEN
        && address.starts_with(network.address_prefix())
        && address.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Decode and checksum-verify an address, returning its 20-byte key hash.
pub fn decode_address(address: &str, network: Network) -> SdkResult<[u8; 20]> {
    if !is_valid_address(address, network) {
        return Err(SdkError::Validation(format!(
            "Invalid {} address: {}",
            network, address
        )));
    }
    let payload = base58::check_decode(address)?;
    if payload.len() != PAYLOAD_LEN || payload[0] != network.address_version() {
        return Err(SdkError::Validation(format!(
            "Address {} does not carry the {} version byte",
            address, network
        )));
    }
    let mut hash = [0u8; 20];
    hash.copy_from_slice(&payload[1..]);
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypair::PrivateKey;
    use proptest::prelude::*;

    const TEST_KEY: &str = "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d";

    fn address_of(key_hex: &str, network: Network) -> String {
        let key = PrivateKey::from_hex(key_hex).unwrap();
        encode_address(&key.public_key_bytes().unwrap(), network)
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(
            address_of(TEST_KEY, Network::Mainnet),
            "RQSqnCzkU7xryUXqnjbekbXziAjVv5UxWp"
        );
        assert_eq!(
            address_of(TEST_KEY, Network::Testnet),
            "xPUHbZww91eKwrGWg3FC6FVaB1a8fWXwzj"
        );
    }

    #[test]
    fn test_generator_point_address() {
        let one = format!("{:0>64}", "1");
        assert_eq!(address_of(&one, Network::Mainnet), "RNZZecHLuoqUzNc9oE8ErkPFV1zJdvDBAH");
        assert_eq!(address_of(&one, Network::Testnet), "xMb1TyEXahWwxkLpgXmnCQLpwrpwLRRhrb");
    }

    #[test]
    fn test_decode_address() {
        let address = address_of(TEST_KEY, Network::Mainnet);
        let key = PrivateKey::from_hex(TEST_KEY).unwrap();
        let hash = decode_address(&address, Network::Mainnet).unwrap();
        assert_eq!(hash, hash160(&key.public_key_bytes().unwrap()));
    }

    #[test]
    fn test_decode_rejects_wrong_network() {
        let address = address_of(TEST_KEY, Network::Testnet);
        assert!(decode_address(&address, Network::Mainnet).is_err());
    }

    #[test]
    fn test_is_valid_address_shape() {
        assert!(is_valid_address("RQSqnCzkU7xryUXqnjbekbXziAjVv5UxWp", Network::Mainnet));
        assert!(!is_valid_address("RQSqnCzkU7xryUXqnjbekbXziAjVv5UxW", Network::Mainnet));
        assert!(!is_valid_address("xQSqnCzkU7xryUXqnjbekbXziAjVv5UxWp", Network::Mainnet));
        assert!(!is_valid_address("RQSqnCzkU7xryUXqnjbekbXziAjVv5Ux-p", Network::Mainnet));
        assert!(!is_valid_address("", Network::Testnet));
    }

    proptest! {
        #[test]
        fn prop_address_is_deterministic_and_well_formed(seed in any::<[u8; 32]>()) {
            prop_assume!(crate::keypair::is_valid_private_key(&seed));
            let key = PrivateKey::from_bytes(&seed).unwrap();
            let public_key = key.public_key_bytes().unwrap();
            for network in [Network::Mainnet, Network::Testnet] {
                let a = encode_address(&public_key, network);
                let b = encode_address(&public_key, network);
                prop_assert_eq!(&a, &b);
                prop_assert_eq!(a.len(), ADDRESS_LEN);
                prop_assert!(a.starts_with(network.address_prefix()));
                prop_assert!(decode_address(&a, network).is_ok());
            }
        }
    }
}
