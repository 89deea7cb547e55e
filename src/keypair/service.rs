//! Network-bound facade over key generation, derivation, and signing.

use crate::error::SdkResult;
use crate::keypair::address::encode_address;
use crate::keypair::derivation::{self, MnemonicWords};
use crate::keypair::private_key::PrivateKey;
use crate::keypair::signature::CompositeSignature;
use crate::types::{Keypair, Network};

/// Derives identities and signs messages for one network.
///
/// All operations are pure and synchronous. Hex key inputs accept the
/// 64-char form and the legacy 66-char `00`-padded form.
#[derive(Debug, Clone, Copy)]
pub struct KeypairService {
    network: Network,
}

impl KeypairService {
    pub fn new(network: Network) -> Self {
        Self { network }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Random private key as 64-char hex.
    pub fn generate_private_key(&self) -> SdkResult<String> {
        Ok(PrivateKey::generate()?.to_hex())
    }

    pub fn generate_mnemonic(&self, words: MnemonicWords) -> SdkResult<String> {
        derivation::generate_mnemonic(words)
    }

    /// `m/0'/0'/{index}'` from a BIP-39 phrase.
    pub fn private_key_from_mnemonic(&self, mnemonic: &str, index: u32) -> SdkResult<String> {
        Ok(derivation::private_key_from_mnemonic(mnemonic, index)?.to_hex())
    }

    /// `m/0'/0'/{index}'` from the email/password stretch.
    pub fn private_key_from_email_password(
        &self,
        email: &str,
        password: &str,
        index: u32,
    ) -> SdkResult<String> {
        Ok(derivation::private_key_from_email_password(email, password, index)?.to_hex())
    }

    /// Uncompressed public key hex (`04` prefixed).
    pub fn public_from_private(&self, private_key: &str) -> SdkResult<String> {
        let key = PrivateKey::from_hex(private_key)?;
        Ok(hex::encode(key.public_key_bytes()?))
    }

    pub fn address_from_private(&self, private_key: &str) -> SdkResult<String> {
        let key = PrivateKey::from_hex(private_key)?;
        self.address_from_key(&key)
    }

    pub fn address_from_key(&self, key: &PrivateKey) -> SdkResult<String> {
        Ok(encode_address(&key.public_key_bytes()?, self.network))
    }

    /// Composite `"{base64 DER}.{base58 pubkey}"` signature over SHA-256(`message`).
    pub fn get_signature(&self, message: &str, private_key: &str) -> SdkResult<String> {
        let key = PrivateKey::from_hex(private_key)?;
        Ok(CompositeSignature::sign(message, &key)?.to_string())
    }

    /// Full identity for a hex key. The private key is kept in the form given.
    pub fn keypair_from_private_key(&self, private_key: &str) -> SdkResult<Keypair> {
        let key = PrivateKey::from_hex(private_key)?;
        let public_key = key.public_key_bytes()?;
        Ok(Keypair {
            private_key: private_key.trim().to_string(),
            address: encode_address(&public_key, self.network),
            public_key: hex::encode(public_key),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;
    use crate::keypair::address::is_valid_address;
    use crate::keypair::signature::verify_signature;

    const TEST_MNEMONIC: &str = "entire taste skull already invest view turtle surge razor key next buffalo venue canoe sheriff winner wash ten subject hamster scrap unit shield garden";
    const TEST_KEY: &str = "0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d";

    #[test]
    fn test_mnemonic_address_vector() {
        let mainnet = KeypairService::new(Network::Mainnet);
        let key = mainnet.private_key_from_mnemonic(TEST_MNEMONIC, 0).unwrap();
        assert_eq!(
            mainnet.address_from_private(&key).unwrap(),
            "RQJzd53UoyyjghC16gJ3meXNKiD2ABSHW7"
        );

        let testnet = KeypairService::new(Network::Testnet);
        assert_eq!(
            testnet.address_from_private(&key).unwrap(),
            "xPLSSRzfUsfCf4vfyywb7JUwnZ3ermSo35"
        );
    }

    #[test]
    fn test_email_password_addresses() {
        let service = KeypairService::new(Network::Testnet);
        let k0 = service
            .private_key_from_email_password("Alice@Example.com", "Passw0rd", 0)
            .unwrap();
        let k1 = service
            .private_key_from_email_password("Alice@Example.com", "Passw0rd", 1)
            .unwrap();
        assert_eq!(
            service.address_from_private(&k0).unwrap(),
            "xN9BBtzhjLdhPYGfjrjezyvwqScNhcXYSC"
        );
        assert_eq!(
            service.address_from_private(&k1).unwrap(),
            "xPfF79tkCE9ZzCJNSaTFzVn2pQvyAquEKv"
        );
    }

    #[test]
    fn test_generated_key_makes_valid_address() {
        for network in [Network::Mainnet, Network::Testnet] {
            let service = KeypairService::new(network);
            let key = service.generate_private_key().unwrap();
            assert_eq!(key.len(), 64);
            let address = service.address_from_private(&key).unwrap();
            assert!(is_valid_address(&address, network));
        }
    }

    #[test]
    fn test_legacy_padded_key_same_address() {
        let service = KeypairService::new(Network::Mainnet);
        let padded = format!("00{}", TEST_KEY);
        assert_eq!(
            service.address_from_private(&padded).unwrap(),
            service.address_from_private(TEST_KEY).unwrap()
        );
    }

    #[test]
    fn test_public_from_private_uncompressed() {
        let service = KeypairService::new(Network::Mainnet);
        let public_key = service.public_from_private(TEST_KEY).unwrap();
        assert_eq!(public_key.len(), 130);
        assert!(public_key.starts_with("04"));
    }

    #[test]
    fn test_malformed_hex_is_input_error() {
        let service = KeypairService::new(Network::Mainnet);
        let err = service.address_from_private("not-hex").unwrap_err();
        assert!(matches!(err, SdkError::InvalidHex(_)));
        assert!(service.get_signature("m", "12").is_err());
    }

    #[test]
    fn test_signature_verifies() {
        let service = KeypairService::new(Network::Mainnet);
        let sig = service.get_signature("hash-value", TEST_KEY).unwrap();
        assert!(verify_signature("hash-value", &sig).is_ok());
    }

    #[test]
    fn test_keypair_from_private_key() {
        let service = KeypairService::new(Network::Mainnet);
        let kp = service.keypair_from_private_key(TEST_KEY).unwrap();
        assert_eq!(kp.address, "RQSqnCzkU7xryUXqnjbekbXziAjVv5UxWp");
        assert_eq!(kp.private_key, TEST_KEY);
        assert_eq!(kp.public_key, service.public_from_private(TEST_KEY).unwrap());
    }
}
