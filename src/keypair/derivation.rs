//! Deterministic key derivation.
//!
//! Both the mnemonic and the email/password paths end in the same BIP-32
//! hardened derivation `m/0'/0'/{index}'`. The email/password path is a
//! wallet-specific stretch that has to stay bit-for-bit stable: existing
//! addresses were derived with it.

use bip32::{ChildNumber, XPrv};
use bip39::Mnemonic;
use rand::{rngs::OsRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use crate::encoding::{decode_hex, sha256_hex};
use crate::error::{SdkError, SdkResult};
use crate::keypair::private_key::PrivateKey;

/// Number of SHA-256 rounds applied to the email/password seed string.
///
/// Deployed wallets run the loop with an inclusive bound of 50, i.e. 51
/// digests; changing this changes every derived address.
pub const EMAIL_PASSWORD_HASH_ROUNDS: usize = 51;

/// Supported mnemonic lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MnemonicWords {
    /// 128 bits of entropy.
    #[default]
    Twelve,
    /// 256 bits of entropy.
    TwentyFour,
}

impl MnemonicWords {
    pub const fn entropy_bytes(self) -> usize {
        match self {
            MnemonicWords::Twelve => 16,
            MnemonicWords::TwentyFour => 32,
        }
    }

    pub const fn count(self) -> usize {
        match self {
            MnemonicWords::Twelve => 12,
            MnemonicWords::TwentyFour => 24,
        }
    }
}

impl TryFrom<usize> for MnemonicWords {
    type Error = SdkError;

    fn try_from(words: usize) -> SdkResult<Self> {
        match words {
            12 => Ok(MnemonicWords::Twelve),
            24 => Ok(MnemonicWords::TwentyFour),
            other => Err(SdkError::Mnemonic(format!(
                "Invalid word count: {}. Expected 12 or 24 words.",
                other
            ))),
        }
    }
}

/// Fresh BIP-39 English phrase.
pub fn generate_mnemonic(words: MnemonicWords) -> SdkResult<String> {
    let size = words.entropy_bytes();
    let mut entropy = [0u8; 32];
    OsRng.fill_bytes(&mut entropy[..size]);
    let mnemonic = Mnemonic::from_entropy(&entropy[..size])
        .map_err(|e| SdkError::Mnemonic(e.to_string()));
    entropy.zeroize();
    Ok(mnemonic?.to_string())
}

/// BIP-39 seed (empty passphrase) for `phrase`.
pub fn mnemonic_to_seed(phrase: &str) -> SdkResult<Zeroizing<[u8; 64]>> {
    let normalized = phrase.split_whitespace().collect::<Vec<_>>().join(" ");
    let mnemonic = Mnemonic::parse_normalized(&normalized)
        .map_err(|e| SdkError::Mnemonic(e.to_string()))?;
    Ok(Zeroizing::new(mnemonic.to_seed("")))
}

/// Derive `m/0'/0'/{index}'` from a BIP-32 seed.
pub fn derive_hardened_key(seed: &[u8], index: u32) -> SdkResult<PrivateKey> {
    let mut node = XPrv::new(seed).map_err(|e| {
        SdkError::Derivation(format!("Failed to create master key: {}", e))
    })?;

    for component in [0, 0, index] {
        let child = ChildNumber::new(component, true).map_err(|e| {
            SdkError::Derivation(format!("Invalid index {}: {}", component, e))
        })?;
        node = node
            .derive_child(child)
            .map_err(|e| SdkError::Derivation(format!("Child derivation failed: {}", e)))?;
    }

    let key_bytes = Zeroizing::new(<[u8; 32]>::from(node.private_key().to_bytes()));
    PrivateKey::from_bytes(&key_bytes[..])
}

/// Private key for `phrase` at `index`.
pub fn private_key_from_mnemonic(phrase: &str, index: u32) -> SdkResult<PrivateKey> {
    let seed = mnemonic_to_seed(phrase)?;
    derive_hardened_key(&seed[..], index)
}

/// JavaScript `String.length`: UTF-16 code units.
fn js_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Number of maximal runs matching `class`, or 1 when there are none.
fn run_count(password: &str, class: impl Fn(char) -> bool) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for c in password.chars() {
        let hit = class(c);
        if hit && !in_run {
            runs += 1;
        }
        in_run = hit;
    }
    if runs == 0 {
        1
    } else {
        runs
    }
}

/// Seed string fed to the email/password stretch.
///
/// ```text
/// s = "{email}|{password}|"
/// s = s + "{len(s)}|!@{((len(password) * 7) + len(email)) * 7}"
/// s = s + "{(lower_runs + upper_runs + digit_runs) * len(password)}3571"
/// s = s + s
/// ```
/// `email` is lowercased first. Lengths count UTF-16 code units.
pub fn email_password_seed(email: &str, password: &str) -> Zeroizing<String> {
    let email = email.to_lowercase();
    let password_len = js_len(password);

    let mut seed = format!("{}|{}|", email, password);
    let prefix_len = js_len(&seed);
    seed.push_str(&format!(
        "{}|!@{}",
        prefix_len,
        ((password_len * 7) + js_len(&email)) * 7
    ));

    let classes = run_count(password, |c| c.is_ascii_lowercase())
        + run_count(password, |c| c.is_ascii_uppercase())
        + run_count(password, |c| c.is_ascii_digit());
    seed.push_str(&format!("{}3571", classes * password_len));

    let doubled = Zeroizing::new(seed.repeat(2));
    seed.zeroize();
    doubled
}

/// Private key for an email/password pair at `index`.
pub fn private_key_from_email_password(
    email: &str,
    password: &str,
    index: u32,
) -> SdkResult<PrivateKey> {
    let mut digest = email_password_seed(email, password);
    for _ in 0..EMAIL_PASSWORD_HASH_ROUNDS {
        digest = Zeroizing::new(sha256_hex(digest.as_bytes()));
    }
    let seed = Zeroizing::new(decode_hex(&digest)?);
    derive_hardened_key(&seed[..], index)
}
