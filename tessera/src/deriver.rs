//! Account derivation from a [`Wallet`].

use tracing::debug;

use crate::encoder::{ChainEncoder, KeyPair};
use crate::path::{DerivationPath, build_path};
use crate::slip10::{self, DerivedKey};
use crate::{Result, Wallet};

/// A derived account: where it sits in the tree and its encoded keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedAccount {
    /// Derivation path used (e.g., `m/44'/501'/0'/0'`).
    pub path: DerivationPath,
    /// Encoded key pair.
    pub keys: KeyPair,
}

/// Derives accounts for any chain from a wallet seed.
///
/// # Example
///
/// ```
/// use tessera::{Deriver, Wallet};
/// use tessera::path::build_path;
///
/// let wallet = Wallet::from_mnemonic(
///     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
///     None,
/// )?;
/// let key = Deriver::new(&wallet).derive_key(&build_path(501, 0)?)?;
/// assert_eq!(key.private_key().len(), 32);
/// # Ok::<(), tessera::Error>(())
/// ```
#[derive(Debug)]
pub struct Deriver<'a> {
    /// Reference to the wallet for seed access.
    wallet: &'a Wallet,
}

impl<'a> Deriver<'a> {
    /// Create a deriver over a wallet's seed.
    #[inline]
    pub const fn new(wallet: &'a Wallet) -> Self {
        Self { wallet }
    }

    /// Derive the raw key material at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not fully hardened.
    #[inline]
    pub fn derive_key(&self, path: &DerivationPath) -> Result<DerivedKey> {
        slip10::derive(self.wallet.seed(), path)
    }

    /// Derive the account at `account_index` for `E`'s coin type.
    ///
    /// # Errors
    ///
    /// Returns an error if derivation or encoding fails.
    pub fn derive<E: ChainEncoder>(&self, encoder: &E, account_index: u32) -> Result<DerivedAccount> {
        let path = build_path(E::COIN_TYPE, account_index)?;
        debug!(chain = E::NAME, %path, "deriving account");
        let key = self.derive_key(&path)?;
        let keys = encoder.encode(&key)?;
        Ok(DerivedAccount { path, keys })
    }

    /// Derive `count` consecutive accounts starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if any derivation fails.
    pub fn derive_many<E: ChainEncoder>(
        &self,
        encoder: &E,
        start: u32,
        count: u32,
    ) -> Result<Vec<DerivedAccount>> {
        (start..start.saturating_add(count))
            .map(|index| self.derive(encoder, index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use zeroize::Zeroizing;

    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    /// Hex of the raw key material; enough to exercise the pipeline here.
    struct HexEncoder;

    impl ChainEncoder for HexEncoder {
        const COIN_TYPE: u32 = 501;
        const NAME: &'static str = "Hex";

        fn encode(&self, key: &DerivedKey) -> Result<KeyPair> {
            Ok(KeyPair {
                public_key: String::new(),
                private_key: Zeroizing::new(hex::encode(key.private_key())),
            })
        }
    }

    fn test_wallet() -> Wallet {
        Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap()
    }

    #[test]
    fn test_derive_uses_bip44_path() {
        let wallet = test_wallet();
        let account = Deriver::new(&wallet).derive(&HexEncoder, 0).unwrap();
        assert_eq!(account.path.to_string(), "m/44'/501'/0'/0'");
        assert_eq!(
            account.keys.private_key.as_str(),
            "37df573b3ac4ad5b522e064e25b63ea16bcbe79d449e81a0268d1047948bb445"
        );
    }

    #[test]
    fn test_derive_many() {
        let wallet = test_wallet();
        let accounts = Deriver::new(&wallet).derive_many(&HexEncoder, 0, 3).unwrap();

        assert_eq!(accounts.len(), 3);
        assert_eq!(accounts[2].path.to_string(), "m/44'/501'/0'/2'");
        assert_ne!(accounts[0].keys, accounts[1].keys);
        assert_ne!(accounts[1].keys, accounts[2].keys);
    }

    #[test]
    fn test_passphrase_changes_keys() {
        let plain = test_wallet();
        let salted = Wallet::from_mnemonic(TEST_MNEMONIC, Some("password")).unwrap();
        let a = Deriver::new(&plain).derive(&HexEncoder, 0).unwrap();
        let b = Deriver::new(&salted).derive(&HexEncoder, 0).unwrap();
        assert_ne!(a.keys, b.keys);
    }

    #[test]
    fn test_key_pair_debug_is_redacted() {
        let wallet = test_wallet();
        let account = Deriver::new(&wallet).derive(&HexEncoder, 0).unwrap();
        let debug = format!("{:?}", account.keys);
        assert!(!debug.contains("37df573b"));
    }
}
