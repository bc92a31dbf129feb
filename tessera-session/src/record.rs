//! Wallet records produced by the derivation pipeline.

use tessera::path::DerivationPath;
use tessera::slip10::DerivedKey;
use tessera::{Deriver, Error, KeyPair, Result, Wallet};
use zeroize::Zeroizing;

use crate::chain::Chain;

/// Path problems inside the pipeline are not something the user typed.
fn internal(err: Error) -> Error {
    match err {
        Error::InvalidPath(reason) => Error::Derivation(reason),
        other => other,
    }
}

fn chain_of(path: &DerivationPath) -> Result<Chain> {
    let coin_type = path
        .coin_type()
        .ok_or_else(|| Error::Derivation(format!("{path} is not a BIP-44 path")))?;
    Chain::from_coin_type(coin_type)
}

/// One derived account.
///
/// Built in one piece by [`WalletRecord::derive`] and never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct WalletRecord {
    public_key: String,
    private_key: Zeroizing<String>,
    mnemonic: Zeroizing<String>,
    path: DerivationPath,
}

impl WalletRecord {
    /// Derive the record at `m/44'/{coin_type}'/0'/{account_index}'`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedCoinType`] if no chain handles
    /// `coin_type`; derivation is not attempted in that case.
    pub fn derive(wallet: &Wallet, coin_type: u32, account_index: u32) -> Result<Self> {
        let path = tessera::path::build_path(coin_type, account_index).map_err(internal)?;
        Self::derive_at(wallet, path)
    }

    /// Derive the record at an explicit BIP-44 path, dispatching on the
    /// path's coin type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedCoinType`] if no chain handles the coin
    /// type. A path the engine cannot walk is an [`Error::Derivation`].
    pub fn derive_at(wallet: &Wallet, path: DerivationPath) -> Result<Self> {
        let chain = chain_of(&path)?;
        let key = Deriver::new(wallet).derive_key(&path).map_err(internal)?;
        Self::build(wallet, chain, path, &key)
    }

    /// Encode already-derived key material at `path`.
    ///
    /// # Errors
    ///
    /// As [`derive_at`](Self::derive_at), plus [`Error::Derivation`] if the
    /// bytes are not a valid key for the chain.
    pub fn from_key(wallet: &Wallet, path: DerivationPath, key: &DerivedKey) -> Result<Self> {
        let chain = chain_of(&path)?;
        Self::build(wallet, chain, path, key)
    }

    fn build(wallet: &Wallet, chain: Chain, path: DerivationPath, key: &DerivedKey) -> Result<Self> {
        let KeyPair {
            public_key,
            private_key,
        } = chain.encode(key)?;

        Ok(Self {
            public_key,
            private_key,
            mnemonic: Zeroizing::new(wallet.mnemonic().to_owned()),
            path,
        })
    }

    /// Public key (Solana) or checksummed address (Ethereum).
    #[inline]
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Private key in the chain's export encoding.
    #[inline]
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// The phrase this record was derived from.
    #[inline]
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Where in the tree this record sits.
    #[inline]
    pub fn path(&self) -> &DerivationPath {
        &self.path
    }

    /// Coin type from the record's path.
    pub fn coin_type(&self) -> Option<u32> {
        self.path.coin_type()
    }
}

impl core::fmt::Debug for WalletRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WalletRecord")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .field("mnemonic", &"<redacted>")
            .field("path", &self.path.to_string())
            .finish()
    }
}
