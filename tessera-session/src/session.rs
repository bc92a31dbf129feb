//! The interactive session: one active chain, one phrase, many wallets.

use std::borrow::Cow;

use tessera::mnemonic::DEFAULT_WORD_COUNT;
use tessera::{Error, Result, Wallet};
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::chain::Chain;
use crate::record::WalletRecord;
use crate::registry::Registry;

/// Character used to hide private keys.
pub const MASK_CHAR: char = '*';

/// How long the mask shown in place of a hidden private key is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskPolicy {
    /// As many characters as the key itself.
    #[default]
    KeyLength,
    /// A constant length regardless of the key.
    Fixed(usize),
}

impl MaskPolicy {
    /// Mask for `secret` under this policy.
    pub fn mask(self, secret: &str) -> String {
        let len = match self {
            Self::KeyLength => secret.chars().count(),
            Self::Fixed(len) => len,
        };
        core::iter::repeat_n(MASK_CHAR, len).collect()
    }
}

/// Tunables a front end passes in when opening a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Words in freshly generated phrases.
    pub word_count: usize,
    /// Private-key masking.
    pub mask: MaskPolicy,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_WORD_COUNT,
            mask: MaskPolicy::default(),
        }
    }
}

/// In-memory wallet session.
///
/// Holds the active chain, the current recovery phrase and the ordered list
/// of derived wallets. Every mutating operation either completes or leaves
/// the session untouched.
///
/// # Example
///
/// ```
/// use tessera_session::{Chain, Session};
///
/// let mut session = Session::default();
/// session.select_chain(Chain::Solana)?;
/// session.generate_wallet(None)?;
/// session.add_wallet()?;
///
/// assert_eq!(session.wallets().len(), 2);
/// assert_eq!(session.wallets().get(1).unwrap().record.path().to_string(), "m/44'/501'/0'/1'");
/// # Ok::<(), tessera::Error>(())
/// ```
#[derive(Default)]
pub struct Session {
    options: SessionOptions,
    chain: Option<Chain>,
    wallet: Option<Wallet>,
    passphrase: Option<Zeroizing<String>>,
    registry: Registry,
    phrase_visible: bool,
}

impl Session {
    /// An empty session with the given options.
    pub fn new(options: SessionOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Options the session was opened with.
    #[inline]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// The selected chain, if any.
    #[inline]
    pub const fn active_chain(&self) -> Option<Chain> {
        self.chain
    }

    /// Select the chain new wallets are derived for.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChainLocked`] while wallets of another chain exist.
    pub fn select_chain(&mut self, chain: Chain) -> Result<()> {
        match self.registry.coin_type() {
            Some(active) if active != chain.coin_type() => {
                return Err(Error::ChainLocked {
                    active,
                    requested: chain.coin_type(),
                });
            }
            _ => {}
        }
        if self.chain != Some(chain) {
            info!(chain = chain.id(), "chain selected");
        }
        self.chain = Some(chain);
        Ok(())
    }

    /// Set the BIP-39 passphrase used for phrases entered or generated from
    /// now on. An empty string clears it.
    pub fn set_passphrase(&mut self, passphrase: Option<&str>) {
        self.passphrase = passphrase
            .filter(|p| !p.is_empty())
            .map(|p| Zeroizing::new(p.to_owned()));
    }

    /// Whether a passphrase is set.
    pub fn has_passphrase(&self) -> bool {
        self.passphrase.is_some()
    }

    /// The current session phrase.
    pub fn mnemonic(&self) -> Option<&str> {
        self.wallet.as_ref().map(Wallet::mnemonic)
    }

    /// Derived wallets in order.
    #[inline]
    pub const fn wallets(&self) -> &Registry {
        &self.registry
    }

    /// Adopt `input` as the session phrase, or generate one when it is
    /// blank, then derive the next wallet from it.
    ///
    /// Existing wallets are kept; each remembers the phrase it came from.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveChain`] without a selected chain and
    /// [`Error::InvalidMnemonic`] if `input` is not a valid phrase. The
    /// session is unchanged on error.
    pub fn generate_wallet(&mut self, input: Option<&str>) -> Result<&WalletRecord> {
        let chain = self.chain.ok_or(Error::NoActiveChain)?;
        let passphrase = self.passphrase.as_deref().map(String::as_str);

        let input = input.map(str::trim).filter(|s| !s.is_empty());
        let wallet = match input {
            Some(phrase) => Wallet::from_mnemonic(phrase, passphrase)?,
            None => Wallet::generate(self.options.word_count, passphrase)?,
        };
        info!(
            chain = chain.id(),
            imported = input.is_some(),
            words = wallet.word_count(),
            "session phrase set"
        );

        let record = self.derive_next(chain, &wallet);
        self.commit(Some(wallet), record)
    }

    /// Derive the next wallet from the current session phrase.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveChain`] or [`Error::NoMnemonic`] when the
    /// session is not ready.
    pub fn add_wallet(&mut self) -> Result<&WalletRecord> {
        let chain = self.chain.ok_or(Error::NoActiveChain)?;
        let wallet = self.wallet.as_ref().ok_or(Error::NoMnemonic)?;
        let record = self.derive_next(chain, wallet);
        self.commit(None, record)
    }

    /// Store a finished record, adopting `wallet` as the session phrase.
    /// A failed derivation changes nothing.
    fn commit(&mut self, wallet: Option<Wallet>, record: Result<WalletRecord>) -> Result<&WalletRecord> {
        let record = record?;
        if let Some(wallet) = wallet {
            self.wallet = Some(wallet);
        }
        Ok(&self.registry.push(record).record)
    }

    fn derive_next(&self, chain: Chain, wallet: &Wallet) -> Result<WalletRecord> {
        let index = u32::try_from(self.registry.len())
            .map_err(|_| Error::Derivation("account index overflow".into()))?;
        debug!(chain = chain.id(), index, "deriving wallet");
        WalletRecord::derive(wallet, chain.coin_type(), index)
    }

    /// Remove the wallet at `index`; later wallets shift down.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if there is no such wallet.
    pub fn remove_wallet(&mut self, index: usize) -> Result<WalletRecord> {
        self.registry.remove(index)
    }

    /// Drop every wallet, the session phrase and the active chain.
    ///
    /// The passphrase is kept.
    pub fn clear(&mut self) {
        self.registry.clear();
        self.wallet = None;
        self.chain = None;
        self.phrase_visible = false;
        info!("session cleared");
    }

    /// [`clear`](Self::clear) and also forget the passphrase.
    pub fn reset(&mut self) {
        self.clear();
        self.passphrase = None;
    }

    /// Whether the session phrase panel is revealed.
    #[inline]
    pub const fn phrase_visible(&self) -> bool {
        self.phrase_visible
    }

    /// Flip the session phrase panel and return the new state.
    pub fn toggle_phrase_visible(&mut self) -> bool {
        self.phrase_visible = !self.phrase_visible;
        self.phrase_visible
    }

    /// Flip private-key visibility for one wallet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if there is no such wallet.
    pub fn toggle_private_key(&mut self, index: usize) -> Result<bool> {
        self.registry.toggle_private_key(index)
    }

    /// Flip phrase visibility for one wallet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if there is no such wallet.
    pub fn toggle_wallet_phrase(&mut self, index: usize) -> Result<bool> {
        self.registry.toggle_phrase(index)
    }

    /// The wallet's private key as it should be shown: in full when
    /// revealed, masked otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if there is no such wallet.
    pub fn display_private_key(&self, index: usize) -> Result<Cow<'_, str>> {
        let entry = self.registry.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.registry.len(),
        })?;
        let key = entry.record.private_key();
        if entry.private_key_visible {
            Ok(Cow::Borrowed(key))
        } else {
            Ok(Cow::Owned(self.options.mask.mask(key)))
        }
    }

    /// The mask for the wallet's private key, regardless of visibility.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if there is no such wallet.
    pub fn masked_private_key(&self, index: usize) -> Result<String> {
        self.registry
            .get(index)
            .map(|entry| self.options.mask.mask(entry.record.private_key()))
            .ok_or(Error::IndexOutOfBounds {
                index,
                len: self.registry.len(),
            })
    }
}

impl core::fmt::Debug for Session {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Session")
            .field("options", &self.options)
            .field("chain", &self.chain)
            .field("wallet", &self.wallet)
            .field("has_passphrase", &self.passphrase.is_some())
            .field("wallets", &self.registry.len())
            .field("phrase_visible", &self.phrase_visible)
            .finish()
    }
}
