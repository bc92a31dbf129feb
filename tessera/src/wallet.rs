//! A recovery phrase together with the seed stretched from it.

use zeroize::Zeroizing;

use crate::mnemonic::{self, SEED_LEN};
use crate::{Error, Result};

/// An HD wallet root: one BIP39 phrase and its seed.
///
/// Every chain derives its accounts from the same seed, so a single
/// `Wallet` backs all the records of a session.
///
/// # Passphrase Support
///
/// The optional BIP39 passphrase (the "25th word") changes the seed, and
/// with it every derived key.
pub struct Wallet {
    /// BIP39 mnemonic phrase, normalised to single spaces.
    mnemonic: Zeroizing<String>,
    /// Seed derived from mnemonic + passphrase.
    seed: Zeroizing<[u8; SEED_LEN]>,
    /// Whether a non-empty passphrase was used.
    has_passphrase: bool,
}

impl Wallet {
    /// Generate a wallet with a fresh random phrase.
    ///
    /// # Errors
    ///
    /// Returns an error if the word count is invalid or entropy is
    /// unavailable.
    pub fn generate(word_count: usize, passphrase: Option<&str>) -> Result<Self> {
        let mnemonic = mnemonic::generate(word_count)?;
        Ok(Self::from_parsed(&mnemonic, passphrase))
    }

    /// Create a wallet from raw entropy (16, 20, 24, 28 or 32 bytes).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMnemonic`] if the entropy length is invalid.
    pub fn from_entropy(entropy: &[u8], passphrase: Option<&str>) -> Result<Self> {
        let mnemonic = bip39::Mnemonic::from_entropy(entropy).map_err(Error::from)?;
        Ok(Self::from_parsed(&mnemonic, passphrase))
    }

    /// Import a wallet from a user-supplied phrase.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMnemonic`] if the phrase fails validation.
    pub fn from_mnemonic(phrase: &str, passphrase: Option<&str>) -> Result<Self> {
        let mnemonic = mnemonic::parse(phrase)?;
        Ok(Self::from_parsed(&mnemonic, passphrase))
    }

    fn from_parsed(mnemonic: &bip39::Mnemonic, passphrase: Option<&str>) -> Self {
        let passphrase = passphrase.unwrap_or("");
        Self {
            mnemonic: Zeroizing::new(mnemonic.to_string()),
            seed: mnemonic::to_seed(mnemonic, passphrase),
            has_passphrase: !passphrase.is_empty(),
        }
    }

    /// The recovery phrase.
    ///
    /// **Security Warning**: this value reconstructs every derived key.
    #[inline]
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// The seed handed to the derivation engine.
    #[inline]
    pub fn seed(&self) -> &[u8; SEED_LEN] {
        &self.seed
    }

    /// Whether a passphrase was mixed into the seed.
    pub const fn has_passphrase(&self) -> bool {
        self.has_passphrase
    }

    /// The phrase split into its words.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.mnemonic.split(' ')
    }

    /// Number of words in the phrase.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words().count()
    }
}

impl core::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Wallet")
            .field("mnemonic", &"<redacted>")
            .field("word_count", &self.word_count())
            .field("has_passphrase", &self.has_passphrase)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_generate_12_words() {
        let wallet = Wallet::generate(12, None).unwrap();
        assert_eq!(wallet.word_count(), 12);
        assert!(!wallet.has_passphrase());
    }

    #[test]
    fn test_generate_24_words() {
        let wallet = Wallet::generate(24, None).unwrap();
        assert_eq!(wallet.word_count(), 24);
    }

    #[test]
    fn test_generate_with_passphrase() {
        let wallet = Wallet::generate(12, Some("secret")).unwrap();
        assert!(wallet.has_passphrase());
    }

    #[test]
    fn test_empty_passphrase_is_no_passphrase() {
        let plain = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let empty = Wallet::from_mnemonic(TEST_MNEMONIC, Some("")).unwrap();
        assert!(!empty.has_passphrase());
        assert_eq!(plain.seed(), empty.seed());
    }

    #[test]
    fn test_invalid_entropy_length() {
        assert!(Wallet::from_entropy(&[0u8; 15], None).is_err());
    }

    #[test]
    fn test_from_entropy() {
        let wallet = Wallet::from_entropy(&[0u8; 16], None).unwrap();
        assert_eq!(wallet.mnemonic(), TEST_MNEMONIC);
    }

    #[test]
    fn test_from_mnemonic_normalises_spacing() {
        let messy = format!("  {}  ", TEST_MNEMONIC.replace(' ', "   "));
        let wallet = Wallet::from_mnemonic(&messy, None).unwrap();
        assert_eq!(wallet.mnemonic(), TEST_MNEMONIC);
        assert_eq!(wallet.words().next(), Some("abandon"));
    }

    #[test]
    fn test_from_mnemonic_rejects_invalid() {
        let err = Wallet::from_mnemonic("abandon abandon", None).unwrap_err();
        assert!(matches!(err, Error::InvalidMnemonic(_)));
    }

    #[test]
    fn test_passphrase_changes_seed() {
        let wallet1 = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let wallet2 = Wallet::from_mnemonic(TEST_MNEMONIC, Some("password")).unwrap();
        assert_ne!(wallet1.seed(), wallet2.seed());
    }

    #[test]
    fn test_deterministic_seed() {
        let wallet1 = Wallet::from_mnemonic(TEST_MNEMONIC, Some("test")).unwrap();
        let wallet2 = Wallet::from_mnemonic(TEST_MNEMONIC, Some("test")).unwrap();
        assert_eq!(wallet1.seed(), wallet2.seed());
    }

    #[test]
    fn test_debug_hides_phrase() {
        let wallet = Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap();
        let debug = format!("{wallet:?}");
        assert!(!debug.contains("abandon"));
        assert!(debug.contains("<redacted>"));
    }
}
