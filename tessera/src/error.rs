//! Error types for mnemonic handling, path resolution and key derivation.

use thiserror::Error;

/// Errors that can occur anywhere in the derivation pipeline.
///
/// The session layer reuses this type, so registry and session failures
/// live here too.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The phrase failed word-count, wordlist or checksum validation.
    #[error("invalid recovery phrase: {0}")]
    InvalidMnemonic(#[from] bip39::Error),
    /// Unsupported number of words for a new phrase.
    #[error("invalid word count {0}, must be 12, 15, 18, 21, or 24")]
    InvalidWordCount(usize),
    /// A token that is neither a BIP39 word nor a unique prefix of one.
    #[error("\"{0}\" does not match any BIP-39 word")]
    UnknownWord(String),
    /// A prefix that matches more than one BIP39 word.
    #[error("prefix \"{prefix}\" is ambiguous, matches: {}", candidates.join(", "))]
    AmbiguousWord {
        /// The ambiguous prefix.
        prefix: String,
        /// Words that match the prefix.
        candidates: Vec<String>,
    },
    /// Malformed derivation path or out-of-range index.
    #[error("invalid derivation path: {0}")]
    InvalidPath(String),
    /// No encoder is registered for the path's coin type.
    #[error("unsupported path type: coin type {0}")]
    UnsupportedCoinType(u32),
    /// Internal failure while walking the path or building a key pair.
    #[error("key derivation error: {0}")]
    Derivation(String),
    /// A wallet was requested before any phrase was generated or imported.
    #[error("no mnemonic found, generate a wallet first")]
    NoMnemonic,
    /// A wallet was requested before a blockchain was chosen.
    #[error("no blockchain selected")]
    NoActiveChain,
    /// Switching blockchains while wallets of another coin type exist.
    #[error("wallets for coin type {active} exist, clear them before switching to {requested}")]
    ChainLocked {
        /// Coin type of the wallets currently held.
        active: u32,
        /// Coin type that was requested.
        requested: u32,
    },
    /// Registry index outside `0..len`.
    #[error("wallet index {index} out of bounds ({len} wallets)")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Current number of wallets.
        len: usize,
    },
}

impl Error {
    /// Whether the user can fix this error by changing their input.
    ///
    /// Anything else is an internal failure and is reported generically.
    pub const fn is_user_error(&self) -> bool {
        !matches!(self, Self::Derivation(_))
    }
}

/// A convenient Result type alias for tessera operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;
