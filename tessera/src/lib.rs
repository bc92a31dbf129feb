//! # Tessera - hierarchical key derivation for multi-chain wallets
//!
//! The deterministic pipeline behind every Tessera account:
//!
//! 1. [`mnemonic`]: generate or validate a BIP-39 phrase and stretch it
//!    into a seed.
//! 2. [`path`]: build `m/44'/{coin}'/0'/{account}'` for the next account.
//! 3. [`slip10`]: walk the hardened path over the seed.
//! 4. [`ChainEncoder`]: turn the 32-byte result into a chain's key pair.
//!    Implementations live in `tessera-svm` (Solana) and `tessera-evm`
//!    (Ethereum).
//!
//! # Example
//!
//! ```
//! use tessera::Wallet;
//!
//! let wallet = Wallet::generate(12, None)?;
//! assert_eq!(wallet.word_count(), 12);
//!
//! // With a BIP-39 passphrase the same phrase yields different keys.
//! let wallet = Wallet::generate(12, Some("my secret passphrase"))?;
//! assert!(wallet.has_passphrase());
//! # Ok::<(), tessera::Error>(())
//! ```

#![warn(missing_docs)]
#![allow(
    clippy::doc_markdown,
    clippy::missing_panics_doc,
    clippy::missing_fields_in_debug
)]

mod deriver;
mod encoder;
mod error;
pub mod mnemonic;
pub mod path;
pub mod slip10;
mod wallet;

pub use deriver::{DerivedAccount, Deriver};
pub use encoder::{ChainEncoder, KeyPair};
pub use error::{Error, Result};
pub use wallet::Wallet;
