//! Solana support for Tessera.
//!
//! Provides [`SolanaEncoder`], the [`tessera::ChainEncoder`] for coin type
//! 501.
//!
//! # Usage
//!
//! ```
//! use tessera::{Deriver, Wallet};
//! use tessera_svm::SolanaEncoder;
//!
//! let wallet = Wallet::from_mnemonic(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     None
//! ).unwrap();
//!
//! let account = Deriver::new(&wallet).derive(&SolanaEncoder, 0).unwrap();
//! assert_eq!(account.keys.public_key, "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
//! ```

mod encoder;

pub use encoder::SolanaEncoder;
