//! Ethereum support for Tessera.
//!
//! Provides [`EthereumEncoder`], the [`tessera::ChainEncoder`] for coin type
//! 60, and EIP-55 address helpers.
//!
//! # Usage
//!
//! ```
//! use tessera::{Deriver, Wallet};
//! use tessera_evm::EthereumEncoder;
//!
//! let wallet = Wallet::from_mnemonic(
//!     "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
//!     None
//! ).unwrap();
//!
//! let account = Deriver::new(&wallet).derive(&EthereumEncoder, 0).unwrap();
//! assert_eq!(account.keys.public_key, "0x2759A6Ad812b8A7B73A63a243816D66F5b72A0A7");
//! ```

mod address;
mod encoder;

pub use address::{address_of, is_checksummed, to_checksum_address};
pub use encoder::EthereumEncoder;
