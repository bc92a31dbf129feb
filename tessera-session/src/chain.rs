//! Supported blockchains and coin-type dispatch.

use core::fmt;
use core::str::FromStr;

use tessera::slip10::DerivedKey;
use tessera::{ChainEncoder, Error, KeyPair, Result};
use tessera_evm::EthereumEncoder;
use tessera_svm::SolanaEncoder;

/// A blockchain family with a key encoder.
///
/// Adding a chain means adding a variant here and an encoder crate; path
/// building and derivation stay the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Chain {
    /// Coin type 501, ed25519 keys in base58.
    Solana,
    /// Coin type 60, secp256k1 keys with EIP-55 addresses.
    Ethereum,
}

impl Chain {
    /// SLIP-0044 coin type.
    pub const fn coin_type(self) -> u32 {
        match self {
            Self::Solana => SolanaEncoder::COIN_TYPE,
            Self::Ethereum => EthereumEncoder::COIN_TYPE,
        }
    }

    /// The chain registered for `coin_type`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedCoinType`] if no encoder handles it.
    pub fn from_coin_type(coin_type: u32) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|chain| chain.coin_type() == coin_type)
            .ok_or(Error::UnsupportedCoinType(coin_type))
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Solana => SolanaEncoder::NAME,
            Self::Ethereum => EthereumEncoder::NAME,
        }
    }

    /// Short identifier for CLI usage.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Solana => "sol",
            Self::Ethereum => "eth",
        }
    }

    /// Every supported chain.
    pub const fn all() -> &'static [Self] {
        &[Self::Solana, Self::Ethereum]
    }

    /// Encode derived key material with this chain's encoder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Derivation`] if the key material is unusable.
    pub fn encode(self, key: &DerivedKey) -> Result<KeyPair> {
        match self {
            Self::Solana => SolanaEncoder.encode(key),
            Self::Ethereum => EthereumEncoder.encode(key),
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown chain name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseChainError(String);

impl fmt::Display for ParseChainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown blockchain '{}', expected one of: sol, eth, 501, 60",
            self.0
        )
    }
}

impl std::error::Error for ParseChainError {}

impl FromStr for Chain {
    type Err = ParseChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sol" | "solana" | "501" => Ok(Self::Solana),
            "eth" | "ethereum" | "60" => Ok(Self::Ethereum),
            _ => Err(ParseChainError(s.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_types() {
        assert_eq!(Chain::Solana.coin_type(), 501);
        assert_eq!(Chain::Ethereum.coin_type(), 60);
        assert_eq!(Chain::from_coin_type(501), Ok(Chain::Solana));
        assert_eq!(Chain::from_coin_type(60), Ok(Chain::Ethereum));
    }

    #[test]
    fn test_unsupported_coin_type() {
        assert_eq!(
            Chain::from_coin_type(9999),
            Err(Error::UnsupportedCoinType(9999))
        );
        assert_eq!(Chain::from_coin_type(0), Err(Error::UnsupportedCoinType(0)));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("sol".parse::<Chain>().unwrap(), Chain::Solana);
        assert_eq!("Solana".parse::<Chain>().unwrap(), Chain::Solana);
        assert_eq!("501".parse::<Chain>().unwrap(), Chain::Solana);
        assert_eq!("eth".parse::<Chain>().unwrap(), Chain::Ethereum);
        assert_eq!(" 60 ".parse::<Chain>().unwrap(), Chain::Ethereum);
        assert!("btc".parse::<Chain>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Chain::Solana.to_string(), "Solana");
        assert_eq!(Chain::Ethereum.to_string(), "Ethereum");
    }
}
