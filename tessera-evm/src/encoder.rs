//! Ethereum key pairs from derived key material.

use k256::ecdsa::SigningKey;
use tessera::slip10::DerivedKey;
use tessera::{ChainEncoder, Error, KeyPair, Result};
use zeroize::Zeroizing;

use crate::address::{address_of, to_checksum_address};

/// Uses the derived bytes directly as a secp256k1 secret scalar.
///
/// - public key: EIP-55 checksummed address
/// - private key: lowercase hex without `0x`
#[derive(Debug, Clone, Copy, Default)]
pub struct EthereumEncoder;

impl ChainEncoder for EthereumEncoder {
    const COIN_TYPE: u32 = 60;
    const NAME: &'static str = "Ethereum";

    fn encode(&self, key: &DerivedKey) -> Result<KeyPair> {
        // Zero or >= n is not a valid scalar; probability ~2^-128.
        let signing_key = SigningKey::from_slice(key.private_key())
            .map_err(|_| Error::Derivation("key material is not a valid secp256k1 scalar".into()))?;
        let address = address_of(signing_key.verifying_key());

        Ok(KeyPair {
            public_key: to_checksum_address(&address),
            private_key: Zeroizing::new(hex::encode(signing_key.to_bytes())),
        })
    }
}
