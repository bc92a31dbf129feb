//! Solana key pairs from derived key material.

use ed25519_dalek::SigningKey;
use tessera::slip10::DerivedKey;
use tessera::{ChainEncoder, KeyPair, Result};
use zeroize::Zeroizing;

/// Encodes derived keys the way Phantom, Backpack and Solflare export them.
///
/// - public key: base58 of the 32-byte ed25519 verifying key (the address)
/// - private key: base58 of the 64-byte keypair, secret seed followed by
///   the public key
#[derive(Debug, Clone, Copy, Default)]
pub struct SolanaEncoder;

impl ChainEncoder for SolanaEncoder {
    const COIN_TYPE: u32 = 501;
    const NAME: &'static str = "Solana";

    fn encode(&self, key: &DerivedKey) -> Result<KeyPair> {
        let signing_key = SigningKey::from_bytes(key.private_key());
        let keypair_bytes = Zeroizing::new(signing_key.to_keypair_bytes());

        Ok(KeyPair {
            public_key: bs58::encode(signing_key.verifying_key().as_bytes()).into_string(),
            private_key: Zeroizing::new(bs58::encode(keypair_bytes.as_slice()).into_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use tessera::{Deriver, Wallet};

    use super::*;

    const TEST_MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn test_wallet() -> Wallet {
        Wallet::from_mnemonic(TEST_MNEMONIC, None).unwrap()
    }

    #[test]
    fn test_known_addresses() {
        let wallet = test_wallet();
        let accounts = Deriver::new(&wallet).derive_many(&SolanaEncoder, 0, 3).unwrap();

        assert_eq!(accounts[0].path.to_string(), "m/44'/501'/0'/0'");
        assert_eq!(accounts[0].keys.public_key, "HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk");
        assert_eq!(accounts[1].keys.public_key, "GKreMsHvt8A79VApjboYDq3J4ZCXSJRYYQk9BscMbi1H");
        assert_eq!(accounts[2].keys.public_key, "9RYreF1nBs8Gvq94ACMBtVSVAVUBKSB9p6xdJBFyGApo");
    }

    #[test]
    fn test_known_keypair() {
        let wallet = test_wallet();
        let account = Deriver::new(&wallet).derive(&SolanaEncoder, 0).unwrap();
        assert_eq!(
            account.keys.private_key.as_str(),
            "27npWoNE4HfmLeQo1TyWcW7NEA28qnsnDK7kcttDQEWrCWnro83HMJ97rMmpvYYZRwDAvG4KRuB7hTBacvwD7bgi"
        );
    }

    #[test]
    fn test_private_key_is_secret_then_public() {
        let wallet = Wallet::generate(12, None).unwrap();
        let account = Deriver::new(&wallet).derive(&SolanaEncoder, 0).unwrap();

        // Solana addresses are 32-44 characters in Base58
        let address_len = account.keys.public_key.len();
        assert!((32..=44).contains(&address_len));

        let keypair = bs58::decode(account.keys.private_key.as_str()).into_vec().unwrap();
        let public = bs58::decode(&account.keys.public_key).into_vec().unwrap();
        assert_eq!(keypair.len(), 64);
        assert_eq!(&keypair[32..], public.as_slice());

        let key = Deriver::new(&wallet)
            .derive_key(&account.path)
            .unwrap();
        assert_eq!(&keypair[..32], key.private_key());
    }

    #[test]
    fn test_deterministic() {
        let wallet = test_wallet();
        let deriver = Deriver::new(&wallet);
        let a = deriver.derive(&SolanaEncoder, 4).unwrap();
        let b = deriver.derive(&SolanaEncoder, 4).unwrap();
        assert_eq!(a, b);
    }
}
