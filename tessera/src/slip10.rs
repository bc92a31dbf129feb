//! SLIP-0010 key derivation.
//!
//! Walks a fully hardened path over a BIP-39 seed and yields 32 bytes of
//! key material plus the chain code. The ed25519 curve constant is used for
//! every chain, so the same `(seed, path)` always produces the same bytes
//! whichever encoder consumes them.
//!
//! Reference: <https://github.com/satoshilabs/slips/blob/master/slip-0010.md>

use hmac::{Hmac, Mac};
use sha2::Sha512;
use tracing::trace;
use zeroize::Zeroizing;

use crate::path::{ChildIndex, DerivationPath};
use crate::{Error, Result};

type HmacSha512 = Hmac<Sha512>;

const ED25519_CURVE: &[u8] = b"ed25519 seed";

/// Key material at one node of the derivation tree.
pub struct DerivedKey {
    private_key: Zeroizing<[u8; 32]>,
    chain_code: Zeroizing<[u8; 32]>,
}

impl DerivedKey {
    /// A node from raw key material and chain code, e.g. one exported by
    /// another wallet.
    pub fn from_parts(private_key: [u8; 32], chain_code: [u8; 32]) -> Self {
        Self {
            private_key: Zeroizing::new(private_key),
            chain_code: Zeroizing::new(chain_code),
        }
    }

    /// Master node: `HMAC-SHA512("ed25519 seed", seed)`.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        Self::hmac(ED25519_CURVE, &[seed])
    }

    /// Hardened child: `HMAC-SHA512(chain_code, 0x00 || key || ser32(index))`.
    ///
    /// `index` is the unhardened value; the hardened bit is set here.
    pub fn derive_hardened(&self, index: u32) -> Result<Self> {
        let hardened = ChildIndex::hardened(index)?.to_u32();
        Self::hmac(
            self.chain_code.as_slice(),
            &[&[0x00], self.private_key.as_slice(), &hardened.to_be_bytes()],
        )
    }

    fn hmac(key: &[u8], parts: &[&[u8]]) -> Result<Self> {
        let mut mac = HmacSha512::new_from_slice(key)
            .map_err(|e| Error::Derivation(format!("hmac key rejected: {e}")))?;
        for part in parts {
            mac.update(part);
        }
        let output = mac.finalize().into_bytes();

        let mut private_key = Zeroizing::new([0u8; 32]);
        let mut chain_code = Zeroizing::new([0u8; 32]);
        private_key.copy_from_slice(&output[..32]);
        chain_code.copy_from_slice(&output[32..]);

        Ok(Self {
            private_key,
            chain_code,
        })
    }

    /// The 32-byte key material handed to chain encoders.
    #[inline]
    pub fn private_key(&self) -> &[u8; 32] {
        &self.private_key
    }

    /// The 32-byte chain code of this node.
    #[inline]
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }
}

impl core::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("DerivedKey(<redacted>)")
    }
}

/// Walk `path` over `seed`.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if any level is not hardened; SLIP-0010
/// ed25519 has no normal derivation.
pub fn derive(seed: &[u8], path: &DerivationPath) -> Result<DerivedKey> {
    if !path.is_fully_hardened() {
        return Err(Error::InvalidPath(format!(
            "{path} has a non-hardened level, only hardened derivation is supported"
        )));
    }

    trace!(%path, "walking derivation path");
    path.indices()
        .iter()
        .try_fold(DerivedKey::from_seed(seed)?, |node, index| {
            node.derive_hardened(index.index())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::build_path;

    // SLIP-0010 test vector 1 for ed25519.
    const VECTOR_1_SEED: &str = "000102030405060708090a0b0c0d0e0f";

    fn vector_1(path: &str) -> DerivedKey {
        let seed = hex::decode(VECTOR_1_SEED).unwrap();
        derive(&seed, &path.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_master_key_vector() {
        let master = vector_1("m");
        assert_eq!(
            hex::encode(master.private_key()),
            "2b4be7f19ee27bbf30c667b642d5f4aa69fd169872f8fc3059c08ebae2eb19e7"
        );
        assert_eq!(
            hex::encode(master.chain_code()),
            "90046a93de5380a72b5e45010748567d5ea02bbf6522f979e05c0d8d8ca9fffb"
        );
    }

    #[test]
    fn test_child_key_vector() {
        let child = vector_1("m/0'/1'");
        assert_eq!(
            hex::encode(child.private_key()),
            "b1d0bad404bf35da785a64ca1ac54b2617211d2777696fbffaf208f746ae84f2"
        );
        assert_eq!(
            hex::encode(child.chain_code()),
            "a320425f77d1b5c2505a6b1b27382b37368ee640e3557c315416801243552f14"
        );
    }

    #[test]
    fn test_rejects_normal_levels() {
        let seed = [0u8; 64];
        let path = "m/44'/60'/0'/0/0".parse().unwrap();
        assert!(matches!(derive(&seed, &path), Err(Error::InvalidPath(_))));
    }

    #[test]
    fn test_deterministic_and_index_sensitive() {
        let seed = [7u8; 64];
        let a = derive(&seed, &build_path(501, 0).unwrap()).unwrap();
        let b = derive(&seed, &build_path(501, 0).unwrap()).unwrap();
        let c = derive(&seed, &build_path(501, 1).unwrap()).unwrap();
        assert_eq!(a.private_key(), b.private_key());
        assert_ne!(a.private_key(), c.private_key());
    }

    #[test]
    fn test_coin_type_changes_key() {
        let seed = [7u8; 64];
        let sol = derive(&seed, &build_path(501, 0).unwrap()).unwrap();
        let eth = derive(&seed, &build_path(60, 0).unwrap()).unwrap();
        assert_ne!(sol.private_key(), eth.private_key());
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = vector_1("m");
        assert_eq!(format!("{key:?}"), "DerivedKey(<redacted>)");
    }
}
