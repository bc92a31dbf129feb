//! The seam between key material and chain-specific key encodings.

use zeroize::Zeroizing;

use crate::Result;
use crate::slip10::DerivedKey;

/// A public/private key pair in a chain's canonical string encoding.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    /// Public key or address, safe to display.
    pub public_key: String,
    /// Private key (zeroized on drop).
    pub private_key: Zeroizing<String>,
}

impl core::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Turns derived key material into one chain's key pair.
///
/// Each supported blockchain provides one implementation in its own crate.
pub trait ChainEncoder {
    /// SLIP-0044 coin type this encoder handles.
    const COIN_TYPE: u32;

    /// Human-readable chain name.
    const NAME: &'static str;

    /// Encode the 32 bytes at a derived node.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Derivation`] if the bytes are not a valid key
    /// on this chain's curve.
    fn encode(&self, key: &DerivedKey) -> Result<KeyPair>;
}
