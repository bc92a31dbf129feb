//! Ethereum addresses with EIP-55 checksum encoding.

use alloy_primitives::Address;
use k256::ecdsa::VerifyingKey;

/// Address of a secp256k1 public key: the last 20 bytes of the keccak256
/// hash of the uncompressed point without its `0x04` tag.
pub fn address_of(public_key: &VerifyingKey) -> Address {
    let point = public_key.to_encoded_point(false);
    Address::from_raw_public_key(&point.as_bytes()[1..])
}

/// EIP-55 mixed-case rendering with `0x` prefix.
pub fn to_checksum_address(address: &Address) -> String {
    address.to_checksum(None)
}

/// Whether `s` is a `0x` address whose letter casing matches EIP-55.
pub fn is_checksummed(s: &str) -> bool {
    s.parse::<Address>()
        .is_ok_and(|address| to_checksum_address(&address) == s)
}
