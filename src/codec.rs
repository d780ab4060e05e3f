//! Address normalization and word-level byte utilities
//!
//! Everything that touches the wire goes through here: 32-byte word padding,
//! fixed-width hex, and the truncated name hash used to key whitelist entries.

use alloy::primitives::{hex, keccak256, Address, U256};

use crate::error::{Error, Result};

/// Reserved address marking the head/tail boundary of the Safe owner linked
/// list (`0x...0001`).
pub const SENTINEL_ADDRESS: Address = Address::with_last_byte(1);

/// Number of bytes of `keccak256(name)` kept as a whitelist entry key.
pub const NAME_HASH_LEN: usize = 12;

/// Parses a 20-byte address from hex, accepting any case with or without a
/// `0x` prefix.
pub fn parse_address(input: &str) -> Result<Address> {
    let digits = input.strip_prefix("0x").unwrap_or(input);
    if digits.len() != 40 {
        return Err(Error::InvalidAddress(input.to_string()));
    }
    let bytes: [u8; 20] = hex::decode_to_array(digits)
        .map_err(|_| Error::InvalidAddress(input.to_string()))?;
    Ok(Address::from(bytes))
}

/// Canonical internal form: lowercase hex digits without a `0x` prefix.
pub fn internal_hex(address: Address) -> String {
    hex::encode(address)
}

/// EIP-55 checksummed display form.
pub fn display_checksummed(address: Address) -> String {
    address.to_checksum(None)
}

/// Right-aligns an address into a 32-byte word (12 zero bytes, then the
/// 20 address bytes).
pub fn address_word(address: Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address.as_slice());
    word
}

/// Big-endian 32-byte word for an unsigned integer.
pub fn uint_word(value: u64) -> [u8; 32] {
    U256::from(value).to_be_bytes::<32>()
}

/// Truncated keccak256 identifying a whitelist entry's name on-chain.
///
/// `keccak256(utf8(name))[0..12]`. Collisions between names are not
/// detected here; the reconciler emits whatever it is given.
pub fn name_hash(name: &str) -> [u8; NAME_HASH_LEN] {
    let digest = keccak256(name.as_bytes());
    let mut truncated = [0u8; NAME_HASH_LEN];
    truncated.copy_from_slice(&digest[..NAME_HASH_LEN]);
    truncated
}
