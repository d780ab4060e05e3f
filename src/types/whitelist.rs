//! Whitelist destination types

use alloy::primitives::{Address, B256};
use serde::{Deserialize, Serialize};

use crate::codec::NAME_HASH_LEN;

/// An off-chain desired whitelist entry: a human-readable label and the
/// destination address it authorizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub address: Address,
}

impl Destination {
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }
}

/// A single whitelist mutation, rendered on-chain as one 32-byte slot.
///
/// Removals and additions share the wire shape (12-byte prefix, then a
/// 20-byte address). Whether the prefix holds a removal count or a name hash
/// is known only to the reconciler that produced the entry; it is never
/// inferred from the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhitelistChange {
    /// Remove `count` consecutive on-chain entries following `prev` (or
    /// following the sentinel when the run starts at the list head).
    Remove { count: u64, prev: Address },
    /// Append an entry keyed by the truncated name hash.
    Add {
        name_hash: [u8; NAME_HASH_LEN],
        address: Address,
    },
}

impl WhitelistChange {
    /// Renders the 32-byte on-chain slot.
    pub fn to_slot(&self) -> B256 {
        let mut slot = [0u8; 32];
        match self {
            WhitelistChange::Remove { count, prev } => {
                // big-endian count right-aligned in the 12-byte prefix
                slot[NAME_HASH_LEN - 8..NAME_HASH_LEN].copy_from_slice(&count.to_be_bytes());
                slot[NAME_HASH_LEN..].copy_from_slice(prev.as_slice());
            }
            WhitelistChange::Add { name_hash, address } => {
                slot[..NAME_HASH_LEN].copy_from_slice(name_hash);
                slot[NAME_HASH_LEN..].copy_from_slice(address.as_slice());
            }
        }
        B256::from(slot)
    }
}
