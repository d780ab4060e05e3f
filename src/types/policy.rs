//! Owner policy types
//!
//! A [`Policy`] mirrors the Safe contract's OwnerManager state: the owner
//! addresses in linked-list order (head first) plus the signing threshold.

use alloy::primitives::Address;
use serde::Serialize;

use crate::error::{Error, Result};

/// On-chain owner set and signing threshold of a Safe.
///
/// Construction validates the OwnerManager invariants; a `Policy` value is
/// always well formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Policy {
    owners: Vec<Address>,
    threshold: u64,
}

impl Policy {
    /// Creates a policy, enforcing the contract invariants: at least one
    /// owner, no duplicates, `1 <= threshold <= owners.len()`.
    pub fn new(owners: Vec<Address>, threshold: u64) -> Result<Self> {
        if owners.is_empty() {
            return Err(Error::EmptyOwners);
        }
        for (i, owner) in owners.iter().enumerate() {
            if owners[..i].contains(owner) {
                return Err(Error::DuplicateOwner(*owner));
            }
        }
        if threshold == 0 || threshold > owners.len() as u64 {
            return Err(Error::ThresholdOutOfRange {
                threshold,
                owners: owners.len(),
            });
        }
        Ok(Self { owners, threshold })
    }

    /// Constructs without validation. Callers must guarantee the invariants
    /// hold; used by the reconciler whose output is valid by construction.
    pub(crate) fn new_unchecked(owners: Vec<Address>, threshold: u64) -> Self {
        debug_assert!(!owners.is_empty());
        debug_assert!(threshold >= 1 && threshold <= owners.len() as u64);
        Self { owners, threshold }
    }

    /// Owners in linked-list order, head first.
    pub fn owners(&self) -> &[Address] {
        &self.owners
    }

    /// Number of required signatures.
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Checks owner membership.
    pub fn is_owner(&self, address: Address) -> bool {
        self.owners.contains(&address)
    }

    /// Whether both policies describe the same owner set and threshold,
    /// ignoring list order.
    pub fn same_state(&self, other: &Policy) -> bool {
        self.threshold == other.threshold
            && self.owners.len() == other.owners.len()
            && self.owners.iter().all(|o| other.owners.contains(o))
    }
}

/// One owner-management call against the Safe contract.
///
/// `prev` fields carry the linked-list predecessor at the moment the call
/// executes, or [`SENTINEL_ADDRESS`](crate::codec::SENTINEL_ADDRESS) when the
/// target owner is the list head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum SafeOperation {
    /// `swapOwner(prev, old, new)`
    SwapOwner {
        prev: Address,
        old: Address,
        new: Address,
    },
    /// `addOwnerWithThreshold(owner, threshold)`; the new owner becomes the
    /// list head.
    AddOwnerWithThreshold { owner: Address, threshold: u64 },
    /// `removeOwner(prev, owner, threshold)`
    RemoveOwner {
        prev: Address,
        owner: Address,
        threshold: u64,
    },
    /// `changeThreshold(threshold)`
    ChangeThreshold { threshold: u64 },
}

impl SafeOperation {
    /// The threshold this operation installs, if it carries one.
    pub fn threshold(&self) -> Option<u64> {
        match self {
            SafeOperation::SwapOwner { .. } => None,
            SafeOperation::AddOwnerWithThreshold { threshold, .. }
            | SafeOperation::RemoveOwner { threshold, .. }
            | SafeOperation::ChangeThreshold { threshold } => Some(*threshold),
        }
    }
}
