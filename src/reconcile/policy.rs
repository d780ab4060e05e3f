//! Owner policy reconciliation
//!
//! Computes the ordered call sequence that transforms one owner policy into
//! another. The Safe stores owners as a singly linked list keyed by the
//! predecessor address, so every swap/remove needs the `prev` pointer as it
//! will be at the moment that call executes. A simulated copy of the list is
//! advanced operation by operation to resolve those pointers.

use alloy::primitives::Address;
use tracing::debug;

use crate::codec::SENTINEL_ADDRESS;
use crate::types::{Policy, SafeOperation};

/// Simulated view of the on-chain owner linked list.
///
/// Mirrors the contract's mutations: swaps replace in place, additions
/// insert at the head, removals unlink.
struct OwnerList {
    owners: Vec<Address>,
}

impl OwnerList {
    fn new(owners: &[Address]) -> Self {
        Self {
            owners: owners.to_vec(),
        }
    }

    fn len(&self) -> u64 {
        self.owners.len() as u64
    }

    fn position(&self, owner: Address) -> usize {
        self.owners
            .iter()
            .position(|o| *o == owner)
            .expect("owner present in simulated list")
    }

    /// Predecessor of `owner`, or the sentinel when `owner` is the head.
    fn prev(&self, owner: Address) -> Address {
        match self.position(owner) {
            0 => SENTINEL_ADDRESS,
            idx => self.owners[idx - 1],
        }
    }

    fn swap(&mut self, old: Address, new: Address) {
        let idx = self.position(old);
        self.owners[idx] = new;
    }

    fn insert_head(&mut self, owner: Address) {
        self.owners.insert(0, owner);
    }

    fn remove(&mut self, owner: Address) {
        let idx = self.position(owner);
        self.owners.remove(idx);
    }
}

/// Computes the minimal operation sequence transforming `starting` into
/// `target`, together with the policy that results from applying it.
///
/// The resulting policy always has `target`'s owner set and threshold
/// (though the linked-list order may differ). Equal policies produce an
/// empty list. Owners leaving and entering the set are paired into swaps
/// where possible; leftovers become adds or removes, with the last
/// threshold-carrying operation installing `target`'s threshold.
pub fn reconcile_policy(starting: &Policy, target: &Policy) -> (Vec<SafeOperation>, Policy) {
    // Sorted ascending by address bytes, which matches lexicographic order
    // of the lowercase hex form: deterministic regardless of caller order.
    let mut removed: Vec<Address> = starting
        .owners()
        .iter()
        .filter(|o| !target.is_owner(**o))
        .copied()
        .collect();
    let mut added: Vec<Address> = target
        .owners()
        .iter()
        .filter(|o| !starting.is_owner(**o))
        .copied()
        .collect();
    removed.sort_unstable();
    added.sort_unstable();

    let mut list = OwnerList::new(starting.owners());
    let mut ops = Vec::new();
    let mut threshold = starting.threshold();

    // Pair one leaving owner with one entering owner per swap.
    let swaps = removed.len().min(added.len());
    for (old, new) in removed.iter().zip(added.iter()).take(swaps) {
        ops.push(SafeOperation::SwapOwner {
            prev: list.prev(*old),
            old: *old,
            new: *new,
        });
        list.swap(*old, *new);
    }

    // Surplus additions. The contract inserts new owners at the list head,
    // so later prev lookups must see them there. Intermediate calls carry
    // the most conservative threshold valid for the interim owner count;
    // the final call installs the target threshold.
    for (i, owner) in added.iter().enumerate().skip(swaps) {
        list.insert_head(*owner);
        let carried = if i == added.len() - 1 {
            target.threshold()
        } else {
            threshold.min(list.len())
        };
        ops.push(SafeOperation::AddOwnerWithThreshold {
            owner: *owner,
            threshold: carried,
        });
        threshold = carried;
    }

    // Surplus removals, same threshold rule.
    for (i, owner) in removed.iter().enumerate().skip(swaps) {
        let prev = list.prev(*owner);
        list.remove(*owner);
        let carried = if i == removed.len() - 1 {
            target.threshold()
        } else {
            threshold.min(list.len())
        };
        ops.push(SafeOperation::RemoveOwner {
            prev,
            owner: *owner,
            threshold: carried,
        });
        threshold = carried;
    }

    // Swaps carry no threshold, so a pure-swap (or owner-identical) diff
    // still needs an explicit threshold change.
    if threshold != target.threshold() {
        ops.push(SafeOperation::ChangeThreshold {
            threshold: target.threshold(),
        });
        threshold = target.threshold();
    }

    debug!(
        swaps,
        added = added.len().saturating_sub(swaps),
        removed = removed.len().saturating_sub(swaps),
        ops = ops.len(),
        "reconciled owner policy"
    );

    let resulting = Policy::new_unchecked(list.owners, threshold);
    (ops, resulting)
}
