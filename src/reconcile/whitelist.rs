//! Whitelist reconciliation
//!
//! Diffs the on-chain whitelist against the desired destinations. Entries to
//! drop are grouped into maximal contiguous runs, each addressed by the entry
//! preceding the run; additions follow in caller order.

use std::collections::HashSet;

use alloy::primitives::Address;
use tracing::debug;

use crate::codec::{name_hash, SENTINEL_ADDRESS};
use crate::types::{Destination, WhitelistChange};

/// Computes the ordered change list transforming `current` (the on-chain
/// whitelist) into the address set of `targets`.
///
/// Removal markers come first, in on-chain list order; additions follow in
/// `targets` input order. Name hash collisions are not deduplicated.
pub fn reconcile_whitelist(current: &[Address], targets: &[Destination]) -> Vec<WhitelistChange> {
    let keep: HashSet<Address> = targets.iter().map(|d| d.address).collect();

    let mut changes = Vec::new();

    // Maximal runs of entries absent from the target set.
    let mut i = 0;
    while i < current.len() {
        if keep.contains(&current[i]) {
            i += 1;
            continue;
        }
        let run_start = i;
        while i < current.len() && !keep.contains(&current[i]) {
            i += 1;
        }
        let prev = if run_start == 0 {
            SENTINEL_ADDRESS
        } else {
            current[run_start - 1]
        };
        changes.push(WhitelistChange::Remove {
            count: (i - run_start) as u64,
            prev,
        });
    }
    let removals = changes.len();

    for destination in targets {
        if !current.contains(&destination.address) {
            changes.push(WhitelistChange::Add {
                name_hash: name_hash(&destination.name),
                address: destination.address,
            });
        }
    }

    debug!(
        removals,
        additions = changes.len() - removals,
        "reconciled whitelist"
    );

    changes
}
