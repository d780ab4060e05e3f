//! Round-trip tests for policy and whitelist reconciliation
//!
//! Applies the emitted operations to the starting state and checks the
//! result matches the target, both for hand-picked fixtures and for
//! randomly generated policies.

use std::collections::HashSet;

use alloy::primitives::Address;
use proptest::prelude::*;
use safe_governance::{
    reconcile_policy, reconcile_whitelist, Destination, Policy, SafeOperation, WhitelistChange,
    SENTINEL_ADDRESS,
};

/// Replays operations against an owner list the way the contract would.
fn apply_ops(starting: &Policy, ops: &[SafeOperation]) -> (Vec<Address>, u64) {
    let mut owners = starting.owners().to_vec();
    let mut threshold = starting.threshold();

    for op in ops {
        match op {
            SafeOperation::SwapOwner { prev, old, new } => {
                let idx = owners.iter().position(|o| o == old).expect("old owner");
                let expected_prev = if idx == 0 {
                    SENTINEL_ADDRESS
                } else {
                    owners[idx - 1]
                };
                assert_eq!(*prev, expected_prev, "stale prev pointer in {op:?}");
                owners[idx] = *new;
            }
            SafeOperation::AddOwnerWithThreshold {
                owner,
                threshold: t,
            } => {
                assert!(!owners.contains(owner), "adding existing owner");
                owners.insert(0, *owner);
                assert!(*t >= 1 && *t <= owners.len() as u64, "invalid interim threshold");
                threshold = *t;
            }
            SafeOperation::RemoveOwner {
                prev,
                owner,
                threshold: t,
            } => {
                let idx = owners.iter().position(|o| o == owner).expect("owner");
                let expected_prev = if idx == 0 {
                    SENTINEL_ADDRESS
                } else {
                    owners[idx - 1]
                };
                assert_eq!(*prev, expected_prev, "stale prev pointer in {op:?}");
                owners.remove(idx);
                assert!(*t >= 1 && *t <= owners.len() as u64, "invalid interim threshold");
                threshold = *t;
            }
            SafeOperation::ChangeThreshold { threshold: t } => {
                assert!(*t >= 1 && *t <= owners.len() as u64, "invalid threshold");
                threshold = *t;
            }
        }
    }

    (owners, threshold)
}

fn assert_round_trip(starting: &Policy, target: &Policy) {
    let (ops, resulting) = reconcile_policy(starting, target);
    let (owners, threshold) = apply_ops(starting, &ops);

    let got: HashSet<Address> = owners.iter().copied().collect();
    let want: HashSet<Address> = target.owners().iter().copied().collect();
    assert_eq!(got, want, "owner set mismatch after applying ops");
    assert_eq!(threshold, target.threshold());

    assert_eq!(resulting.owners(), owners.as_slice());
    assert_eq!(resulting.threshold(), threshold);
}

fn addr(byte: u8) -> Address {
    Address::repeat_byte(byte)
}

#[test]
fn round_trip_add_then_remove_fixture() {
    // Grow a 2-owner wallet by one, then shrink it back down.
    let two = Policy::new(vec![addr(0x11), addr(0x22)], 1).unwrap();
    let three = Policy::new(vec![addr(0x11), addr(0x22), addr(0x33)], 1).unwrap();

    let (grow, _) = reconcile_policy(&two, &three);
    assert_eq!(
        grow,
        vec![SafeOperation::AddOwnerWithThreshold {
            owner: addr(0x33),
            threshold: 1,
        }]
    );

    let (shrink, _) = reconcile_policy(&three, &two);
    assert_eq!(
        shrink,
        vec![SafeOperation::RemoveOwner {
            prev: addr(0x22),
            owner: addr(0x33),
            threshold: 1,
        }]
    );

    assert_round_trip(&two, &three);
    assert_round_trip(&three, &two);
}

#[test]
fn round_trip_full_rotation() {
    // Every owner replaced and the threshold changed.
    let starting = Policy::new(vec![addr(0x11), addr(0x22), addr(0x33)], 2).unwrap();
    let target = Policy::new(vec![addr(0x44), addr(0x55), addr(0x66)], 3).unwrap();
    assert_round_trip(&starting, &target);
}

#[test]
fn round_trip_grow_by_many() {
    let starting = Policy::new(vec![addr(0x11)], 1).unwrap();
    let target = Policy::new(
        vec![addr(0x11), addr(0x22), addr(0x33), addr(0x44), addr(0x55)],
        4,
    )
    .unwrap();
    assert_round_trip(&starting, &target);
}

#[test]
fn round_trip_shrink_by_many() {
    let starting = Policy::new(
        vec![addr(0x11), addr(0x22), addr(0x33), addr(0x44), addr(0x55)],
        5,
    )
    .unwrap();
    let target = Policy::new(vec![addr(0x33)], 1).unwrap();
    assert_round_trip(&starting, &target);
}

#[test]
fn idempotent_reconcile_is_empty() {
    let p = Policy::new(vec![addr(0x11), addr(0x22)], 2).unwrap();
    let (ops, resulting) = reconcile_policy(&p, &p);
    assert!(ops.is_empty());
    assert_eq!(resulting, p);
}

#[test]
fn reconcile_is_deterministic() {
    let starting = Policy::new(vec![addr(0x11), addr(0x22), addr(0x33)], 2).unwrap();
    let target = Policy::new(vec![addr(0x66), addr(0x55), addr(0x44)], 1).unwrap();

    let (a, _) = reconcile_policy(&starting, &target);
    let (b, _) = reconcile_policy(&starting, &target);
    assert_eq!(a, b);
}

/// Replays whitelist changes the way the module would: runs are removed by
/// prev pointer and count, additions appended.
fn apply_whitelist(current: &[Address], changes: &[WhitelistChange]) -> Vec<Address> {
    let mut list = current.to_vec();
    for change in changes {
        match change {
            WhitelistChange::Remove { count, prev } => {
                let start = if *prev == SENTINEL_ADDRESS {
                    0
                } else {
                    list.iter().position(|a| a == prev).expect("prev present") + 1
                };
                for _ in 0..*count {
                    list.remove(start);
                }
            }
            WhitelistChange::Add { address, .. } => list.push(*address),
        }
    }
    list
}

#[test]
fn whitelist_round_trip() {
    let current = vec![addr(0xa1), addr(0xa2), addr(0xa3), addr(0xa4)];
    let targets = vec![
        Destination::new("kept", addr(0xa2)),
        Destination::new("new-1", addr(0xb1)),
        Destination::new("new-2", addr(0xb2)),
    ];

    let changes = reconcile_whitelist(&current, &targets);
    let applied = apply_whitelist(&current, &changes);

    let got: HashSet<Address> = applied.into_iter().collect();
    let want: HashSet<Address> = targets.iter().map(|d| d.address).collect();
    assert_eq!(got, want);
}

fn arb_policy() -> impl Strategy<Value = Policy> {
    // 1-10 distinct owners drawn from a pool of 16, any valid threshold.
    (proptest::sample::subsequence((1u8..=16).collect::<Vec<_>>(), 1..=10))
        .prop_flat_map(|bytes| {
            let len = bytes.len() as u64;
            (Just(bytes), 1..=len)
        })
        .prop_map(|(bytes, threshold)| {
            let owners = bytes.into_iter().map(addr).collect();
            Policy::new(owners, threshold).unwrap()
        })
}

proptest! {
    #[test]
    fn fuzz_round_trip(starting in arb_policy(), target in arb_policy()) {
        assert_round_trip(&starting, &target);
    }

    #[test]
    fn fuzz_idempotence(p in arb_policy()) {
        let (ops, _) = reconcile_policy(&p, &p);
        prop_assert!(ops.is_empty());
    }

    #[test]
    fn fuzz_whitelist_round_trip(
        current in proptest::sample::subsequence((1u8..=16).collect::<Vec<_>>(), 0..=8),
        targets in proptest::sample::subsequence((9u8..=24).collect::<Vec<_>>(), 0..=8),
    ) {
        let current: Vec<Address> = current.into_iter().map(addr).collect();
        let targets: Vec<Destination> = targets
            .into_iter()
            .enumerate()
            .map(|(i, b)| Destination::new(format!("dest-{i}"), addr(b)))
            .collect();

        let changes = reconcile_whitelist(&current, &targets);
        let applied = apply_whitelist(&current, &changes);

        let got: HashSet<Address> = applied.into_iter().collect();
        let want: HashSet<Address> = targets.iter().map(|d| d.address).collect();
        prop_assert_eq!(got, want);
    }
}
