//! # safe-governance
//!
//! On-chain governance transaction engine for Safe v1.4.1 smart accounts.
//!
//! Given a wallet's current owner/threshold policy or address whitelist and a
//! desired target state, this crate computes the minimal call sequence
//! transforming one into the other, ABI-encodes those calls, batches them
//! through MultiSend when more than one is needed, and produces the EIP-712
//! hash a signer approves before a relayer submits the transaction.
//!
//! ## Pipeline
//!
//! ```rust,ignore
//! use safe_governance::{prepare_policy_transaction, ChainConfig, Policy};
//! use alloy::primitives::U256;
//!
//! let config = ChainConfig::mainnet();
//! let current = Policy::new(current_owners, 2)?;
//! let target = Policy::new(target_owners, 3)?;
//!
//! if let Some(tx) = prepare_policy_transaction(&config, safe, nonce, &current, &target)? {
//!     // tx.hash goes to the signer; tx.{to, data, operation} to the relayer
//! }
//! ```
//!
//! The reconcilers are pure functions over immutable snapshots: they hold no
//! state between calls and never refresh the on-chain view they are given.
//! Fetching state and submitting signed payloads belong to the surrounding
//! application.

pub mod chain;
pub mod codec;
pub mod contracts;
pub mod encoding;
pub mod error;
pub mod plan;
pub mod reconcile;
pub mod recovery;
pub mod types;

// Re-export main types at crate root
pub use chain::{contract_names, ChainConfig, ContractRegistry};
pub use codec::{name_hash, parse_address, SENTINEL_ADDRESS};
pub use encoding::{
    batch, compute_safe_transaction_hash, encode_module_call, encode_update_whitelist,
    BatchedTransaction, EncodedCall, SafeTxParams,
};
pub use error::{Error, Result};
pub use plan::{
    prepare_guard_transaction, prepare_policy_transaction, prepare_whitelist_transaction,
    PreparedTransaction,
};
pub use reconcile::{reconcile_policy, reconcile_whitelist};
pub use recovery::{compute_create2_address, RecoveryAddressDeriver};
pub use types::{Destination, Operation, Policy, SafeOperation, WhitelistChange};

// Re-export alloy types that are commonly used
pub use alloy::primitives::{Address, Bytes, B256, U256};
