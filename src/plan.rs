//! End-to-end assembly of governance transactions
//!
//! Runs the full pipeline for a wallet mutation: reconcile the desired state
//! against the on-chain snapshot, render calldata, wrap each mutation for
//! module execution, batch through MultiSend when needed, and hash for
//! signing.

use alloy::primitives::{Address, Bytes, B256, U256};
use serde::Serialize;
use tracing::debug;

use crate::chain::{contract_names, ChainConfig};
use crate::encoding::{
    batch, compute_safe_transaction_hash, encode_module_call, encode_set_guard,
    encode_update_whitelist, EncodedCall, SafeTxParams,
};
use crate::error::Result;
use crate::reconcile::{reconcile_policy, reconcile_whitelist};
use crate::types::{Destination, Operation, Policy, SafeOperation};

/// A fully assembled transaction awaiting an owner signature.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedTransaction {
    /// Outer call target (the Safe, or the MultiSend contract when batched)
    pub to: Address,
    /// Always zero for governance calls
    pub value: U256,
    /// Outer calldata
    pub data: Bytes,
    /// `Call`, or `DelegateCall` when routed through MultiSend
    pub operation: Operation,
    /// EIP-712 hash the signer approves
    pub hash: B256,
}

fn prepare(
    config: &ChainConfig,
    safe: Address,
    nonce: U256,
    calls: Vec<EncodedCall>,
) -> Result<PreparedTransaction> {
    let multi_send = config.contracts.get(contract_names::MULTI_SEND)?;
    let batched = batch(&calls, multi_send)?;

    let params = SafeTxParams::new(
        batched.to,
        U256::ZERO,
        batched.data.clone(),
        batched.operation,
    )
    .with_nonce(nonce);
    let hash = compute_safe_transaction_hash(config.chain_id, safe, &params);

    Ok(PreparedTransaction {
        to: batched.to,
        value: U256::ZERO,
        data: batched.data,
        operation: batched.operation,
        hash,
    })
}

/// Builds the transaction transforming `starting` into `target` on `safe`.
///
/// Each owner-management call is wrapped for module execution against the
/// Safe. Returns `None` when the policies already match.
pub fn prepare_policy_transaction(
    config: &ChainConfig,
    safe: Address,
    nonce: U256,
    starting: &Policy,
    target: &Policy,
) -> Result<Option<PreparedTransaction>> {
    let (ops, resulting) = reconcile_policy(starting, target);
    if ops.is_empty() {
        return Ok(None);
    }
    debug_assert!(resulting.same_state(target));
    debug!(ops = ops.len(), %safe, "preparing policy transaction");

    let calls: Vec<EncodedCall> = ops
        .iter()
        .map(|op: &SafeOperation| EncodedCall::new(safe, encode_module_call(safe, op.encode())))
        .collect();
    prepare(config, safe, nonce, calls).map(Some)
}

/// Builds the transaction reconciling the custody module's whitelist with
/// `targets`. Returns `None` when nothing changes.
pub fn prepare_whitelist_transaction(
    config: &ChainConfig,
    safe: Address,
    module: Address,
    nonce: U256,
    current: &[Address],
    targets: &[Destination],
) -> Result<Option<PreparedTransaction>> {
    let changes = reconcile_whitelist(current, targets);
    if changes.is_empty() {
        return Ok(None);
    }
    debug!(changes = changes.len(), %module, "preparing whitelist transaction");

    let call = EncodedCall::new(
        safe,
        encode_module_call(module, encode_update_whitelist(&changes)),
    );
    prepare(config, safe, nonce, vec![call]).map(Some)
}

/// Builds the transaction installing the registered recovery guard on
/// `safe`, routed through module execution like every other mutation.
///
/// Fails with [`Error::ContractNotFound`](crate::Error::ContractNotFound)
/// when the registry has no recovery guard entry.
pub fn prepare_guard_transaction(
    config: &ChainConfig,
    safe: Address,
    nonce: U256,
) -> Result<PreparedTransaction> {
    let guard = config.contracts.get(contract_names::RECOVERY_GUARD)?;
    debug!(%guard, %safe, "preparing guard transaction");

    let call = EncodedCall::new(safe, encode_module_call(safe, encode_set_guard(guard)));
    prepare(config, safe, nonce, vec![call])
}
