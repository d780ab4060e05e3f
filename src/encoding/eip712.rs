//! EIP-712 Safe transaction hashing
//!
//! Produces the structured hash a signer approves off-chain:
//! `keccak256(0x1901 || domainSeparator || structHash(SafeTx))` with the
//! domain bound to the chain id and the verifying Safe address.

use alloy::primitives::{keccak256, Address, Bytes, B256, U256};
use serde::Serialize;

use crate::codec::address_word;
use crate::contracts::{DOMAIN_SEPARATOR_TYPEHASH, SAFE_TX_TYPEHASH};
use crate::types::Operation;

/// Safe transaction parameters for hashing.
///
/// Gas fields and the refund pair default to zero; transactions built here
/// are executed by a sponsoring relayer, never refunded on-chain.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeTxParams {
    /// Target address
    pub to: Address,
    /// Value to send
    pub value: U256,
    /// Calldata
    pub data: Bytes,
    /// Operation type
    pub operation: Operation,
    /// Gas limit for the Safe transaction
    pub safe_tx_gas: U256,
    /// Base gas (overhead)
    pub base_gas: U256,
    /// Gas price for refund calculation
    pub gas_price: U256,
    /// Token used for gas refund (address(0) for ETH)
    pub gas_token: Address,
    /// Address to receive gas refund
    pub refund_receiver: Address,
    /// Safe nonce
    pub nonce: U256,
}

impl SafeTxParams {
    /// Creates params with relayer-sponsored defaults (all gas fields zero).
    pub fn new(to: Address, value: U256, data: impl Into<Bytes>, operation: Operation) -> Self {
        Self {
            to,
            value,
            data: data.into(),
            operation,
            safe_tx_gas: U256::ZERO,
            base_gas: U256::ZERO,
            gas_price: U256::ZERO,
            gas_token: Address::ZERO,
            refund_receiver: Address::ZERO,
            nonce: U256::ZERO,
        }
    }

    /// Sets the nonce
    pub fn with_nonce(mut self, nonce: U256) -> Self {
        self.nonce = nonce;
        self
    }
}

/// Computes the domain separator for a Safe
///
/// domain_separator = keccak256(abi.encode(DOMAIN_SEPARATOR_TYPEHASH, chainId, safeAddress))
pub fn compute_domain_separator(chain_id: u64, safe_address: Address) -> B256 {
    let mut encoded = Vec::with_capacity(96);
    encoded.extend_from_slice(&DOMAIN_SEPARATOR_TYPEHASH);
    encoded.extend_from_slice(&U256::from(chain_id).to_be_bytes::<32>());
    encoded.extend_from_slice(&address_word(safe_address));
    keccak256(&encoded)
}

/// Computes the struct hash for SafeTx
///
/// safeTxHash = keccak256(abi.encode(
///     SAFE_TX_TYPEHASH,
///     to, value, keccak256(data), operation,
///     safeTxGas, baseGas, gasPrice, gasToken, refundReceiver, nonce
/// ))
pub fn compute_safe_tx_hash(params: &SafeTxParams) -> B256 {
    let mut encoded = Vec::with_capacity(352);
    encoded.extend_from_slice(&SAFE_TX_TYPEHASH);
    encoded.extend_from_slice(&address_word(params.to));
    encoded.extend_from_slice(&params.value.to_be_bytes::<32>());
    encoded.extend_from_slice(keccak256(&params.data).as_slice());
    encoded.extend_from_slice(&U256::from(params.operation.as_u8()).to_be_bytes::<32>());
    encoded.extend_from_slice(&params.safe_tx_gas.to_be_bytes::<32>());
    encoded.extend_from_slice(&params.base_gas.to_be_bytes::<32>());
    encoded.extend_from_slice(&params.gas_price.to_be_bytes::<32>());
    encoded.extend_from_slice(&address_word(params.gas_token));
    encoded.extend_from_slice(&address_word(params.refund_receiver));
    encoded.extend_from_slice(&params.nonce.to_be_bytes::<32>());
    keccak256(&encoded)
}

/// Computes the final EIP-712 hash to sign
///
/// hash = keccak256("\x19\x01" || domainSeparator || safeTxHash)
pub fn compute_transaction_hash(domain_separator: B256, safe_tx_hash: B256) -> B256 {
    let mut encoded = Vec::with_capacity(66);
    encoded.extend_from_slice(&[0x19, 0x01]);
    encoded.extend_from_slice(domain_separator.as_slice());
    encoded.extend_from_slice(safe_tx_hash.as_slice());
    keccak256(&encoded)
}

/// Computes the complete transaction hash for signing
pub fn compute_safe_transaction_hash(
    chain_id: u64,
    safe_address: Address,
    params: &SafeTxParams,
) -> B256 {
    let domain_separator = compute_domain_separator(chain_id, safe_address);
    let safe_tx_hash = compute_safe_tx_hash(params);
    compute_transaction_hash(domain_separator, safe_tx_hash)
}
