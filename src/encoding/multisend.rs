//! MultiSend transaction batching
//!
//! The MultiSend contract expects transactions in a packed format:
//! - operation: 1 byte (0 = Call, 1 = DelegateCall)
//! - to: 20 bytes
//! - value: 32 bytes
//! - data length: 32 bytes
//! - data: variable length
//!
//! A single call is never wrapped: the Safe executes it directly with a
//! plain `CALL`, and only a real batch is routed through the MultiSend
//! contract via `DELEGATECALL`.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;
use tracing::debug;

use crate::contracts::IMultiSend;
use crate::error::{Error, Result};
use crate::types::Operation;

/// A call prepared for batching: target plus calldata. Governance calls
/// never transfer value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedCall {
    pub to: Address,
    pub data: Bytes,
}

impl EncodedCall {
    pub fn new(to: Address, data: impl Into<Bytes>) -> Self {
        Self {
            to,
            data: data.into(),
        }
    }
}

/// The outer transaction produced by batching, carrying the routing the
/// caller must use: `operation` is `DelegateCall` exactly when `to` is the
/// MultiSend contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchedTransaction {
    pub to: Address,
    pub data: Bytes,
    pub operation: Operation,
}

/// Encodes a single call in the MultiSend packed format
///
/// Format: operation (1 byte) | to (20 bytes) | value (32 bytes) | data length (32 bytes) | data
pub fn encode_packed_call(call: &EncodedCall) -> Vec<u8> {
    let data_len = call.data.len();
    let mut encoded = Vec::with_capacity(85 + data_len);

    encoded.push(Operation::Call.as_u8());
    encoded.extend_from_slice(call.to.as_slice());
    encoded.extend_from_slice(&U256::ZERO.to_be_bytes::<32>());
    encoded.extend_from_slice(&U256::from(data_len).to_be_bytes::<32>());
    encoded.extend_from_slice(&call.data);

    encoded
}

/// Concatenates the packed encoding of every call.
pub fn encode_multisend_data(calls: &[EncodedCall]) -> Bytes {
    let mut encoded = Vec::new();
    for call in calls {
        encoded.extend(encode_packed_call(call));
    }
    Bytes::from(encoded)
}

/// Batches calls into one outer transaction.
///
/// One call passes through untouched and must be executed as a plain `CALL`
/// against its own target. Two or more are wrapped in `multiSend(bytes)`
/// against `multi_send`, which the Safe must reach via `DELEGATECALL`.
pub fn batch(calls: &[EncodedCall], multi_send: Address) -> Result<BatchedTransaction> {
    match calls {
        [] => Err(Error::NoCalls),
        [only] => Ok(BatchedTransaction {
            to: only.to,
            data: only.data.clone(),
            operation: Operation::Call,
        }),
        _ => {
            debug!(calls = calls.len(), "batching through MultiSend");
            let data = IMultiSend::multiSendCall {
                transactions: encode_multisend_data(calls),
            }
            .abi_encode();
            Ok(BatchedTransaction {
                to: multi_send,
                data: data.into(),
                operation: Operation::DelegateCall,
            })
        }
    }
}
