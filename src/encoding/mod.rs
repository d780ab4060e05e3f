//! Encoding utilities for Safe governance transactions

mod calls;
mod eip712;
mod multisend;

pub use calls::{
    encode_enable_module, encode_module_call, encode_set_guard, encode_set_name_hash,
    encode_setup, encode_update_whitelist,
};
pub use eip712::{
    compute_domain_separator, compute_safe_transaction_hash, compute_safe_tx_hash,
    compute_transaction_hash, SafeTxParams,
};
pub use multisend::{batch, encode_multisend_data, encode_packed_call, BatchedTransaction, EncodedCall};
