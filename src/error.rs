//! Error types for safe-governance

use alloy::primitives::Address;
use thiserror::Error;

/// Result type alias for safe-governance operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building governance transactions
#[derive(Debug, Error)]
pub enum Error {
    /// Policy constructed with no owners
    #[error("Policy must have at least one owner")]
    EmptyOwners,

    /// Policy constructed with a repeated owner
    #[error("Duplicate owner {0} in policy")]
    DuplicateOwner(Address),

    /// Policy threshold outside `1..=owners.len()`
    #[error("Threshold {threshold} out of range for {owners} owner(s)")]
    ThresholdOutOfRange { threshold: u64, owners: usize },

    /// A contract name was not present in the supplied registry
    #[error("No address registered for contract \"{name}\"")]
    ContractNotFound { name: String },

    /// Failed to parse an address from its hex representation
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// No calls supplied to the batcher
    #[error("No calls to batch")]
    NoCalls,

    /// Encoding error
    #[error("Encoding error: {0}")]
    Encoding(String),
}
