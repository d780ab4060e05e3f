//! ABI call data construction for governance mutations
//!
//! Every mutation is rendered twice: the inner call against the Safe (or the
//! custody module), and an `execTransactionFromModule` wrapper routing it
//! through the module. The `sol!` definitions in [`crate::contracts`]
//! guarantee canonical Solidity ABI encoding.

use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::sol_types::SolCall;

use crate::contracts::{ICustodyModule, IGuardManager, IModuleManager, IOwnerManager, ISafeSetup};
use crate::types::{Operation, SafeOperation, WhitelistChange};

impl SafeOperation {
    /// Renders the owner-management calldata executed against the Safe.
    pub fn encode(&self) -> Bytes {
        match self {
            SafeOperation::SwapOwner { prev, old, new } => IOwnerManager::swapOwnerCall {
                prevOwner: *prev,
                oldOwner: *old,
                newOwner: *new,
            }
            .abi_encode()
            .into(),
            SafeOperation::AddOwnerWithThreshold { owner, threshold } => {
                IOwnerManager::addOwnerWithThresholdCall {
                    owner: *owner,
                    _threshold: U256::from(*threshold),
                }
                .abi_encode()
                .into()
            }
            SafeOperation::RemoveOwner {
                prev,
                owner,
                threshold,
            } => IOwnerManager::removeOwnerCall {
                prevOwner: *prev,
                owner: *owner,
                _threshold: U256::from(*threshold),
            }
            .abi_encode()
            .into(),
            SafeOperation::ChangeThreshold { threshold } => IOwnerManager::changeThresholdCall {
                _threshold: U256::from(*threshold),
            }
            .abi_encode()
            .into(),
        }
    }
}

/// Wraps inner calldata in `execTransactionFromModule` so the custody module
/// executes the mutation on the Safe's behalf. Value is always zero and the
/// inner operation is always a plain call.
pub fn encode_module_call(to: Address, data: impl Into<Bytes>) -> Bytes {
    IModuleManager::execTransactionFromModuleCall {
        to,
        value: U256::ZERO,
        data: data.into(),
        operation: Operation::Call.as_u8(),
    }
    .abi_encode()
    .into()
}

/// `setGuard(guard)` calldata.
pub fn encode_set_guard(guard: Address) -> Bytes {
    IGuardManager::setGuardCall { guard }.abi_encode().into()
}

/// `enableModule(module)` calldata.
pub fn encode_enable_module(module: Address) -> Bytes {
    IModuleManager::enableModuleCall { module }
        .abi_encode()
        .into()
}

/// `setNameHash(nameHash)` calldata.
pub fn encode_set_name_hash(name_hash: B256) -> Bytes {
    ICustodyModule::setNameHashCall {
        nameHash: name_hash,
    }
    .abi_encode()
    .into()
}

/// `updateWhitelist(entries)` calldata: each change rendered as its 32-byte
/// slot, removals before additions as ordered by the reconciler.
pub fn encode_update_whitelist(changes: &[WhitelistChange]) -> Bytes {
    let entries: Vec<Bytes> = changes
        .iter()
        .map(|change| Bytes::copy_from_slice(change.to_slot().as_slice()))
        .collect();
    ICustodyModule::updateWhitelistCall { entries }
        .abi_encode()
        .into()
}

/// Safe `setup(...)` calldata used to initialize a freshly deployed proxy.
/// No delegate setup call, no payment; only owners, threshold, and the
/// fallback handler are populated.
pub fn encode_setup(owners: &[Address], threshold: u64, fallback_handler: Address) -> Bytes {
    ISafeSetup::setupCall {
        _owners: owners.to_vec(),
        _threshold: U256::from(threshold),
        to: Address::ZERO,
        data: Bytes::new(),
        fallbackHandler: fallback_handler,
        paymentToken: Address::ZERO,
        payment: U256::ZERO,
        paymentReceiver: Address::ZERO,
    }
    .abi_encode()
    .into()
}
