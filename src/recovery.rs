//! Deterministic recovery module address prediction
//!
//! The recovery module is deployed through a CREATE2 proxy factory, so its
//! address is known before deployment:
//!
//! ```text
//! salt = keccak256(keccak256(initializer) ++ saltNonce)
//! init_code = proxyCreationCode ++ singleton_address_padded
//! address = keccak256(0xff ++ factory ++ salt ++ keccak256(init_code))[12:]
//! ```

use alloy::primitives::{keccak256, Address, Bytes, U256};

use crate::chain::{contract_names, ContractRegistry};
use crate::codec::address_word;
use crate::encoding::encode_setup;
use crate::error::Result;

/// Predicts where the proxy factory will deploy a recovery module.
#[derive(Debug, Clone)]
pub struct RecoveryAddressDeriver {
    contracts: ContractRegistry,
}

impl RecoveryAddressDeriver {
    pub fn new(contracts: ContractRegistry) -> Self {
        Self { contracts }
    }

    /// Derives the deterministic address for a recovery module initialized
    /// with the given owner set.
    ///
    /// Fails with [`Error::ContractNotFound`](crate::Error::ContractNotFound)
    /// when the registry is missing the factory, singleton, or fallback
    /// handler entry.
    pub fn derive(
        &self,
        owners: &[Address],
        threshold: u64,
        salt_nonce: U256,
        creation_code: &Bytes,
    ) -> Result<Address> {
        let factory = self.contracts.get(contract_names::RECOVERY_MODULE_FACTORY)?;
        let singleton = self
            .contracts
            .get(contract_names::RECOVERY_MODULE_SINGLETON)?;
        let fallback_handler = self.contracts.get(contract_names::FALLBACK_HANDLER)?;

        let initializer = encode_setup(owners, threshold, fallback_handler);
        Ok(compute_create2_address(
            factory,
            singleton,
            &initializer,
            salt_nonce,
            creation_code,
        ))
    }
}

/// Computes the CREATE2 address the proxy factory will deploy to.
pub fn compute_create2_address(
    factory: Address,
    singleton: Address,
    initializer: &Bytes,
    salt_nonce: U256,
    creation_code: &Bytes,
) -> Address {
    // salt = keccak256(keccak256(initializer) ++ saltNonce)
    let initializer_hash = keccak256(initializer);
    let mut salt_input = [0u8; 64];
    salt_input[..32].copy_from_slice(initializer_hash.as_slice());
    salt_input[32..].copy_from_slice(&salt_nonce.to_be_bytes::<32>());
    let salt = keccak256(salt_input);

    // init_code = creation_code ++ singleton as a 32-byte word
    let mut init_code = creation_code.to_vec();
    init_code.extend_from_slice(&address_word(singleton));
    let init_code_hash = keccak256(&init_code);

    let mut create2_input = Vec::with_capacity(1 + 20 + 32 + 32);
    create2_input.push(0xff);
    create2_input.extend_from_slice(factory.as_slice());
    create2_input.extend_from_slice(salt.as_slice());
    create2_input.extend_from_slice(init_code_hash.as_slice());

    Address::from_slice(&keccak256(&create2_input)[12..])
}
