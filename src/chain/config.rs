//! Chain configuration and the named contract registry

use std::collections::HashMap;

use alloy::primitives::{address, Address};

use crate::error::{Error, Result};

/// Names resolvable through the [`ContractRegistry`].
pub mod contract_names {
    pub const SAFE_SINGLETON: &str = "safeSingleton";
    pub const PROXY_FACTORY: &str = "proxyFactory";
    pub const MULTI_SEND: &str = "multiSend";
    pub const FALLBACK_HANDLER: &str = "fallbackHandler";
    pub const RECOVERY_MODULE_FACTORY: &str = "recoveryModuleFactory";
    pub const RECOVERY_MODULE_SINGLETON: &str = "recoveryModuleSingleton";
    pub const RECOVERY_GUARD: &str = "recoveryGuard";
}

/// Name to address table for the contracts the engine targets.
///
/// A missing name is a hard error identifying what was absent; nothing is
/// ever defaulted silently.
#[derive(Debug, Clone, Default)]
pub struct ContractRegistry {
    contracts: HashMap<String, Address>,
}

impl ContractRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the canonical Safe v1.4.1 deployment addresses
    /// (identical across chains via CREATE2).
    pub fn v1_4_1() -> Self {
        let mut registry = Self::new();
        registry.insert(
            contract_names::SAFE_SINGLETON,
            address!("0x41675C099F32341bf84BFc5382aF534df5C7461a"),
        );
        registry.insert(
            contract_names::MULTI_SEND,
            address!("0x38869bf66a61cF6bDB996A6aE40D5853Fd43B526"),
        );
        registry.insert(
            contract_names::PROXY_FACTORY,
            address!("0x4e1DCf7AD4e460CfD30791CCC4F9c8a4f820ec67"),
        );
        registry.insert(
            contract_names::FALLBACK_HANDLER,
            address!("0xfd0732Dc9E303f09fCEf3a7388Ad10A83459Ec99"),
        );
        registry
    }

    pub fn insert(&mut self, name: impl Into<String>, address: Address) {
        self.contracts.insert(name.into(), address);
    }

    /// Resolves a contract by name.
    pub fn get(&self, name: &str) -> Result<Address> {
        self.contracts
            .get(name)
            .copied()
            .ok_or_else(|| Error::ContractNotFound {
                name: name.to_string(),
            })
    }
}

/// Chain configuration: chain id plus the contract registry.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Chain ID
    pub chain_id: u64,
    /// Named contract addresses
    pub contracts: ContractRegistry,
}

impl ChainConfig {
    /// Creates a configuration with canonical v1.4.1 addresses.
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            contracts: ContractRegistry::v1_4_1(),
        }
    }

    pub fn with_contracts(chain_id: u64, contracts: ContractRegistry) -> Self {
        Self {
            chain_id,
            contracts,
        }
    }

    pub fn mainnet() -> Self {
        Self::new(1)
    }

    pub fn sepolia() -> Self {
        Self::new(11155111)
    }

    pub fn optimism() -> Self {
        Self::new(10)
    }

    pub fn base() -> Self {
        Self::new(8453)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v1_4_1_registry() {
        let registry = ContractRegistry::v1_4_1();
        assert_eq!(
            registry.get(contract_names::MULTI_SEND).unwrap(),
            address!("0x38869bf66a61cF6bDB996A6aE40D5853Fd43B526")
        );
    }

    #[test]
    fn test_missing_name_identifies_itself() {
        let registry = ContractRegistry::v1_4_1();
        let err = registry
            .get(contract_names::RECOVERY_MODULE_FACTORY)
            .unwrap_err();
        assert!(err.to_string().contains("recoveryModuleFactory"));
    }

    #[test]
    fn test_insert_overrides() {
        let mut registry = ContractRegistry::v1_4_1();
        registry.insert(contract_names::MULTI_SEND, Address::ZERO);
        assert_eq!(
            registry.get(contract_names::MULTI_SEND).unwrap(),
            Address::ZERO
        );
    }

    #[test]
    fn test_chain_config_mainnet() {
        let config = ChainConfig::mainnet();
        assert_eq!(config.chain_id, 1);
    }
}
