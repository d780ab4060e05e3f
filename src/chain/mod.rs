//! Chain configuration

mod config;

pub use config::{contract_names, ChainConfig, ContractRegistry};
