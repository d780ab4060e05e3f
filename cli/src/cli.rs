use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "safe-gov")]
#[command(about = "Inspect and encode Safe governance transactions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Diff two owner policies and print the resulting transaction
    DiffPolicy(DiffPolicyArgs),

    /// Diff the on-chain whitelist against desired destinations
    DiffWhitelist(DiffWhitelistArgs),

    /// Compute the EIP-712 hash for explicit transaction parameters
    Hash(HashArgs),
}

#[derive(Parser, Clone)]
pub struct DiffPolicyArgs {
    /// Path to the current policy JSON ({"owners": [...], "threshold": N})
    #[arg(long)]
    pub current: String,

    /// Path to the target policy JSON
    #[arg(long)]
    pub target: String,

    /// Safe contract address
    #[arg(long, env = "SAFE_ADDRESS")]
    pub safe: String,

    /// Chain ID
    #[arg(long, default_value = "1")]
    pub chain_id: u64,

    /// Safe nonce
    #[arg(long, default_value = "0")]
    pub nonce: u64,
}

#[derive(Parser, Clone)]
pub struct DiffWhitelistArgs {
    /// Path to the current whitelist JSON (array of addresses)
    #[arg(long)]
    pub current: String,

    /// Path to the target destinations JSON ([{"name": ..., "address": ...}])
    #[arg(long)]
    pub target: String,

    /// Safe contract address
    #[arg(long, env = "SAFE_ADDRESS")]
    pub safe: String,

    /// Custody module address
    #[arg(long)]
    pub module: String,

    /// Chain ID
    #[arg(long, default_value = "1")]
    pub chain_id: u64,

    /// Safe nonce
    #[arg(long, default_value = "0")]
    pub nonce: u64,
}

#[derive(Parser, Clone)]
pub struct HashArgs {
    /// Target address
    #[arg(value_name = "TO")]
    pub to: String,

    /// Calldata as hex
    #[arg(value_name = "DATA", default_value = "0x")]
    pub data: String,

    /// Safe contract address
    #[arg(long, env = "SAFE_ADDRESS")]
    pub safe: String,

    /// Chain ID
    #[arg(long, default_value = "1")]
    pub chain_id: u64,

    /// Safe nonce
    #[arg(long, default_value = "0")]
    pub nonce: u64,

    /// Use DELEGATECALL instead of CALL
    #[arg(long)]
    pub delegate: bool,
}
