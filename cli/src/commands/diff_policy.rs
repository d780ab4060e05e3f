use alloy::primitives::U256;
use color_eyre::eyre::{eyre, Result};
use safe_governance::{
    parse_address, prepare_policy_transaction, reconcile_policy, ChainConfig, Policy,
};
use serde::Deserialize;

use crate::cli::DiffPolicyArgs;
use crate::output::{NoChangesOutput, TransactionOutput};

/// Raw policy file shape; validated through `Policy::new`.
#[derive(Deserialize)]
struct PolicyFile {
    owners: Vec<String>,
    threshold: u64,
}

fn load_policy(path: &str) -> Result<Policy> {
    let raw: PolicyFile = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    let owners = raw
        .owners
        .iter()
        .map(|s| parse_address(s))
        .collect::<safe_governance::Result<Vec<_>>>()?;
    Ok(Policy::new(owners, raw.threshold)?)
}

pub fn run(args: DiffPolicyArgs, json: bool) -> Result<()> {
    let current = load_policy(&args.current)?;
    let target = load_policy(&args.target)?;
    let safe = parse_address(&args.safe)?;
    let config = ChainConfig::new(args.chain_id);

    let (operations, _) = reconcile_policy(&current, &target);
    let Some(tx) =
        prepare_policy_transaction(&config, safe, U256::from(args.nonce), &current, &target)?
    else {
        NoChangesOutput::print(json);
        return Ok(());
    };

    if tx.data.is_empty() {
        return Err(eyre!("prepared transaction has empty calldata"));
    }

    TransactionOutput {
        to: tx.to,
        data: tx.data,
        operation: tx.operation.as_u8(),
        hash: tx.hash,
        operations,
    }
    .print(json);
    Ok(())
}
