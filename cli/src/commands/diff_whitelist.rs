use alloy::primitives::U256;
use color_eyre::eyre::Result;
use safe_governance::{
    parse_address, prepare_whitelist_transaction, reconcile_whitelist, ChainConfig, Destination,
};
use serde::Deserialize;

use crate::cli::DiffWhitelistArgs;
use crate::output::{describe_whitelist_change, NoChangesOutput, TransactionOutput};

#[derive(Deserialize)]
struct DestinationFile {
    name: String,
    address: String,
}

pub fn run(args: DiffWhitelistArgs, json: bool) -> Result<()> {
    let current: Vec<String> = serde_json::from_str(&std::fs::read_to_string(&args.current)?)?;
    let current = current
        .iter()
        .map(|s| parse_address(s))
        .collect::<safe_governance::Result<Vec<_>>>()?;

    let raw: Vec<DestinationFile> = serde_json::from_str(&std::fs::read_to_string(&args.target)?)?;
    let targets = raw
        .into_iter()
        .map(|d| Ok(Destination::new(d.name, parse_address(&d.address)?)))
        .collect::<safe_governance::Result<Vec<_>>>()?;

    let safe = parse_address(&args.safe)?;
    let module = parse_address(&args.module)?;
    let config = ChainConfig::new(args.chain_id);

    let changes = reconcile_whitelist(&current, &targets);
    let Some(tx) = prepare_whitelist_transaction(
        &config,
        safe,
        module,
        U256::from(args.nonce),
        &current,
        &targets,
    )?
    else {
        NoChangesOutput::print(json);
        return Ok(());
    };

    if !json {
        for (i, change) in changes.iter().enumerate() {
            println!("  {}: {}", i + 1, describe_whitelist_change(change));
        }
    }
    TransactionOutput {
        to: tx.to,
        data: tx.data,
        operation: tx.operation.as_u8(),
        hash: tx.hash,
        operations: vec![],
    }
    .print(json);
    Ok(())
}
