use alloy::primitives::{hex, Bytes, U256};
use color_eyre::eyre::Result;
use safe_governance::{compute_safe_transaction_hash, parse_address, Operation, SafeTxParams};

use crate::cli::HashArgs;
use crate::output::HashOutput;

pub fn run(args: HashArgs, json: bool) -> Result<()> {
    let to = parse_address(&args.to)?;
    let safe = parse_address(&args.safe)?;
    let data = Bytes::from(hex::decode(args.data.trim_start_matches("0x"))?);
    let operation = if args.delegate {
        Operation::DelegateCall
    } else {
        Operation::Call
    };

    let params = SafeTxParams::new(to, U256::ZERO, data, operation)
        .with_nonce(U256::from(args.nonce));
    let hash = compute_safe_transaction_hash(args.chain_id, safe, &params);

    HashOutput { hash }.print(json);
    Ok(())
}
