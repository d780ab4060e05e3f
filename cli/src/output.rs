use alloy::primitives::{Address, Bytes, B256};
use safe_governance::{Operation, SafeOperation, WhitelistChange};
use serde::Serialize;

#[derive(Serialize)]
pub struct TransactionOutput {
    pub to: Address,
    pub data: Bytes,
    pub operation: u8,
    pub hash: B256,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<SafeOperation>,
}

impl TransactionOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            for (i, op) in self.operations.iter().enumerate() {
                println!("  {}: {:?}", i + 1, op);
            }
            println!("To: {}", self.to);
            println!(
                "Operation: {}",
                match Operation::from_u8(self.operation) {
                    Some(Operation::DelegateCall) => "DELEGATECALL",
                    _ => "CALL",
                }
            );
            println!("Data: {}", self.data);
            println!("Hash: {}", self.hash);
        }
    }
}

#[derive(Serialize)]
pub struct NoChangesOutput {
    pub changes: usize,
}

impl NoChangesOutput {
    pub fn print(json: bool) {
        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(&NoChangesOutput { changes: 0 }).unwrap()
            );
        } else {
            println!("Already in target state; nothing to do");
        }
    }
}

pub fn describe_whitelist_change(change: &WhitelistChange) -> String {
    match change {
        WhitelistChange::Remove { count, prev } => {
            format!("remove {count} entr(ies) after {prev}")
        }
        WhitelistChange::Add { address, .. } => format!("add {address}"),
    }
}

#[derive(Serialize)]
pub struct HashOutput {
    pub hash: B256,
}

impl HashOutput {
    pub fn print(&self, json: bool) {
        if json {
            println!("{}", serde_json::to_string_pretty(self).unwrap());
        } else {
            println!("{}", self.hash);
        }
    }
}
