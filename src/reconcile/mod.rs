//! Reconciliation of desired state against on-chain state

mod policy;
mod whitelist;

pub use policy::reconcile_policy;
pub use whitelist::reconcile_whitelist;
