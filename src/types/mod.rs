//! Type definitions for Safe governance transactions

mod operation;
mod policy;
mod whitelist;

pub use operation::Operation;
pub use policy::{Policy, SafeOperation};
pub use whitelist::{Destination, WhitelistChange};
