pub mod diff_policy;
pub mod diff_whitelist;
pub mod hash;
