//! Ledger execution - ICRC-1/ICRC-2 plumbing
//! Every token movement and read goes through this zone

pub mod approvals;
pub mod queries;
pub mod transfers;

pub use approvals::approve_exact;
pub use queries::{allowance_of, balance_of, decimals_of, transfer_fee_of};
pub use transfers::{pull_into_custody, push_from_custody};
