//! Candid type definitions shared across zones

pub mod config;
pub mod icrc;
pub mod oracle;
pub mod receipts;
pub mod venues;

pub use config::{ConfigView, InitArgs, ProtocolConfig};
pub use icrc::Account;
pub use receipts::{SettlementReceipt, SettlementRecord, VenueKind};
