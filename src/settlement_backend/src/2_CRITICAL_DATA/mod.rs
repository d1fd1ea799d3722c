//! Critical data - measured deltas, fee accounting, oracle pricing
//! Source of truth for every economic figure in a settlement

pub mod custody;
pub mod fees;
pub mod pricing;

pub use custody::{measure, own_balance};
pub use fees::{assess, extract_fee, FeeBreakdown};
pub use pricing::{median_price, token_value_in_usd};
