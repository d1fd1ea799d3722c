//! Shared constants

/// Venue approval expiry in nanoseconds (15 minutes)
///
/// Long enough to survive network congestion between approval and the
/// venue's transfer_from, short enough that a stuck approval lapses.
pub const APPROVAL_EXPIRY_NANOS: u64 = 900_000_000_000;

/// Divisor in the flat protocol fee formula: fee = bps * 10^decimals / 100
pub const FEE_FORMULA_DIVISOR: u64 = 100;

/// Maximum fee rate accepted at initialization
pub const MAX_FEE_RATE_BPS: u16 = 10_000;

/// Settlement history is capped at the most recent entries
pub const MAX_HISTORY_ENTRIES: usize = 1_000;

/// Memo attached to custody pulls
pub const MEMO_PULL: &[u8] = b"settlement pull";

/// Memo attached to beneficiary payouts
pub const MEMO_PAYOUT: &[u8] = b"settlement payout";

/// Memo attached to protocol fee transfers
pub const MEMO_FEE: &[u8] = b"protocol fee";

/// Memo attached to compensation refunds
pub const MEMO_REFUND: &[u8] = b"settlement refund";
