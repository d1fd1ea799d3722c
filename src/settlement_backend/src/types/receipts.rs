//! Settlement receipt and history record types

use candid::{CandidType, Deserialize, Nat, Principal};

#[derive(CandidType, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VenueKind {
    Aggregator,
    Router,
}

impl VenueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VenueKind::Aggregator => "aggregator",
            VenueKind::Router => "router",
        }
    }
}

/// Returned to the caller on every successful settlement
///
/// `net_output` is the amount actually delivered to the beneficiary:
/// measured balance delta minus the protocol fee.
#[derive(CandidType, Deserialize, Clone, Debug, PartialEq)]
pub struct SettlementReceipt {
    pub input_asset: Principal,
    pub input_amount: Nat,
    pub output_asset: Principal,
    pub net_output: Nat,
    pub beneficiary: Principal,
}

/// History entry kept per successful settlement
#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct SettlementRecord {
    pub timestamp: u64,
    pub operator: Principal,
    pub venue: VenueKind,
    pub receipt: SettlementReceipt,
    pub fee_paid: Nat,
}
