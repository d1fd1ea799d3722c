//! Swap venue interface types
//!
//! Two independently-shaped venues sit behind the settlement path:
//! - the **aggregator** takes one flat argument record with an ordered
//!   route list and answers with a bare success flag;
//! - the **router** takes a route-parameters record plus a per-hop array
//!   and rejects the call outright on failure.
//!
//! Both records carry the venue's own routing metadata untouched; the
//! settlement path never interprets it.

use candid::{CandidType, Deserialize, Nat, Principal};
use serde_bytes::ByteBuf;

/// One hop of an aggregator route
#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct RouteHop {
    pub pool: Principal,
    pub token_in: Principal,
    pub token_out: Principal,
}

/// Argument record for the aggregator's single-call `swap` method
///
/// `receiver` is always this canister's own account, never the end
/// beneficiary: output must land in custody so the balance delta can be
/// measured before payout.
#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct AggregatorSwapArgs {
    pub pay_token: Principal,
    pub pay_amount: Nat,
    pub receive_token: Principal,
    pub expected_receive: Nat,
    pub min_receive: Nat,
    pub receiver: Principal,
    pub integrator_fee_bps: u16,
    pub integrator_fee_recipient: Principal,
    pub routes: Vec<RouteHop>,
}

/// Route-level parameters for the router's `execute_route` method
#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct RouteParams {
    pub pay_token: Principal,
    pub receive_token: Principal,
    pub pay_amount: Nat,
    /// Router-internal routing metadata, passed through opaquely
    pub route_data: ByteBuf,
}

/// Per-hop parameters for the router's `execute_route` method
#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct SwapStep {
    pub pool: Principal,
    pub token_in: Principal,
    pub token_out: Principal,
    pub min_out: Nat,
}
