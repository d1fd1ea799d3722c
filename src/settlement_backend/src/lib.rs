//! Settlement Backend - Security-First Architecture with Numbered Zones
//!
//! Architecture:
//! 1_CRITICAL_OPERATIONS - Settlement orchestration (highest security)
//! 2_CRITICAL_DATA - Balance deltas, fee accounting, oracle pricing
//! 3_VENUES - External swap venue adapters
//! 4_LEDGER - ICRC-1/2 token plumbing
//! 5_INFORMATIONAL - Display and history views
//! 6_INFRASTRUCTURE - Errors, config, access, math
//!
//! A restricted set of operators deposits an input asset; the canister
//! routes it through one of two swap venues, measures what actually
//! arrived in custody, deducts the protocol fee, and forwards the net to
//! a beneficiary. A read path converts token amounts to USD via an
//! external median-price oracle.

// Import numbered modules with explicit paths
#[path = "1_CRITICAL_OPERATIONS/mod.rs"]
mod critical_operations_1;
use critical_operations_1 as critical_operations;

#[path = "2_CRITICAL_DATA/mod.rs"]
mod critical_data_2;
use critical_data_2 as critical_data;

#[path = "3_VENUES/mod.rs"]
mod venues_3;
use venues_3 as venues;

#[path = "4_LEDGER/mod.rs"]
mod ledger_4;
use ledger_4 as ledger;

#[path = "5_INFORMATIONAL/mod.rs"]
mod informational_5;
use informational_5 as informational;

#[path = "6_INFRASTRUCTURE/mod.rs"]
mod infrastructure_6;
use infrastructure_6 as infrastructure;

mod types;

use candid::{candid_method, Nat, Principal};
use ic_cdk::{init, post_upgrade, pre_upgrade, query, update};
use critical_operations::settlement::{self, VenueCall};
use infrastructure::{access, admin, config, registry, stable_storage, Result};
use types::config::{ConfigView, InitArgs, ProtocolConfig};
use types::receipts::{SettlementReceipt, SettlementRecord};
use types::venues::{AggregatorSwapArgs, RouteHop, RouteParams, SwapStep};

// ===== SWAP ENTRYPOINTS =====

/// Settle a swap through the single-call multi-route aggregator
#[update]
#[candid_method(update)]
#[allow(clippy::too_many_arguments)]
async fn swap_via_aggregator(
    input_asset: Principal,
    input_amount: Nat,
    output_asset: Principal,
    expected_output: Nat,
    min_output: Nat,
    beneficiary: Principal,
    integrator_fee_bps: u16,
    integrator_fee_recipient: Principal,
    routes: Vec<RouteHop>,
) -> Result<SettlementReceipt> {
    let caller = ic_cdk::caller();

    // Output always lands on our own account first so the delta can be
    // measured before payout
    let args = AggregatorSwapArgs {
        pay_token: input_asset,
        pay_amount: input_amount.clone(),
        receive_token: output_asset,
        expected_receive: expected_output,
        min_receive: min_output,
        receiver: ic_cdk::id(),
        integrator_fee_bps,
        integrator_fee_recipient,
        routes,
    };

    settlement::settle(
        caller,
        beneficiary,
        input_asset,
        input_amount,
        output_asset,
        VenueCall::Aggregator(args),
    )
    .await
}

/// Settle a swap through the route/params-array router
#[update]
#[candid_method(update)]
async fn swap_via_router(
    route_params: RouteParams,
    swap_steps: Vec<SwapStep>,
    beneficiary: Principal,
) -> Result<SettlementReceipt> {
    let caller = ic_cdk::caller();

    let input_asset = route_params.pay_token;
    let input_amount = route_params.pay_amount.clone();
    let output_asset = route_params.receive_token;

    settlement::settle(
        caller,
        beneficiary,
        input_asset,
        input_amount,
        output_asset,
        VenueCall::Router {
            route: route_params,
            steps: swap_steps,
        },
    )
    .await
}

// ===== OPERATOR MANAGEMENT =====

#[update]
#[candid_method(update)]
fn set_operator(address: Principal) -> Result<()> {
    let caller = ic_cdk::caller();
    access::set_operator(caller, address)?;
    ic_cdk::println!("📝 Operator granted: {}", address.to_text());
    Ok(())
}

#[update]
#[candid_method(update)]
fn remove_operator(address: Principal) -> Result<()> {
    let caller = ic_cdk::caller();
    access::remove_operator(caller, address)?;
    ic_cdk::println!("📝 Operator revoked: {}", address.to_text());
    Ok(())
}

#[query]
#[candid_method(query)]
fn is_operator(address: Principal) -> bool {
    access::is_operator(address)
}

// ===== PRICING =====

#[query]
#[candid_method(query)]
fn is_supported(asset: Principal) -> bool {
    registry::is_supported(asset)
}

/// USD value of `amount` of `asset` at the oracle's current median price
///
/// An `#[update]` because it makes a live inter-canister oracle call;
/// there is no cached price to serve from a query.
#[update]
#[candid_method(update)]
async fn token_value_in_usd(asset: Principal, amount: Nat) -> Result<Nat> {
    critical_data::token_value_in_usd(asset, amount).await
}

// ===== VIEWS =====

#[query]
#[candid_method(query)]
fn get_configuration() -> Result<ConfigView> {
    informational::display::get_configuration()
}

#[query]
#[candid_method(query)]
fn get_settlement_history_paginated(offset: u64, limit: u64) -> (Vec<SettlementRecord>, u64) {
    informational::display::get_settlement_history_paginated(offset, limit)
}

// ===== ADMIN CONTROLS =====

/// Emergency pause - stops settlements, leaves reads and operator
/// management available
#[update]
#[candid_method(update)]
fn set_emergency_pause(paused: bool) -> Result<()> {
    access::require_owner(ic_cdk::caller())?;
    admin::set_pause(paused);
    ic_cdk::println!(
        "{} Emergency pause {}",
        if paused { "🚨" } else { "✅" },
        if paused { "activated" } else { "deactivated" }
    );
    Ok(())
}

#[query]
#[candid_method(query)]
fn is_emergency_paused() -> bool {
    admin::is_paused()
}

// ===== INITIALIZATION =====

#[init]
fn init(args: InitArgs) {
    // Malformed construction is fatal: trap before any state is written
    if let Err(e) = config::validate_init_args(&args) {
        ic_cdk::trap(&format!("invalid init args: {}", e));
    }

    config::set_config(ProtocolConfig::from_init(&args));
    registry::init_feeds(&args.supported_assets, &args.feed_ids);

    ic_cdk::println!("===================================");
    ic_cdk::println!("Settlement Backend Initialized");
    ic_cdk::println!("Owner: {}", args.owner.to_text());
    ic_cdk::println!("Fee rate: {} bps", args.fee_rate_bps);
    ic_cdk::println!("Supported assets: {}", args.supported_assets.len());
    ic_cdk::println!("===================================");
}

#[pre_upgrade]
fn pre_upgrade() {
    ic_cdk::println!("===================================");
    ic_cdk::println!("Settlement Backend Pre-Upgrade");
    ic_cdk::println!("===================================");

    stable_storage::save_state(stable_storage::StableState {
        config: config::export_config(),
        operators: access::export_operators(),
        feeds: registry::export_feeds(),
        paused: admin::is_paused(),
        settlement_history: settlement::history::export_history(),
    });
}

#[post_upgrade]
fn post_upgrade() {
    ic_cdk::println!("===================================");
    ic_cdk::println!("Settlement Backend Post-Upgrade");
    ic_cdk::println!("===================================");

    let state = stable_storage::restore_state();

    if let Some(restored) = state.config {
        config::set_config(restored);
    } else {
        ic_cdk::println!("⚠️ WARNING: No configuration in stable state");
    }

    access::import_operators(state.operators);
    registry::import_feeds(state.feeds);
    admin::set_pause(state.paused);
    settlement::history::import_history(state.settlement_history);
}

// ===== CANDID EXPORT =====

ic_cdk::export_candid!();
