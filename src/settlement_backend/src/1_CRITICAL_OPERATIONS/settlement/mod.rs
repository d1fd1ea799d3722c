//! # Settlement orchestration
//!
//! Composes access control, custody transfer, venue execution, delta
//! measurement, fee extraction, and payout into one sequence shared by
//! both swap entrypoints:
//!
//! 1. Caller must be an operator
//! 2. Input amount must be non-zero
//! 3. Input asset must have a feed mapping
//! 4. Caller's allowance must cover the input amount
//! 5. Pull the input into custody (ICRC-2 transfer_from)
//! 6. Approve the venue for exactly the input amount
//! 7. Snapshot the output-asset custody balance
//! 8. Invoke the venue
//! 9. Measure the output delta against the snapshot
//! 10. Extract the protocol fee
//! 11. Pay the net amount to the beneficiary
//! 12. Record and return the settlement receipt
//!
//! ## Compensation
//!
//! The IC gives no automatic rollback across awaits, so failures after
//! custody transfer trigger reverse transfers: a failure before the venue
//! consumed the input refunds the input to the caller; a failure after
//! the swap returns the measured output to the caller. Either way no
//! custody persists past the invocation.

pub mod history;


use candid::{Nat, Principal};
use crate::critical_data::{custody, fees};
use crate::infrastructure::constants::{MEMO_PAYOUT, MEMO_PULL, MEMO_REFUND};
use crate::infrastructure::{
    access, admin, config, registry, EconomicError, Result, SettlementError, SettlementGuard,
};
use crate::ledger;
use crate::types::receipts::{SettlementReceipt, SettlementRecord, VenueKind};
use crate::types::venues::{AggregatorSwapArgs, RouteParams, SwapStep};
use crate::venues::{aggregator, router};

/// A fully-prepared venue invocation
pub enum VenueCall {
    Aggregator(AggregatorSwapArgs),
    Router { route: RouteParams, steps: Vec<SwapStep> },
}

impl VenueCall {
    fn kind(&self) -> VenueKind {
        match self {
            VenueCall::Aggregator(_) => VenueKind::Aggregator,
            VenueCall::Router { .. } => VenueKind::Router,
        }
    }
}

/// Steps (1)-(3): authorization and economic preconditions
///
/// Nothing has moved yet when this fails; the error surfaces as-is.
pub fn validate_request(caller: Principal, input_asset: Principal, input_amount: &Nat) -> Result<()> {
    access::require_operator(caller)?;
    admin::check_not_paused()?;

    if input_amount == &Nat::from(0u64) {
        return Err(SettlementError::Economic(EconomicError::ZeroAmount));
    }

    if !registry::is_supported(input_asset) {
        return Err(SettlementError::Economic(EconomicError::UnsupportedToken {
            asset: input_asset.to_text(),
        }));
    }

    Ok(())
}

/// Run one settlement end to end
pub async fn settle(
    caller: Principal,
    beneficiary: Principal,
    input_asset: Principal,
    input_amount: Nat,
    output_asset: Principal,
    call: VenueCall,
) -> Result<SettlementReceipt> {
    // Settlements serialize globally: custody balances and venue
    // approvals are shared, so a second swap inside the measurement
    // window would corrupt the delta
    let _guard = SettlementGuard::acquire(caller)?;

    let protocol = config::get_config()?;
    validate_request(caller, input_asset, &input_amount)?;

    let venue_kind = call.kind();
    let venue = match venue_kind {
        VenueKind::Aggregator => protocol.aggregator,
        VenueKind::Router => protocol.router,
    };

    ic_cdk::println!(
        "🔄 Settlement start via {}: {} {} → {} for {}",
        venue_kind.as_str(),
        input_amount,
        input_asset.to_text(),
        output_asset.to_text(),
        beneficiary.to_text()
    );

    // (4) Allowance must already cover the input
    let available = ledger::allowance_of(input_asset, caller, ic_cdk::id()).await?;
    if available < input_amount {
        return Err(SettlementError::Economic(EconomicError::InsufficientAllowance {
            required: input_amount.clone(),
            available,
        }));
    }

    // (5) Pull the input into custody
    ledger::pull_into_custody(input_asset, caller, input_amount.clone(), MEMO_PULL).await?;

    // (6)-(8) Approve, snapshot, invoke. The input is still in custody if
    // any of these fail: the venue only consumes it through its approval
    // inside a successful swap call.
    let before = match execute_venue_swap(venue, input_asset, output_asset, &input_amount, call).await {
        Ok(before) => before,
        Err(e) => {
            compensate(input_asset, caller, input_amount.clone(), &e).await;
            return Err(e);
        }
    };

    // (9) Measured delta is the only received-amount source of truth
    let received = match custody::measure(output_asset, &before).await {
        Ok(received) => received,
        Err(e) => {
            ic_cdk::println!(
                "🚨 Post-swap measurement failed; custody may hold unsettled output: {}",
                e
            );
            return Err(e);
        }
    };

    // (10) Fee extraction. The input is spent; failures from here return
    // the output still held in custody to the caller.
    let decimals = match ledger::decimals_of(output_asset).await {
        Ok(d) => d,
        Err(e) => {
            compensate(output_asset, caller, received.clone(), &e).await;
            return Err(e);
        }
    };

    let breakdown = match fees::extract_fee(
        output_asset,
        &received,
        protocol.fee_rate_bps,
        decimals,
        protocol.fee_collector,
    )
    .await
    {
        Ok(b) => b,
        Err(e) => {
            // Assessment failures and a rejected fee transfer both leave
            // the full delta in custody
            compensate(output_asset, caller, received.clone(), &e).await;
            return Err(e);
        }
    };

    // (11) Pay the net to the beneficiary
    if breakdown.net > Nat::from(0u64) {
        if let Err(e) = ledger::push_from_custody(
            output_asset,
            beneficiary,
            breakdown.net.clone(),
            MEMO_PAYOUT,
        )
        .await
        {
            // Fee already left custody; only the net remains to return
            compensate(output_asset, caller, breakdown.net.clone(), &e).await;
            return Err(e);
        }
    }

    // (12) Receipt
    let receipt = SettlementReceipt {
        input_asset,
        input_amount,
        output_asset,
        net_output: breakdown.net.clone(),
        beneficiary,
    };

    history::record(SettlementRecord {
        timestamp: ic_cdk::api::time(),
        operator: caller,
        venue: venue_kind,
        receipt: receipt.clone(),
        fee_paid: breakdown.fee,
    });

    ic_cdk::println!(
        "✅ Settlement complete: {} {} delivered to {} (fee extracted)",
        receipt.net_output,
        receipt.output_asset.to_text(),
        receipt.beneficiary.to_text()
    );

    Ok(receipt)
}

/// Steps (6)-(8); returns the pre-swap output-asset balance snapshot
async fn execute_venue_swap(
    venue: Principal,
    input_asset: Principal,
    output_asset: Principal,
    input_amount: &Nat,
    call: VenueCall,
) -> Result<Nat> {
    // The approval and the snapshot are independent; run them in parallel
    // to narrow the window between snapshot and venue call
    let approve_future = ledger::approve_exact(input_asset, venue, input_amount.clone());
    let snapshot_future = custody::own_balance(output_asset);
    let (approve_result, snapshot_result) = futures::join!(approve_future, snapshot_future);

    approve_result?;
    let before = snapshot_result?;

    match call {
        VenueCall::Aggregator(args) => aggregator::execute(venue, args).await?,
        VenueCall::Router { route, steps } => router::execute(venue, route, steps).await?,
    }

    Ok(before)
}

/// Reverse-transfer `amount` of `asset` back to `to` after a failure
///
/// A failed refund is logged loudly with the stranded amount; the error
/// that triggered compensation still surfaces to the caller.
async fn compensate(asset: Principal, to: Principal, amount: Nat, original: &SettlementError) {
    if amount == Nat::from(0u64) {
        return;
    }

    ic_cdk::println!(
        "↩️ Compensating after failure ({}): returning {} of {} to {}",
        original,
        amount,
        asset.to_text(),
        to.to_text()
    );

    match ledger::push_from_custody(asset, to, amount.clone(), MEMO_REFUND).await {
        Ok(Some(block)) => {
            ic_cdk::println!("✅ Compensation transfer complete (block: {})", block);
        }
        Ok(None) => {
            ic_cdk::println!(
                "⚠️ Compensation skipped: ledger fee exceeds the {} remaining",
                amount
            );
        }
        Err(refund_err) => {
            ic_cdk::println!(
                "🚨 COMPENSATION FAILED: {} of {} stranded in custody for {}: {}",
                amount,
                asset.to_text(),
                to.to_text(),
                refund_err
            );
        }
    }
}
