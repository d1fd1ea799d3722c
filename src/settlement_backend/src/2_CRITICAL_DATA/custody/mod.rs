//! Balance-delta measurement over the canister's own custody account
//!
//! The amount received from a venue is always derived from the canister's
//! own balance before and after the venue call, never from a figure the
//! venue reports. This defends against venues that claim optimistic or
//! manipulated output amounts. The measurement window is protected by the
//! global settlement guard: only one settlement may touch custody at a
//! time.

use candid::{Nat, Principal};
use crate::infrastructure::{checked_sub, ExternalCallError, Result, SettlementError};
use crate::ledger;
use crate::types::icrc::Account;

/// Snapshot the canister's own balance of `asset`
pub async fn own_balance(asset: Principal) -> Result<Nat> {
    ledger::balance_of(asset, Account::of(ic_cdk::id())).await
}

/// Measure the amount received since `before` was snapshotted
///
/// A current balance below the snapshot means the venue drained custody
/// instead of delivering output; that settlement cannot proceed.
pub async fn measure(asset: Principal, before: &Nat) -> Result<Nat> {
    let current = own_balance(asset).await?;
    match checked_sub(&current, before) {
        Some(delta) => {
            ic_cdk::println!(
                "📊 Measured output delta: {} (before: {}, after: {})",
                delta,
                before,
                current
            );
            Ok(delta)
        }
        None => Err(SettlementError::External(ExternalCallError::SwapFailed {
            venue: "unknown".to_string(),
            reason: format!(
                "custody balance of {} decreased during swap ({} -> {})",
                asset.to_text(),
                before,
                current
            ),
        })),
    }
}
