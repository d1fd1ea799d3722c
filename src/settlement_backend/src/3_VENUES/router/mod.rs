//! Router adapter: route-params / per-hop array venue
//!
//! `execute_route` takes a route record plus one parameter record per hop
//! and signals failure by rejecting the call rather than returning a flag.
//! The router does report an output amount, but it is discarded: the
//! balance delta on custody is the only received-amount source of truth.

use candid::{Nat, Principal};
use crate::infrastructure::{ExternalCallError, Result, SettlementError};
use crate::types::venues::{RouteParams, SwapStep};

/// Execute a swap on the router
///
/// Funds must already be in custody with an exact-amount approval granted
/// to the venue before this is called.
pub async fn execute(venue: Principal, route: RouteParams, steps: Vec<SwapStep>) -> Result<()> {
    ic_cdk::println!(
        "🔄 Router swap: {} {} → {} ({} steps)",
        route.pay_amount,
        route.pay_token.to_text(),
        route.receive_token.to_text(),
        steps.len()
    );

    // The claimed output in the reply is intentionally unused.
    let (_claimed,): (Nat,) = ic_cdk::call(venue, "execute_route", (route, steps))
        .await
        .map_err(|(code, msg)| {
            ic_cdk::println!("❌ Router call rejected: {:?} - {}", code, msg);
            SettlementError::External(ExternalCallError::SwapRejected {
                venue: venue.to_text(),
                reason: format!("{} - {}", code as u32, msg),
            })
        })?;

    ic_cdk::println!("✅ Router swap call returned");
    Ok(())
}
