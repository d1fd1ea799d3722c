//! Aggregator adapter: single-call multi-route venue
//!
//! One `swap` call carries the full route list and an integrator fee
//! passthrough. The venue answers with a bare success flag; `false` is a
//! failure outcome, not a rejection. Output is always directed at the
//! canister's own account so the delta meter sees it.

use candid::Principal;
use crate::infrastructure::{ExternalCallError, Result, SettlementError};
use crate::types::venues::AggregatorSwapArgs;

/// Execute a swap on the aggregator
///
/// Funds must already be in custody with an exact-amount approval granted
/// to the venue before this is called.
pub async fn execute(venue: Principal, args: AggregatorSwapArgs) -> Result<()> {
    ic_cdk::println!(
        "🔄 Aggregator swap: {} {} → {} ({} hops, min out {})",
        args.pay_amount,
        args.pay_token.to_text(),
        args.receive_token.to_text(),
        args.routes.len(),
        args.min_receive
    );

    let (ok,): (bool,) = ic_cdk::call(venue, "swap", (args,))
        .await
        .map_err(|(code, msg)| {
            ic_cdk::println!("❌ Aggregator call failed: {:?} - {}", code, msg);
            SettlementError::External(ExternalCallError::SwapFailed {
                venue: venue.to_text(),
                reason: format!("call failed: {} - {}", code as u32, msg),
            })
        })?;

    if !ok {
        ic_cdk::println!("❌ Aggregator reported swap failure");
        return Err(SettlementError::External(ExternalCallError::SwapFailed {
            venue: venue.to_text(),
            reason: "venue returned false".to_string(),
        }));
    }

    ic_cdk::println!("✅ Aggregator swap returned success");
    Ok(())
}
