//! Venue approvals via ICRC-2 `icrc2_approve`
//!
//! Each settlement grants the venue spending rights over exactly the input
//! amount, never an unlimited allowance, and the grant expires on its own
//! if the venue never draws it down.

use candid::{Nat, Principal};
use serde_bytes::ByteBuf;
use crate::infrastructure::constants::APPROVAL_EXPIRY_NANOS;
use crate::infrastructure::{ExternalCallError, Result, SettlementError};
use crate::types::icrc::{Account, ApproveArgs, ApproveResult};

/// Approve `spender` for exactly `amount` of `asset`
///
/// Returns the approval block index.
pub async fn approve_exact(asset: Principal, spender: Principal, amount: Nat) -> Result<Nat> {
    ic_cdk::println!(
        "📝 Approving {} of {} for venue {}",
        amount,
        asset.to_text(),
        spender.to_text()
    );

    let args = ApproveArgs {
        from_subaccount: None,
        spender: Account::of(spender),
        amount: amount.clone(),
        expected_allowance: None,
        expires_at: Some(ic_cdk::api::time() + APPROVAL_EXPIRY_NANOS),
        fee: None,
        memo: Some(ByteBuf::from(&b"venue approval"[..])),
        created_at_time: Some(ic_cdk::api::time()),
    };

    let (result,): (ApproveResult,) = ic_cdk::call(asset, "icrc2_approve", (args,))
        .await
        .map_err(|(code, msg)| {
            ic_cdk::println!("❌ Approval call failed: {:?} - {}", code, msg);
            SettlementError::External(ExternalCallError::LedgerFailed {
                asset: asset.to_text(),
                operation: "icrc2_approve".to_string(),
                reason: format!("{} - {}", code as u32, msg),
            })
        })?;

    match result {
        ApproveResult::Ok(block) => {
            ic_cdk::println!("✅ Approval complete (block: {})", block);
            Ok(block)
        }
        ApproveResult::Err(e) => {
            ic_cdk::println!("❌ Approval rejected: {:?}", e);
            Err(SettlementError::External(ExternalCallError::LedgerFailed {
                asset: asset.to_text(),
                operation: "icrc2_approve".to_string(),
                reason: format!("{:?}", e),
            }))
        }
    }
}
