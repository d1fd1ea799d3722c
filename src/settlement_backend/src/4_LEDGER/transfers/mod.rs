//! Ledger transfers: custody pull, push payout, compensation refund
//!
//! The pull uses ICRC-2 `icrc2_transfer_from` against the caller's
//! pre-existing allowance; pushes use plain ICRC-1 `icrc1_transfer` from
//! the canister's default account. Custody holds exactly the measured
//! delta, so every push nets the ledger's own transfer fee out of the
//! delivered amount rather than asking custody to cover it on top.

use candid::{Nat, Principal};
use serde_bytes::ByteBuf;
use crate::infrastructure::{checked_sub, ExternalCallError, Result, SettlementError};
use crate::types::icrc::{
    Account, TransferArgs, TransferFromArgs, TransferFromResult, TransferResult,
};

fn ledger_err(asset: Principal, operation: &str, reason: String) -> SettlementError {
    SettlementError::External(ExternalCallError::LedgerFailed {
        asset: asset.to_text(),
        operation: operation.to_string(),
        reason,
    })
}

/// Pull `amount` of `asset` from `from` into canister custody
///
/// Returns the ledger block index of the transfer.
pub async fn pull_into_custody(
    asset: Principal,
    from: Principal,
    amount: Nat,
    memo: &'static [u8],
) -> Result<Nat> {
    let args = TransferFromArgs {
        spender_subaccount: None,
        from: Account::of(from),
        to: Account::of(ic_cdk::id()),
        amount: amount.clone(),
        fee: None,
        memo: Some(ByteBuf::from(memo)),
        created_at_time: Some(ic_cdk::api::time()),
    };

    let (result,): (TransferFromResult,) = ic_cdk::call(asset, "icrc2_transfer_from", (args,))
        .await
        .map_err(|(code, msg)| {
            ic_cdk::println!("❌ Custody pull call failed: {:?} - {}", code, msg);
            ledger_err(asset, "icrc2_transfer_from", format!("{} - {}", code as u32, msg))
        })?;

    match result {
        TransferFromResult::Ok(block) => {
            ic_cdk::println!("✅ Pulled {} into custody (block: {})", amount, block);
            Ok(block)
        }
        TransferFromResult::Err(e) => {
            ic_cdk::println!("❌ Custody pull rejected: {:?}", e);
            Err(ledger_err(asset, "icrc2_transfer_from", format!("{:?}", e)))
        }
    }
}

/// Amount actually deliverable once the ledger fee is netted out
///
/// `None` when the fee swallows the whole amount; there is nothing worth
/// moving and a zero-amount transfer would be rejected anyway.
fn deliverable(amount: &Nat, ledger_fee: &Nat) -> Option<Nat> {
    checked_sub(amount, ledger_fee).filter(|send| send > &Nat::from(0u64))
}

/// Push `amount` of `asset` from custody to `to`
///
/// The recipient receives `amount` minus the ledger's transfer fee, so
/// the total drawn from custody is exactly `amount`. Returns the block
/// index of the transfer, or `None` when the fee left nothing to send.
pub async fn push_from_custody(
    asset: Principal,
    to: Principal,
    amount: Nat,
    memo: &'static [u8],
) -> Result<Option<Nat>> {
    let ledger_fee = super::queries::transfer_fee_of(asset).await?;
    let send = match deliverable(&amount, &ledger_fee) {
        Some(send) => send,
        None => {
            ic_cdk::println!(
                "⚠️ Push of {} skipped: ledger fee {} leaves nothing to deliver",
                amount,
                ledger_fee
            );
            return Ok(None);
        }
    };

    let args = TransferArgs {
        from_subaccount: None,
        to: Account::of(to),
        amount: send,
        fee: Some(ledger_fee),
        memo: Some(ByteBuf::from(memo)),
        created_at_time: Some(ic_cdk::api::time()),
    };

    let (result,): (TransferResult,) = ic_cdk::call(asset, "icrc1_transfer", (args,))
        .await
        .map_err(|(code, msg)| {
            ic_cdk::println!("❌ Custody push call failed: {:?} - {}", code, msg);
            ledger_err(asset, "icrc1_transfer", format!("{} - {}", code as u32, msg))
        })?;

    match result {
        TransferResult::Ok(block) => Ok(Some(block)),
        TransferResult::Err(e) => {
            ic_cdk::println!("❌ Custody push rejected: {:?}", e);
            Err(ledger_err(asset, "icrc1_transfer", format!("{:?}", e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::deliverable;
    use candid::Nat;

    #[test]
    fn test_deliverable_nets_out_ledger_fee() {
        assert_eq!(
            deliverable(&Nat::from(1_000_000u64), &Nat::from(10_000u64)),
            Some(Nat::from(990_000u64))
        );
    }

    #[test]
    fn test_deliverable_zero_fee_passes_through() {
        let amount = Nat::from(42u64);
        assert_eq!(deliverable(&amount, &Nat::from(0u64)), Some(amount.clone()));
    }

    #[test]
    fn test_fee_swallowing_amount_delivers_nothing() {
        assert_eq!(deliverable(&Nat::from(10_000u64), &Nat::from(10_000u64)), None);
        assert_eq!(deliverable(&Nat::from(9_999u64), &Nat::from(10_000u64)), None);
    }
}
