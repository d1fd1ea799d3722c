//! Read-only ledger queries: balance, allowance, decimals, transfer fee

use candid::{Nat, Principal};
use crate::infrastructure::{ExternalCallError, Result, SettlementError};
use crate::types::icrc::{Account, Allowance, AllowanceArgs};

fn ledger_err(asset: Principal, operation: &str, reason: String) -> SettlementError {
    SettlementError::External(ExternalCallError::LedgerFailed {
        asset: asset.to_text(),
        operation: operation.to_string(),
        reason,
    })
}

/// Balance of an arbitrary account on `asset`'s ledger
pub async fn balance_of(asset: Principal, account: Account) -> Result<Nat> {
    let (balance,): (Nat,) = ic_cdk::call(asset, "icrc1_balance_of", (account,))
        .await
        .map_err(|(code, msg)| {
            ledger_err(asset, "icrc1_balance_of", format!("{} - {}", code as u32, msg))
        })?;
    Ok(balance)
}

/// Current allowance granted by `owner` to `spender` on `asset`'s ledger
pub async fn allowance_of(asset: Principal, owner: Principal, spender: Principal) -> Result<Nat> {
    let args = AllowanceArgs {
        account: Account::of(owner),
        spender: Account::of(spender),
    };
    let (allowance,): (Allowance,) = ic_cdk::call(asset, "icrc2_allowance", (args,))
        .await
        .map_err(|(code, msg)| {
            ledger_err(asset, "icrc2_allowance", format!("{} - {}", code as u32, msg))
        })?;
    Ok(allowance.allowance)
}

/// Fee the ledger itself charges per transfer of `asset`
pub async fn transfer_fee_of(asset: Principal) -> Result<Nat> {
    let (fee,): (Nat,) = ic_cdk::call(asset, "icrc1_fee", ())
        .await
        .map_err(|(code, msg)| {
            ledger_err(asset, "icrc1_fee", format!("{} - {}", code as u32, msg))
        })?;
    Ok(fee)
}

/// Decimal exponent of `asset`
pub async fn decimals_of(asset: Principal) -> Result<u8> {
    let (decimals,): (u8,) = ic_cdk::call(asset, "icrc1_decimals", ())
        .await
        .map_err(|(code, msg)| {
            ledger_err(asset, "icrc1_decimals", format!("{} - {}", code as u32, msg))
        })?;
    Ok(decimals)
}
