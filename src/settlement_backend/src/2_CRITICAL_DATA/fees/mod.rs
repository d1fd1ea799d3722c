//! Protocol fee assessment and extraction
//!
//! The fee is a flat quantity per settlement: bps × 10^decimals ÷ 100,
//! scaled by the output asset's decimal exponent rather than by the
//! received amount. The formula is preserved literally from the reference
//! behavior (see DESIGN.md); a fee larger than the measured delta aborts
//! the settlement before any transfer.

use candid::{Nat, Principal};
use crate::infrastructure::constants::MEMO_FEE;
use crate::infrastructure::{checked_sub, flat_fee, EconomicError, Result, SettlementError};
use crate::ledger;

/// Outcome of a fee assessment over a measured delta
#[derive(Clone, Debug, PartialEq)]
pub struct FeeBreakdown {
    pub fee: Nat,
    pub net: Nat,
}

/// Pure assessment: compute fee and net without moving anything
///
/// Fails with `InvalidDecimals` on a zero decimal exponent and with
/// `FeeExceedsReceived` when the flat fee cannot be covered by the delta.
pub fn assess(
    output_asset: Principal,
    received: &Nat,
    fee_rate_bps: u16,
    token_decimals: u8,
) -> Result<FeeBreakdown> {
    if token_decimals == 0 {
        return Err(SettlementError::Economic(EconomicError::InvalidDecimals {
            asset: output_asset.to_text(),
        }));
    }

    let fee = flat_fee(fee_rate_bps, token_decimals as u32);
    let net = checked_sub(received, &fee).ok_or_else(|| {
        SettlementError::Economic(EconomicError::FeeExceedsReceived {
            fee: fee.clone(),
            received: received.clone(),
        })
    })?;

    Ok(FeeBreakdown { fee, net })
}

/// Assess, transfer the fee to the collector, and return the net amount
///
/// The zero-fee case (rate of 0 bps) skips the ledger call entirely. On
/// fee-charging ledgers the transfer's own fee comes out of the
/// collector's share, leaving the net untouched.
pub async fn extract_fee(
    output_asset: Principal,
    received: &Nat,
    fee_rate_bps: u16,
    token_decimals: u8,
    fee_collector: Principal,
) -> Result<FeeBreakdown> {
    let breakdown = assess(output_asset, received, fee_rate_bps, token_decimals)?;

    if breakdown.fee > Nat::from(0u64) {
        let delivered =
            ledger::push_from_custody(output_asset, fee_collector, breakdown.fee.clone(), MEMO_FEE)
                .await?;
        if delivered.is_some() {
            ic_cdk::println!(
                "💰 Fee {} sent to collector {}, net {}",
                breakdown.fee,
                fee_collector.to_text(),
                breakdown.net
            );
        }
    }

    Ok(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset() -> Principal {
        Principal::from_slice(&[9; 29])
    }

    #[test]
    fn test_assess_standard_case() {
        // 50 bps, 6-decimal output, delta comfortably above the fee
        let received = Nat::from(2_000_000u64);
        let b = assess(asset(), &received, 50, 6).unwrap();
        assert_eq!(b.fee, Nat::from(500_000u64));
        assert_eq!(b.net, Nat::from(1_500_000u64));
    }

    #[test]
    fn test_assess_rejects_zero_decimals() {
        let received = Nat::from(1_000u64);
        assert!(matches!(
            assess(asset(), &received, 50, 0),
            Err(SettlementError::Economic(EconomicError::InvalidDecimals { .. }))
        ));
    }

    #[test]
    fn test_fee_exceeding_delta_aborts() {
        // The flat formula mismatch against small deltas: 50 bps on a
        // 6-decimal asset charges 500_000 regardless of how little the
        // venue actually delivered. A delta of 500 must abort.
        let received = Nat::from(500u64);
        let err = assess(asset(), &received, 50, 6).unwrap_err();
        assert_eq!(
            err,
            SettlementError::Economic(EconomicError::FeeExceedsReceived {
                fee: Nat::from(500_000u64),
                received: Nat::from(500u64),
            })
        );
    }

    #[test]
    fn test_fee_equal_to_delta_yields_zero_net() {
        let received = Nat::from(500_000u64);
        let b = assess(asset(), &received, 50, 6).unwrap();
        assert_eq!(b.net, Nat::from(0u64));
    }

    #[test]
    fn test_zero_rate_charges_nothing() {
        let received = Nat::from(42u64);
        let b = assess(asset(), &received, 0, 6).unwrap();
        assert_eq!(b.fee, Nat::from(0u64));
        assert_eq!(b.net, received);
    }
}
