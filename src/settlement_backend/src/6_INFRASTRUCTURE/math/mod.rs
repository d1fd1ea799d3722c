//! Pure integer math - no I/O, no async
//!
//! All settlement arithmetic is integer-only with floor division, carried
//! out over `BigUint` so token amounts of any magnitude cannot overflow.

use candid::Nat;
use num_bigint::BigUint;
use num_traits::Zero;
use crate::infrastructure::constants::FEE_FORMULA_DIVISOR;
use crate::infrastructure::errors::{Result, SettlementError};

/// 10^exp as a Nat
pub fn pow10(exp: u32) -> Nat {
    Nat(BigUint::from(10u32).pow(exp))
}

/// (a × b) ÷ c with arbitrary precision, floor division
pub fn multiply_and_divide(a: &Nat, b: &Nat, c: &Nat) -> Result<Nat> {
    if c.0.is_zero() {
        return Err(SettlementError::Other(format!(
            "division by zero in ({} × {}) ÷ {}",
            a, b, c
        )));
    }
    let result = (a.0.clone() * b.0.clone()) / c.0.clone();
    Ok(Nat(result))
}

/// Flat protocol fee: bps × 10^decimals ÷ 100
///
/// Note this scales with the output asset's decimal exponent, not with the
/// received amount: the fee is a fixed quantity per settlement, not a
/// percentage of the delta. Preserved literally from the reference
/// behavior; see DESIGN.md for the known concern with small deltas.
pub fn flat_fee(fee_rate_bps: u16, token_decimals: u32) -> Nat {
    let scaled = BigUint::from(fee_rate_bps) * BigUint::from(10u32).pow(token_decimals);
    Nat(scaled / BigUint::from(FEE_FORMULA_DIVISOR))
}

/// a − b, or None on underflow
pub fn checked_sub(a: &Nat, b: &Nat) -> Option<Nat> {
    if b > a {
        None
    } else {
        Some(Nat(a.0.clone() - b.0.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), Nat::from(1u64));
        assert_eq!(pow10(6), Nat::from(1_000_000u64));
        assert_eq!(pow10(8), Nat::from(100_000_000u64));
    }

    #[test]
    fn test_multiply_and_divide_floors() {
        // 7 × 3 ÷ 2 = 10 (floor of 10.5)
        let r = multiply_and_divide(&Nat::from(7u64), &Nat::from(3u64), &Nat::from(2u64)).unwrap();
        assert_eq!(r, Nat::from(10u64));
    }

    #[test]
    fn test_multiply_and_divide_rejects_zero_divisor() {
        assert!(multiply_and_divide(&Nat::from(1u64), &Nat::from(1u64), &Nat::from(0u64)).is_err());
    }

    #[test]
    fn test_multiply_and_divide_large_values() {
        // Values beyond u64 must not overflow
        let a = Nat::from(u64::MAX);
        let b = Nat::from(u64::MAX);
        let c = Nat::from(1u64);
        let r = multiply_and_divide(&a, &b, &c).unwrap();
        assert_eq!(r, Nat(BigUint::from(u64::MAX) * BigUint::from(u64::MAX)));
    }

    #[test]
    fn test_flat_fee_formula() {
        // 50 bps on a 6-decimal asset: 50 × 10^6 / 100 = 500_000
        assert_eq!(flat_fee(50, 6), Nat::from(500_000u64));
        // 100 bps on an 8-decimal asset: 100 × 10^8 / 100 = 10^8
        assert_eq!(flat_fee(100, 8), Nat::from(100_000_000u64));
        // Zero rate yields zero fee
        assert_eq!(flat_fee(0, 8), Nat::from(0u64));
    }

    #[test]
    fn test_flat_fee_floors() {
        // 1 bps on a 1-decimal asset: 1 × 10 / 100 = 0 (floor)
        assert_eq!(flat_fee(1, 1), Nat::from(0u64));
        // 25 bps on a 2-decimal asset: 25 × 100 / 100 = 25
        assert_eq!(flat_fee(25, 2), Nat::from(25u64));
    }

    #[test]
    fn test_checked_sub() {
        assert_eq!(
            checked_sub(&Nat::from(10u64), &Nat::from(3u64)),
            Some(Nat::from(7u64))
        );
        assert_eq!(
            checked_sub(&Nat::from(5u64), &Nat::from(5u64)),
            Some(Nat::from(0u64))
        );
        assert_eq!(checked_sub(&Nat::from(3u64), &Nat::from(10u64)), None);
    }
}
