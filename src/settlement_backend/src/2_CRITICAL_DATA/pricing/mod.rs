//! Price oracle adapter
//!
//! Every price is a live median-aggregation query against the external
//! oracle; nothing is cached and no staleness check is applied. The USD
//! conversion is integer floor math over the oracle's own decimal
//! exponent.

use candid::{Nat, Principal};
use crate::infrastructure::config;
use crate::infrastructure::registry;
use crate::infrastructure::{
    multiply_and_divide, pow10, EconomicError, ExternalCallError, Result, SettlementError,
};
use crate::types::oracle::{MedianPriceResult, PriceQuote};

/// Query the oracle for the median spot price of `feed_id`
pub async fn median_price(feed_id: &str) -> Result<PriceQuote> {
    let config = config::get_config()?;

    let (result,): (MedianPriceResult,) =
        ic_cdk::call(config.oracle, "get_median_price", (feed_id,))
            .await
            .map_err(|(code, msg)| {
                ic_cdk::println!("❌ Oracle call failed: {:?} - {}", code, msg);
                SettlementError::External(ExternalCallError::OracleFailed {
                    feed: feed_id.to_string(),
                    reason: format!("{} - {}", code as u32, msg),
                })
            })?;

    match result {
        MedianPriceResult::Ok(quote) => Ok(quote),
        MedianPriceResult::Err(e) => Err(SettlementError::External(ExternalCallError::OracleFailed {
            feed: feed_id.to_string(),
            reason: e,
        })),
    }
}

/// USD value of `amount` of `asset`: price × amount ÷ 10^decimals
///
/// Requires a feed mapping for `asset`. No guard is applied to a zero
/// decimal exponent from the oracle; 10^0 divides by one.
pub async fn token_value_in_usd(asset: Principal, amount: Nat) -> Result<Nat> {
    let feed_id = registry::feed_for(asset).ok_or_else(|| {
        SettlementError::Economic(EconomicError::UnsupportedToken {
            asset: asset.to_text(),
        })
    })?;

    let quote = median_price(&feed_id).await?;
    usd_value(&quote, &amount)
}

/// Pure conversion step, separated for testability
pub fn usd_value(quote: &PriceQuote, amount: &Nat) -> Result<Nat> {
    multiply_and_divide(&quote.price, amount, &pow10(quote.decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_value_floor_math() {
        // price $2.50 at 8 decimals, amount 3 -> 7.50 -> floor over 10^8
        let quote = PriceQuote {
            price: Nat::from(250_000_000u64),
            decimals: 8,
        };
        let value = usd_value(&quote, &Nat::from(3u64)).unwrap();
        assert_eq!(value, Nat::from(7u64));
    }

    #[test]
    fn test_usd_value_zero_decimals_divides_by_one() {
        let quote = PriceQuote {
            price: Nat::from(5u64),
            decimals: 0,
        };
        let value = usd_value(&quote, &Nat::from(7u64)).unwrap();
        assert_eq!(value, Nat::from(35u64));
    }

    #[test]
    fn test_usd_value_large_amounts_do_not_overflow() {
        let quote = PriceQuote {
            price: Nat::from(u64::MAX),
            decimals: 18,
        };
        let value = usd_value(&quote, &Nat::from(u64::MAX)).unwrap();
        // (u64::MAX)^2 / 10^18 stays well-formed under BigUint
        assert!(value > Nat::from(0u64));
    }
}
