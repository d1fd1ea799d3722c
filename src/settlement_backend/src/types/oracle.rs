//! Price oracle interface types

use candid::{CandidType, Deserialize, Nat};

/// A median-aggregated spot price for one feed
///
/// `price` is an integer scaled by `10^decimals`; a quote of
/// `{ price: 250_000_000, decimals: 8 }` means $2.50.
#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct PriceQuote {
    pub price: Nat,
    pub decimals: u32,
}

#[derive(CandidType, Deserialize, Clone, Debug)]
pub enum MedianPriceResult {
    Ok(PriceQuote),
    Err(String),
}
