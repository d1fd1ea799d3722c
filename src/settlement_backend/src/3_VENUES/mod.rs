//! Venue adapters - external swap execution
//! Each adapter wraps one router behind a uniform "execute swap" contract

pub mod aggregator;
pub mod router;
