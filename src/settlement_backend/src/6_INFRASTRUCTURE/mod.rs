//! Infrastructure - shared utilities and state
//! Foundation layer for all other zones

pub mod access;
pub mod admin;
pub mod config;
pub mod constants;
pub mod errors;
pub mod math;
pub mod registry;
pub mod reentrancy;
pub mod stable_storage;

// Re-export commonly used items
pub use constants::*;
pub use errors::{
    AuthError, ConfigError, EconomicError, ExternalCallError, Result, SettlementError,
    StateConflictError,
};
pub use math::{checked_sub, flat_fee, multiply_and_divide, pow10};
pub use reentrancy::SettlementGuard;
