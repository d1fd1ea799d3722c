//! Error taxonomy for the settlement canister
//!
//! One top-level enum wraps per-category sub-enums. Nothing is caught and
//! retried internally: every error aborts the current invocation and
//! surfaces to the caller in the `Err` arm of the candid result.

use candid::{CandidType, Deserialize, Nat};
use std::fmt;

pub type Result<T> = std::result::Result<T, SettlementError>;

#[derive(CandidType, Deserialize, Clone, Debug, PartialEq)]
pub enum SettlementError {
    Config(ConfigError),
    Auth(AuthError),
    StateConflict(StateConflictError),
    Economic(EconomicError),
    External(ExternalCallError),
    Other(String),
}

/// Malformed initialization or missing configuration
#[derive(CandidType, Deserialize, Clone, Debug, PartialEq)]
pub enum ConfigError {
    NotInitialized,
    EmptyAssetList,
    ListLengthMismatch { assets: u64, feeds: u64 },
    InvalidFeeRate { bps: u16 },
}

/// Caller lacks the required identity
#[derive(CandidType, Deserialize, Clone, Debug, PartialEq)]
pub enum AuthError {
    NotOwner { caller: String },
    InvalidSender { caller: String },
}

/// Operator bookkeeping and in-flight settlement conflicts
#[derive(CandidType, Deserialize, Clone, Debug, PartialEq)]
pub enum StateConflictError {
    ExistingAddress { address: String },
    NonExistingAddress { address: String },
    SettlementInProgress { operator: String },
}

/// Economic preconditions the settlement refuses to violate
#[derive(CandidType, Deserialize, Clone, Debug, PartialEq)]
pub enum EconomicError {
    ZeroAmount,
    UnsupportedToken { asset: String },
    InsufficientAllowance { required: Nat, available: Nat },
    InvalidDecimals { asset: String },
    FeeExceedsReceived { fee: Nat, received: Nat },
    Paused,
}

/// A collaborator call failed or reported failure
#[derive(CandidType, Deserialize, Clone, Debug, PartialEq)]
pub enum ExternalCallError {
    SwapFailed { venue: String, reason: String },
    SwapRejected { venue: String, reason: String },
    OracleFailed { feed: String, reason: String },
    LedgerFailed { asset: String, operation: String, reason: String },
}

impl fmt::Display for SettlementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettlementError::Config(e) => write!(f, "Config error: {}", e),
            SettlementError::Auth(e) => write!(f, "Authorization error: {}", e),
            SettlementError::StateConflict(e) => write!(f, "State conflict: {}", e),
            SettlementError::Economic(e) => write!(f, "Economic validation error: {}", e),
            SettlementError::External(e) => write!(f, "External call error: {}", e),
            SettlementError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotInitialized => {
                write!(f, "canister configuration not initialized")
            }
            ConfigError::EmptyAssetList => {
                write!(f, "supported asset list must not be empty")
            }
            ConfigError::ListLengthMismatch { assets, feeds } => {
                write!(f, "asset/feed list length mismatch: {} assets vs {} feeds", assets, feeds)
            }
            ConfigError::InvalidFeeRate { bps } => {
                write!(f, "fee rate {} bps exceeds 10000", bps)
            }
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::NotOwner { caller } => {
                write!(f, "{} is not the owner", caller)
            }
            AuthError::InvalidSender { caller } => {
                write!(f, "{} is not an authorized operator", caller)
            }
        }
    }
}

impl fmt::Display for StateConflictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateConflictError::ExistingAddress { address } => {
                write!(f, "{} is already an operator", address)
            }
            StateConflictError::NonExistingAddress { address } => {
                write!(f, "{} is not an operator", address)
            }
            StateConflictError::SettlementInProgress { operator } => {
                write!(f, "a settlement initiated by {} is still in flight", operator)
            }
        }
    }
}

impl fmt::Display for EconomicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EconomicError::ZeroAmount => {
                write!(f, "input amount must be non-zero")
            }
            EconomicError::UnsupportedToken { asset } => {
                write!(f, "asset {} has no price feed mapping", asset)
            }
            EconomicError::InsufficientAllowance { required, available } => {
                write!(f, "allowance {} is below required {}", available, required)
            }
            EconomicError::InvalidDecimals { asset } => {
                write!(f, "asset {} reports zero decimals", asset)
            }
            EconomicError::FeeExceedsReceived { fee, received } => {
                write!(f, "protocol fee {} exceeds received amount {}", fee, received)
            }
            EconomicError::Paused => {
                write!(f, "settlement is paused")
            }
        }
    }
}

impl fmt::Display for ExternalCallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExternalCallError::SwapFailed { venue, reason } => {
                write!(f, "{} swap failed: {}", venue, reason)
            }
            ExternalCallError::SwapRejected { venue, reason } => {
                write!(f, "{} rejected the swap call: {}", venue, reason)
            }
            ExternalCallError::OracleFailed { feed, reason } => {
                write!(f, "oracle query for feed {} failed: {}", feed, reason)
            }
            ExternalCallError::LedgerFailed { asset, operation, reason } => {
                write!(f, "ledger {} failed on {}: {}", operation, asset, reason)
            }
        }
    }
}
