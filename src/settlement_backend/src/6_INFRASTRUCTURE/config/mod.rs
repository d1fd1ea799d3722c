//! Configuration store
//!
//! Holds the protocol configuration singleton set at init. The settlement
//! path only ever reads it; the only writers are `init` and the upgrade
//! restore path.

use std::cell::RefCell;
use crate::infrastructure::constants::MAX_FEE_RATE_BPS;
use crate::infrastructure::errors::{ConfigError, Result, SettlementError};
use crate::types::config::{InitArgs, ProtocolConfig};

thread_local! {
    static CONFIG: RefCell<Option<ProtocolConfig>> = RefCell::new(None);
}

/// Validate constructor arguments before any state is written
///
/// Violations here are fatal at construction: `init` traps on them.
pub fn validate_init_args(args: &InitArgs) -> Result<()> {
    if args.supported_assets.is_empty() {
        return Err(SettlementError::Config(ConfigError::EmptyAssetList));
    }
    if args.supported_assets.len() != args.feed_ids.len() {
        return Err(SettlementError::Config(ConfigError::ListLengthMismatch {
            assets: args.supported_assets.len() as u64,
            feeds: args.feed_ids.len() as u64,
        }));
    }
    if args.fee_rate_bps > MAX_FEE_RATE_BPS {
        return Err(SettlementError::Config(ConfigError::InvalidFeeRate {
            bps: args.fee_rate_bps,
        }));
    }
    Ok(())
}

pub fn set_config(config: ProtocolConfig) {
    CONFIG.with(|c| *c.borrow_mut() = Some(config));
}

pub fn get_config() -> Result<ProtocolConfig> {
    CONFIG.with(|c| {
        c.borrow()
            .clone()
            .ok_or(SettlementError::Config(ConfigError::NotInitialized))
    })
}

/// Export for stable storage (pre-upgrade)
pub fn export_config() -> Option<ProtocolConfig> {
    CONFIG.with(|c| c.borrow().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use candid::Principal;

    fn test_args() -> InitArgs {
        InitArgs {
            owner: Principal::anonymous(),
            fee_collector: Principal::anonymous(),
            fee_rate_bps: 50,
            aggregator: Principal::anonymous(),
            router: Principal::anonymous(),
            oracle: Principal::anonymous(),
            supported_assets: vec![Principal::anonymous()],
            feed_ids: vec!["T/USD".to_string()],
        }
    }

    #[test]
    fn test_valid_init_args_accepted() {
        assert!(validate_init_args(&test_args()).is_ok());
    }

    #[test]
    fn test_empty_asset_list_rejected() {
        let mut args = test_args();
        args.supported_assets.clear();
        args.feed_ids.clear();
        assert_eq!(
            validate_init_args(&args),
            Err(SettlementError::Config(ConfigError::EmptyAssetList))
        );
    }

    #[test]
    fn test_mismatched_lists_rejected() {
        let mut args = test_args();
        args.feed_ids.push("U/USD".to_string());
        assert_eq!(
            validate_init_args(&args),
            Err(SettlementError::Config(ConfigError::ListLengthMismatch {
                assets: 1,
                feeds: 2,
            }))
        );
    }

    #[test]
    fn test_fee_rate_over_10000_bps_rejected() {
        let mut args = test_args();
        args.fee_rate_bps = 10_001;
        assert!(matches!(
            validate_init_args(&args),
            Err(SettlementError::Config(ConfigError::InvalidFeeRate { bps: 10_001 }))
        ));
    }

    #[test]
    fn test_config_snapshot_stable_after_set() {
        let config = ProtocolConfig::from_init(&test_args());
        set_config(config.clone());
        assert_eq!(get_config().unwrap(), config);
        // Re-reading yields the identical snapshot
        assert_eq!(get_config().unwrap(), get_config().unwrap());
    }
}
