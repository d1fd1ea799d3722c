//! Read-only views over configuration and settlement history

use crate::critical_operations::settlement::history;
use crate::infrastructure::{config, Result};
use crate::types::config::ConfigView;
use crate::types::receipts::SettlementRecord;

/// Constructor-provided addresses and fee rate, exactly as initialized
pub fn get_configuration() -> Result<ConfigView> {
    Ok(config::get_config()?.into())
}

pub fn get_settlement_history_paginated(offset: u64, limit: u64) -> (Vec<SettlementRecord>, u64) {
    history::get_paginated(offset, limit)
}
