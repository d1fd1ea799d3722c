//! Stable storage management for upgrade persistence

use candid::{CandidType, Deserialize, Principal};
use crate::types::config::ProtocolConfig;
use crate::types::receipts::SettlementRecord;

#[derive(CandidType, Deserialize, Default)]
pub struct StableState {
    pub config: Option<ProtocolConfig>,
    pub operators: Vec<(Principal, bool)>,
    pub feeds: Vec<(Principal, String)>,
    pub paused: bool,
    pub settlement_history: Vec<SettlementRecord>,
}

pub fn save_state(state: StableState) {
    ic_cdk::println!(
        "💾 Saving {} operators, {} feeds, {} settlements to stable storage",
        state.operators.len(),
        state.feeds.len(),
        state.settlement_history.len()
    );

    // Log-and-continue on serialization failure: losing history is better
    // than trapping the whole upgrade.
    match ic_cdk::storage::stable_save((state,)) {
        Ok(_) => {
            ic_cdk::println!("✅ State saved to stable memory");
        }
        Err(e) => {
            ic_cdk::println!("⚠️ WARNING: Failed to save state to stable memory: {}", e);
        }
    }
}

pub fn restore_state() -> StableState {
    match ic_cdk::storage::stable_restore::<(StableState,)>() {
        Ok((state,)) => {
            ic_cdk::println!(
                "✅ Restored {} operators, {} feeds, {} settlements from stable storage",
                state.operators.len(),
                state.feeds.len(),
                state.settlement_history.len()
            );
            state
        }
        Err(e) => {
            ic_cdk::println!("⚠️ No stable state to restore (first deployment or empty): {}", e);
            StableState::default()
        }
    }
}
