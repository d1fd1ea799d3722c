//! Reentrancy guard for the settlement window
//!
//! Every settlement shares one custody account and one approval slot per
//! (venue, asset) pair, so the balance-delta measurement is only
//! trustworthy if no other settlement runs between the pre-call snapshot
//! and the post-call read. Awaits interleave on the IC: a second
//! operator's swap landing output in custody mid-window would be counted
//! into the first operator's delta. The guard is therefore global, not
//! per caller: one settlement holds it for its whole duration, any other
//! attempt is rejected. The guard releases on drop, including on early
//! error returns.

use candid::Principal;
use std::cell::RefCell;
use crate::infrastructure::errors::{Result, SettlementError, StateConflictError};

thread_local! {
    static ACTIVE_SETTLEMENT: RefCell<Option<Principal>> = RefCell::new(None);
}

pub struct SettlementGuard;

impl SettlementGuard {
    pub fn acquire(caller: Principal) -> Result<Self> {
        ACTIVE_SETTLEMENT.with(|active| {
            let mut active = active.borrow_mut();
            match *active {
                Some(holder) => Err(SettlementError::StateConflict(
                    StateConflictError::SettlementInProgress {
                        operator: holder.to_text(),
                    },
                )),
                None => {
                    *active = Some(caller);
                    Ok(SettlementGuard)
                }
            }
        })
    }
}

impl Drop for SettlementGuard {
    fn drop(&mut self) {
        ACTIVE_SETTLEMENT.with(|active| {
            *active.borrow_mut() = None;
        });
    }
}
