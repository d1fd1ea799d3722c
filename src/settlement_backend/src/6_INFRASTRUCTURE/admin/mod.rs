//! Emergency pause
//!
//! Owner-gated kill switch checked at the head of every settlement.
//! Operator management and configuration reads are unaffected so the
//! owner can still rotate operators while paused.

use std::cell::RefCell;
use crate::infrastructure::errors::{EconomicError, Result, SettlementError};

thread_local! {
    static EMERGENCY_PAUSE: RefCell<bool> = RefCell::new(false);
}

pub fn check_not_paused() -> Result<()> {
    EMERGENCY_PAUSE.with(|p| {
        if *p.borrow() {
            Err(SettlementError::Economic(EconomicError::Paused))
        } else {
            Ok(())
        }
    })
}

pub fn set_pause(paused: bool) {
    EMERGENCY_PAUSE.with(|p| *p.borrow_mut() = paused);
}

pub fn is_paused() -> bool {
    EMERGENCY_PAUSE.with(|p| *p.borrow())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pause_default_off() {
        assert!(!is_paused());
        assert!(check_not_paused().is_ok());
    }

    #[test]
    fn test_pause_toggle() {
        set_pause(true);
        assert!(is_paused());
        assert_eq!(
            check_not_paused(),
            Err(SettlementError::Economic(EconomicError::Paused))
        );

        set_pause(false);
        assert!(check_not_paused().is_ok());
    }
}
