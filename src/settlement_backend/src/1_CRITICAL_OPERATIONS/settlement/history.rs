//! Bounded in-canister settlement history

use std::cell::RefCell;
use crate::infrastructure::constants::MAX_HISTORY_ENTRIES;
use crate::types::receipts::SettlementRecord;

thread_local! {
    static HISTORY: RefCell<Vec<SettlementRecord>> = RefCell::new(Vec::new());
}

/// Append a record, keeping only the most recent entries
pub fn record(entry: SettlementRecord) {
    HISTORY.with(|h| {
        let mut h = h.borrow_mut();
        h.push(entry);
        let len = h.len();
        if len > MAX_HISTORY_ENTRIES {
            h.drain(0..(len - MAX_HISTORY_ENTRIES));
        }
    });
}

pub fn get_paginated(offset: u64, limit: u64) -> (Vec<SettlementRecord>, u64) {
    HISTORY.with(|h| {
        let h = h.borrow();
        let total = h.len() as u64;
        let start = offset as usize;
        let end = std::cmp::min(start.saturating_add(limit as usize), h.len());
        let page = if start < h.len() {
            h[start..end].to_vec()
        } else {
            Vec::new()
        };
        (page, total)
    })
}

pub fn len() -> usize {
    HISTORY.with(|h| h.borrow().len())
}

/// Export for stable storage (pre-upgrade)
pub fn export_history() -> Vec<SettlementRecord> {
    HISTORY.with(|h| h.borrow().clone())
}

/// Restore from stable storage (post-upgrade)
pub fn import_history(entries: Vec<SettlementRecord>) {
    HISTORY.with(|h| *h.borrow_mut() = entries);
}

#[cfg(test)]
mod tests {
    use super::*;
    use candid::{Nat, Principal};
    use crate::types::receipts::{SettlementReceipt, VenueKind};

    fn entry(i: u64) -> SettlementRecord {
        SettlementRecord {
            timestamp: i,
            operator: Principal::anonymous(),
            venue: VenueKind::Aggregator,
            receipt: SettlementReceipt {
                input_asset: Principal::anonymous(),
                input_amount: Nat::from(i),
                output_asset: Principal::anonymous(),
                net_output: Nat::from(i),
                beneficiary: Principal::anonymous(),
            },
            fee_paid: Nat::from(0u64),
        }
    }

    #[test]
    fn test_history_is_bounded() {
        for i in 0..(MAX_HISTORY_ENTRIES as u64 + 10) {
            record(entry(i));
        }
        assert_eq!(len(), MAX_HISTORY_ENTRIES);
        // Oldest entries were dropped
        let (page, total) = get_paginated(0, 1);
        assert_eq!(total, MAX_HISTORY_ENTRIES as u64);
        assert_eq!(page[0].timestamp, 10);
    }

    #[test]
    fn test_pagination_with_huge_limit_does_not_overflow() {
        record(entry(1));
        record(entry(2));
        record(entry(3));
        // A limit near u64::MAX must clamp to the end, not wrap the range
        let (page, total) = get_paginated(1, u64::MAX);
        assert_eq!(total, 3);
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].timestamp, 2);
    }

    #[test]
    fn test_pagination_past_end_is_empty() {
        record(entry(1));
        let (page, total) = get_paginated(total_plus_one(), 5);
        assert!(page.is_empty());
        assert!(total >= 1);
    }

    fn total_plus_one() -> u64 {
        len() as u64 + 1
    }
}
