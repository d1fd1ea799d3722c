//! Access control: owner identity plus the operator allowlist
//!
//! Every mutating entrypoint passes through here. The policy is a
//! standalone object composed into the settlement path, not a mixin:
//! functions take the caller as an explicit argument so the gate is
//! testable without a canister environment.
//!
//! Operator entries are flagged false on removal, never deleted.

use candid::Principal;
use std::cell::RefCell;
use std::collections::HashMap;
use crate::infrastructure::config;
use crate::infrastructure::errors::{AuthError, Result, SettlementError, StateConflictError};

thread_local! {
    static OPERATORS: RefCell<HashMap<Principal, bool>> = RefCell::new(HashMap::new());
}

/// Fail with `NotOwner` unless the caller matches the configured owner
pub fn require_owner(caller: Principal) -> Result<()> {
    let config = config::get_config()?;
    if caller == config.owner {
        Ok(())
    } else {
        Err(SettlementError::Auth(AuthError::NotOwner {
            caller: caller.to_text(),
        }))
    }
}

/// Fail with `InvalidSender` unless the caller is a flagged operator
pub fn require_operator(caller: Principal) -> Result<()> {
    if is_operator(caller) {
        Ok(())
    } else {
        Err(SettlementError::Auth(AuthError::InvalidSender {
            caller: caller.to_text(),
        }))
    }
}

pub fn is_operator(addr: Principal) -> bool {
    OPERATORS.with(|ops| ops.borrow().get(&addr).copied().unwrap_or(false))
}

/// Grant operator status. Owner-gated; duplicate grants conflict.
pub fn set_operator(caller: Principal, addr: Principal) -> Result<()> {
    require_owner(caller)?;
    OPERATORS.with(|ops| {
        let mut ops = ops.borrow_mut();
        if ops.get(&addr).copied().unwrap_or(false) {
            return Err(SettlementError::StateConflict(StateConflictError::ExistingAddress {
                address: addr.to_text(),
            }));
        }
        ops.insert(addr, true);
        Ok(())
    })
}

/// Revoke operator status. Owner-gated; revoking a non-operator conflicts.
pub fn remove_operator(caller: Principal, addr: Principal) -> Result<()> {
    require_owner(caller)?;
    OPERATORS.with(|ops| {
        let mut ops = ops.borrow_mut();
        if !ops.get(&addr).copied().unwrap_or(false) {
            return Err(SettlementError::StateConflict(StateConflictError::NonExistingAddress {
                address: addr.to_text(),
            }));
        }
        ops.insert(addr, false);
        Ok(())
    })
}

/// Export for stable storage (pre-upgrade)
pub fn export_operators() -> Vec<(Principal, bool)> {
    OPERATORS.with(|ops| ops.borrow().iter().map(|(p, f)| (*p, *f)).collect())
}

/// Restore from stable storage (post-upgrade)
pub fn import_operators(entries: Vec<(Principal, bool)>) {
    OPERATORS.with(|ops| {
        *ops.borrow_mut() = entries.into_iter().collect();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::ProtocolConfig;

    fn owner() -> Principal {
        Principal::from_slice(&[1; 29])
    }

    fn stranger() -> Principal {
        Principal::from_slice(&[2; 29])
    }

    fn install_config() {
        config::set_config(ProtocolConfig {
            owner: owner(),
            fee_collector: Principal::anonymous(),
            fee_rate_bps: 50,
            aggregator: Principal::anonymous(),
            router: Principal::anonymous(),
            oracle: Principal::anonymous(),
        });
    }

    #[test]
    fn test_operator_lifecycle() {
        install_config();
        let op = Principal::from_slice(&[3; 29]);

        assert!(!is_operator(op));

        set_operator(owner(), op).expect("first grant succeeds");
        assert!(is_operator(op));

        // Duplicate grant conflicts
        assert_eq!(
            set_operator(owner(), op),
            Err(SettlementError::StateConflict(StateConflictError::ExistingAddress {
                address: op.to_text(),
            }))
        );

        remove_operator(owner(), op).expect("removal succeeds");
        assert!(!is_operator(op));

        // Removing again conflicts: the entry is flagged false, not deleted
        assert_eq!(
            remove_operator(owner(), op),
            Err(SettlementError::StateConflict(StateConflictError::NonExistingAddress {
                address: op.to_text(),
            }))
        );
    }

    #[test]
    fn test_remove_never_granted_operator_conflicts() {
        install_config();
        let never_set = Principal::from_slice(&[4; 29]);
        assert!(matches!(
            remove_operator(owner(), never_set),
            Err(SettlementError::StateConflict(StateConflictError::NonExistingAddress { .. }))
        ));
    }

    #[test]
    fn test_non_owner_cannot_mutate_operators() {
        install_config();
        let op = Principal::from_slice(&[5; 29]);
        assert!(matches!(
            set_operator(stranger(), op),
            Err(SettlementError::Auth(AuthError::NotOwner { .. }))
        ));
        assert!(matches!(
            remove_operator(stranger(), op),
            Err(SettlementError::Auth(AuthError::NotOwner { .. }))
        ));
    }

    #[test]
    fn test_require_operator_rejects_unknown_caller() {
        install_config();
        let unknown = Principal::from_slice(&[6; 29]);
        assert!(matches!(
            require_operator(unknown),
            Err(SettlementError::Auth(AuthError::InvalidSender { .. }))
        ));
    }

    #[test]
    fn test_export_import_roundtrip_preserves_flags() {
        install_config();
        let a = Principal::from_slice(&[7; 29]);
        let b = Principal::from_slice(&[8; 29]);
        set_operator(owner(), a).unwrap();
        set_operator(owner(), b).unwrap();
        remove_operator(owner(), b).unwrap();

        let exported = export_operators();
        import_operators(exported);

        assert!(is_operator(a));
        assert!(!is_operator(b));
        // The false-flagged entry survived the roundtrip
        assert!(matches!(
            remove_operator(owner(), b),
            Err(SettlementError::StateConflict(StateConflictError::NonExistingAddress { .. }))
        ));
    }
}
