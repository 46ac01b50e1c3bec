//! External value movement out of the bank's pool
//!
//! Withdrawals hand value back to callers through a settlement backend the
//! embedding process provides. The bank treats the backend as fallible and
//! commits its own state only after the backend reports success.

use crate::account::Amount;
use crate::identity::AccountId;
use std::collections::HashMap;

/// Abstraction over the primitive that moves value out of the pool to a
/// caller's external account. A `false` return means the transfer did not
/// happen and the receiving side is untouched.
pub trait Settlement {
    fn transfer(&mut self, recipient: &AccountId, amount: Amount) -> bool;
}

/// In-memory settlement backend that records every payout it accepts.
///
/// Used by tests and by hosts that settle payouts themselves. The failure
/// switch makes every transfer report failure, which is how the rollback
/// paths of the withdrawal operations are exercised.
#[derive(Debug, Default)]
pub struct InMemorySettlement {
    payouts: HashMap<AccountId, Amount>,
    fail_transfers: bool,
}

impl InMemorySettlement {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that refuses every transfer.
    pub fn rejecting() -> Self {
        InMemorySettlement {
            payouts: HashMap::new(),
            fail_transfers: true,
        }
    }

    pub fn set_failing(&mut self, failing: bool) {
        self.fail_transfers = failing;
    }

    /// Total value paid out to `account` so far.
    pub fn paid_to(&self, account: &AccountId) -> Amount {
        *self.payouts.get(account).unwrap_or(&0)
    }

    /// Total value paid out across all recipients.
    pub fn total_paid(&self) -> Amount {
        self.payouts.values().sum()
    }
}

impl Settlement for InMemorySettlement {
    fn transfer(&mut self, recipient: &AccountId, amount: Amount) -> bool {
        if self.fail_transfers {
            return false;
        }
        *self.payouts.entry(*recipient).or_insert(0) += amount;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::account_id_from_label;

    #[test]
    fn test_in_memory_settlement_records_payouts() {
        let mut settlement = InMemorySettlement::new();
        let alice = account_id_from_label("alice");

        assert!(settlement.transfer(&alice, 100));
        assert!(settlement.transfer(&alice, 50));
        assert_eq!(settlement.paid_to(&alice), 150);
        assert_eq!(settlement.total_paid(), 150);
    }

    #[test]
    fn test_rejecting_settlement_refuses_and_records_nothing() {
        let mut settlement = InMemorySettlement::rejecting();
        let alice = account_id_from_label("alice");

        assert!(!settlement.transfer(&alice, 100));
        assert_eq!(settlement.paid_to(&alice), 0);
        assert_eq!(settlement.total_paid(), 0);
    }
}
