//! Observable events emitted by successful bank operations

use crate::account::Amount;
use crate::identity::AccountId;
use serde::{Deserialize, Serialize};

/// Notification record appended to the bank's event log, exactly once per
/// successful state-changing operation. The embedding process drains the
/// log and forwards events to whatever notification channel it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BankEvent {
    Enrolled {
        account: AccountId,
    },
    DepositMade {
        account: AccountId,
        amount: Amount,
    },
    /// `balance` is the caller's balance after the debit of amount plus fee.
    WithdrawalMade {
        account: AccountId,
        amount: Amount,
        balance: Amount,
    },
    /// `sender_balance` is the sending side's balance after the move.
    TransferMade {
        recipient: AccountId,
        amount: Amount,
        sender_balance: Amount,
    },
}
