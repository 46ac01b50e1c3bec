//! The custodial bank ledger
//!
//! One [`Bank`] owns every piece of ledger state: the account map, the flat
//! withdrawal fee, the accrued profit, and the pool of value backing it all.
//! Operations run one at a time to completion and are all-or-nothing: a
//! failed validation or a failed external transfer leaves the queryable
//! state exactly as it was.

use crate::account::{Account, Amount};
use crate::config::Config;
use crate::error::{BankError, Result};
use crate::events::BankEvent;
use crate::identity::{account_id_from_hex, account_id_to_hex, AccountId};
use crate::settlement::Settlement;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{info, warn};

/// The single-asset custodial ledger.
///
/// The identity passed as `caller` to each operation is expected to come
/// from an authenticating gateway; the bank itself performs no
/// authentication beyond comparing ids.
#[derive(Debug, Clone)]
pub struct Bank {
    owner: AccountId,
    accounts: HashMap<AccountId, Account>,
    fee: Amount,
    profit: Amount,
    pool: Amount,
    events: Vec<BankEvent>,
}

/// Point-in-time serializable view of the ledger.
///
/// Account keys are hex-encoded and ordered, so two snapshots of the same
/// state serialize identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankSnapshot {
    pub owner: String,
    pub accounts: BTreeMap<String, Account>,
    pub fee: Amount,
    pub profit: Amount,
    pub pool: Amount,
}

impl Bank {
    /// Create a bank owned by `owner`, with a zero fee and an empty pool.
    pub fn new(owner: AccountId) -> Self {
        Bank {
            owner,
            accounts: HashMap::new(),
            fee: 0,
            profit: 0,
            pool: 0,
            events: Vec::new(),
        }
    }

    /// Create a bank from a loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let owner = account_id_from_hex(&config.bank.owner)?;
        let mut bank = Bank::new(owner);
        bank.fee = config.bank.fee;
        Ok(bank)
    }

    /// The identity that created the bank. Immutable for its lifetime.
    pub fn owner(&self) -> AccountId {
        self.owner
    }

    /// Whether `account` has enrolled. Unrestricted read.
    pub fn is_enrolled(&self, account: &AccountId) -> bool {
        self.accounts.get(account).map_or(false, |a| a.enrolled)
    }

    /// Mark the caller enrolled. Fails if the caller enrolled before.
    pub fn enroll(&mut self, caller: AccountId) -> Result<()> {
        let account = self.accounts.entry(caller).or_default();
        if account.enrolled {
            return Err(BankError::AlreadyEnrolled);
        }
        account.enrolled = true;

        info!("enrolled account {}", account_id_to_hex(&caller));
        self.events.push(BankEvent::Enrolled { account: caller });
        Ok(())
    }

    /// The caller's own balance. Requires enrollment.
    pub fn get_balance(&self, caller: &AccountId) -> Result<Amount> {
        if !self.is_enrolled(caller) {
            return Err(BankError::NotEnrolled);
        }
        Ok(self.balance_of(caller))
    }

    /// Total value held by the bank. Owner only.
    pub fn get_balance_bank(&self, caller: &AccountId) -> Result<Amount> {
        self.require_owner(caller)?;
        Ok(self.pool)
    }

    /// Credit `amount` to the caller's balance.
    ///
    /// The caller has already moved `amount` into the pool as part of
    /// invoking this operation, so once validation passes the credit itself
    /// cannot fail.
    pub fn deposit(&mut self, caller: AccountId, amount: Amount) -> Result<()> {
        if !self.is_enrolled(&caller) {
            return Err(BankError::NotEnrolled);
        }
        if amount == 0 {
            return Err(BankError::ZeroValue);
        }

        let account = self.accounts.entry(caller).or_default();
        account.balance += amount;
        self.pool += amount;

        info!("deposit of {} credited to {}", amount, account_id_to_hex(&caller));
        self.events.push(BankEvent::DepositMade {
            account: caller,
            amount,
        });
        Ok(())
    }

    /// Send `amount` out of the pool to the caller, debiting `amount` plus
    /// the current fee from the caller's balance. The fee accrues to the
    /// profit pool.
    ///
    /// The external transfer is attempted before any state is written; if
    /// the backend reports failure the operation fails with
    /// [`BankError::TransferFailed`] and no state changes.
    pub fn withdraw(
        &mut self,
        caller: AccountId,
        amount: Amount,
        settlement: &mut dyn Settlement,
    ) -> Result<()> {
        if !self.is_enrolled(&caller) {
            return Err(BankError::NotEnrolled);
        }
        let balance = self.balance_of(&caller);
        // A debit that overflows can never be covered by a u64 balance.
        let debit = amount
            .checked_add(self.fee)
            .ok_or(BankError::InsufficientBalance)?;
        if balance < debit {
            return Err(BankError::InsufficientBalance);
        }

        if !settlement.transfer(&caller, amount) {
            warn!(
                "external transfer of {} to {} failed, state unchanged",
                amount,
                account_id_to_hex(&caller)
            );
            return Err(BankError::TransferFailed);
        }

        let account = self.accounts.entry(caller).or_default();
        account.balance = balance - debit;
        let new_balance = account.balance;
        self.profit += self.fee;
        self.pool -= amount;

        info!(
            "withdrawal of {} sent to {}, new balance {}",
            amount,
            account_id_to_hex(&caller),
            new_balance
        );
        self.events.push(BankEvent::WithdrawalMade {
            account: caller,
            amount,
            balance: new_balance,
        });
        Ok(())
    }

    /// Withdraw the caller's full balance.
    ///
    /// The balance check is the same `balance >= amount + fee` as
    /// [`Bank::withdraw`] with the full balance as `amount`, so this only
    /// succeeds while the fee is zero.
    pub fn withdraw_all(
        &mut self,
        caller: AccountId,
        settlement: &mut dyn Settlement,
    ) -> Result<()> {
        if !self.is_enrolled(&caller) {
            return Err(BankError::NotEnrolled);
        }
        let amount = self.balance_of(&caller);
        if amount == 0 {
            return Err(BankError::InsufficientBalance);
        }
        self.withdraw(caller, amount, settlement)
    }

    /// Move `amount` from the caller to another enrolled account. Purely
    /// internal bookkeeping: no fee, no external transfer.
    pub fn transfer(&mut self, caller: AccountId, to: AccountId, amount: Amount) -> Result<()> {
        if !self.is_enrolled(&caller) {
            return Err(BankError::NotEnrolled);
        }
        if to == caller {
            return Err(BankError::SameParty);
        }
        if !self.is_enrolled(&to) {
            return Err(BankError::RecipientNotEnrolled);
        }
        let balance = self.balance_of(&caller);
        if balance < amount {
            return Err(BankError::InsufficientBalance);
        }

        let sender_balance = balance - amount;
        self.accounts.entry(caller).or_default().balance = sender_balance;
        self.accounts.entry(to).or_default().balance += amount;

        info!(
            "transfer of {} from {} to {}",
            amount,
            account_id_to_hex(&caller),
            account_id_to_hex(&to)
        );
        self.events.push(BankEvent::TransferMade {
            recipient: to,
            amount,
            sender_balance,
        });
        Ok(())
    }

    /// Set the flat per-withdrawal fee. Owner only, no bounds check.
    pub fn set_fee(&mut self, caller: &AccountId, new_fee: Amount) -> Result<()> {
        self.require_owner(caller)?;
        self.fee = new_fee;
        info!("withdrawal fee set to {}", new_fee);
        Ok(())
    }

    /// The current flat fee. Unrestricted read.
    pub fn get_fee(&self) -> Amount {
        self.fee
    }

    /// Profit accrued from withdrawal fees. Owner only.
    pub fn get_profit(&self, caller: &AccountId) -> Result<Amount> {
        self.require_owner(caller)?;
        Ok(self.profit)
    }

    /// Send the accrued profit out of the pool to the owner and reset the
    /// accumulator. Owner only; all-or-nothing like [`Bank::withdraw`].
    pub fn withdraw_profits(
        &mut self,
        caller: &AccountId,
        settlement: &mut dyn Settlement,
    ) -> Result<()> {
        self.require_owner(caller)?;

        if !settlement.transfer(&self.owner, self.profit) {
            warn!(
                "profit payout of {} to owner failed, state unchanged",
                self.profit
            );
            return Err(BankError::TransferFailed);
        }

        self.pool -= self.profit;
        info!("profit payout of {} sent to owner", self.profit);
        self.profit = 0;
        Ok(())
    }

    /// Events emitted so far, oldest first.
    pub fn events(&self) -> &[BankEvent] {
        &self.events
    }

    /// Take all pending events, leaving the log empty.
    pub fn drain_events(&mut self) -> Vec<BankEvent> {
        std::mem::take(&mut self.events)
    }

    /// Build a serializable snapshot of the current ledger state.
    pub fn snapshot(&self) -> BankSnapshot {
        let accounts = self
            .accounts
            .iter()
            .map(|(id, account)| (account_id_to_hex(id), account.clone()))
            .collect();
        BankSnapshot {
            owner: account_id_to_hex(&self.owner),
            accounts,
            fee: self.fee,
            profit: self.profit,
            pool: self.pool,
        }
    }

    fn balance_of(&self, account: &AccountId) -> Amount {
        self.accounts.get(account).map_or(0, |a| a.balance)
    }

    fn require_owner(&self, caller: &AccountId) -> Result<()> {
        if *caller != self.owner {
            return Err(BankError::NotOwner);
        }
        Ok(())
    }
}
