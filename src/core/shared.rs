//! Thread-safe ledger handle
//!
//! This module provides the `SharedLedger` struct, a cloneable handle that
//! lets several threads drive one [`Ledger`].
//!
//! # Thread Safety
//!
//! Every operation takes one exclusive lock on the whole ledger for its full
//! duration. Lookup, balance update and history append of an operation, and
//! both sides of a transfer, therefore happen as one unit: no caller can
//! observe a half-applied transfer or race on the per-account `len + 1`
//! transaction ids.

use crate::core::ledger::Ledger;
use crate::core::traits::Banking;
use crate::types::{Account, AccountNumber, AccountType, BankError};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Cloneable, lock-guarded handle to a ledger
///
/// Clones share the same ledger.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    /// Create a handle to a new, empty ledger
    pub fn new() -> Self {
        Self::from_ledger(Ledger::new())
    }

    /// Wrap an existing ledger
    pub fn from_ledger(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Open an account
    pub fn create_account(
        &self,
        name: &str,
        account_type: AccountType,
        password: &str,
    ) -> AccountNumber {
        self.inner.lock().create_account(name, account_type, password)
    }

    /// Deposit into an account
    pub fn deposit(
        &self,
        account: AccountNumber,
        amount: Decimal,
        description: &str,
    ) -> Result<(), BankError> {
        self.inner.lock().deposit(account, amount, description)
    }

    /// Withdraw from an account
    pub fn withdraw(
        &self,
        account: AccountNumber,
        amount: Decimal,
        description: &str,
    ) -> Result<(), BankError> {
        self.inner.lock().withdraw(account, amount, description)
    }

    /// Transfer between two accounts
    pub fn transfer(
        &self,
        from: AccountNumber,
        to: AccountNumber,
        amount: Decimal,
        description: &str,
    ) -> Result<(), BankError> {
        self.inner.lock().transfer(from, to, amount, description)
    }

    /// Snapshot of one account
    pub fn statement(&self, account: AccountNumber) -> Result<Account, BankError> {
        self.inner.lock().statement(account).cloned()
    }

    /// Snapshots of all accounts in creation order
    pub fn accounts(&self) -> Vec<Account> {
        self.inner
            .lock()
            .accounts()
            .into_iter()
            .cloned()
            .collect()
    }
}

impl Banking for SharedLedger {
    fn create_account(
        &mut self,
        name: &str,
        account_type: AccountType,
        password: &str,
    ) -> AccountNumber {
        SharedLedger::create_account(self, name, account_type, password)
    }

    fn deposit(
        &mut self,
        account: AccountNumber,
        amount: Decimal,
        description: &str,
    ) -> Result<(), BankError> {
        SharedLedger::deposit(self, account, amount, description)
    }

    fn withdraw(
        &mut self,
        account: AccountNumber,
        amount: Decimal,
        description: &str,
    ) -> Result<(), BankError> {
        SharedLedger::withdraw(self, account, amount, description)
    }

    fn transfer(
        &mut self,
        from: AccountNumber,
        to: AccountNumber,
        amount: Decimal,
        description: &str,
    ) -> Result<(), BankError> {
        SharedLedger::transfer(self, from, to, amount, description)
    }

    fn statement(&self, account: AccountNumber) -> Result<Account, BankError> {
        SharedLedger::statement(self, account)
    }

    fn accounts(&self) -> Vec<Account> {
        SharedLedger::accounts(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let ledger = SharedLedger::new();
        let other = ledger.clone();

        let number = ledger.create_account("Ada", AccountType::Savings, "pw");
        other.deposit(number, Decimal::new(10, 0), "from clone").unwrap();

        assert_eq!(ledger.statement(number).unwrap().balance, Decimal::new(10, 0));
    }

    #[test]
    fn test_concurrent_account_creation_issues_unique_numbers() {
        let ledger = SharedLedger::new();

        let mut numbers: Vec<AccountNumber> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let ledger = ledger.clone();
                    scope.spawn(move || {
                        (0..25)
                            .map(|_| ledger.create_account("x", AccountType::Current, "pw"))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap())
                .collect()
        });

        numbers.sort_unstable();
        let expected: Vec<AccountNumber> = (1000..1200).collect();
        assert_eq!(numbers, expected);
    }

    #[test]
    fn test_concurrent_transfers_conserve_money() {
        let ledger = SharedLedger::new();
        let accounts: Vec<AccountNumber> = (0..4)
            .map(|i| ledger.create_account(&format!("holder {}", i), AccountType::Savings, "pw"))
            .collect();
        for &account in &accounts {
            ledger.deposit(account, Decimal::new(1000, 0), "seed").unwrap();
        }

        thread::scope(|scope| {
            for worker in 0..4usize {
                let ledger = ledger.clone();
                let accounts = accounts.clone();
                scope.spawn(move || {
                    for step in 0..200usize {
                        let from = accounts[(worker + step) % accounts.len()];
                        let to = accounts[(worker + step + 1) % accounts.len()];
                        // Rejections for insufficient funds are fine here
                        let _ = ledger.transfer(from, to, Decimal::new(7, 0), "shuffle");
                    }
                });
            }
        });

        let snapshot = ledger.accounts();
        let total: Decimal = snapshot.iter().map(|account| account.balance).sum();
        assert_eq!(total, Decimal::new(4000, 0));

        for account in &snapshot {
            assert!(account.balance >= Decimal::ZERO);
            assert_eq!(account.balance, account.replayed_balance());
            let ids: Vec<u32> = account.transactions.iter().map(|tx| tx.id).collect();
            let expected: Vec<u32> = (1..=account.transactions.len() as u32).collect();
            assert_eq!(ids, expected);
        }
    }
}
