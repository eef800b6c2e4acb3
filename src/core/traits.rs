//! Core trait for ledger operations
//!
//! This module defines the trait abstraction that lets the single-owner
//! [`Ledger`](crate::core::Ledger) and the lock-guarded
//! [`SharedLedger`](crate::core::SharedLedger) be driven interchangeably by
//! the menus and tests.

use crate::types::{Account, AccountNumber, AccountType, BankError};
use rust_decimal::Decimal;

/// Trait for the banking operation set
///
/// Every mutating operation either applies fully, appending the matching
/// history entries, or fails with no effect.
pub trait Banking {
    /// Open an account and return its number
    fn create_account(&mut self, name: &str, account_type: AccountType, password: &str)
        -> AccountNumber;

    /// Credit an account
    fn deposit(
        &mut self,
        account: AccountNumber,
        amount: Decimal,
        description: &str,
    ) -> Result<(), BankError>;

    /// Debit an account
    fn withdraw(
        &mut self,
        account: AccountNumber,
        amount: Decimal,
        description: &str,
    ) -> Result<(), BankError>;

    /// Move funds between two distinct accounts
    fn transfer(
        &mut self,
        from: AccountNumber,
        to: AccountNumber,
        amount: Decimal,
        description: &str,
    ) -> Result<(), BankError>;

    /// Snapshot of an account's metadata, balance and history
    fn statement(&self, account: AccountNumber) -> Result<Account, BankError>;

    /// Snapshots of all accounts in creation order
    fn accounts(&self) -> Vec<Account>;
}
