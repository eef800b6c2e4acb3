//! Account-related types for the online banking ledger
//!
//! This module defines the Account record and its type, as owned and
//! mutated by the ledger.

use super::transaction::{AccountNumber, Transaction, TransactionId};
use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Account product type, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccountType {
    Savings,
    Current,
}

impl AccountType {
    /// Map a menu selection (1 = Savings, 2 = Current) to an account type
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(AccountType::Savings),
            2 => Some(AccountType::Current),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Savings => f.write_str("Savings"),
            AccountType::Current => f.write_str("Current"),
        }
    }
}

/// Customer account state
///
/// Holds the balance and the append-only transaction history. Every field
/// except `balance` and `transactions` is fixed at creation, and those two
/// only change through ledger operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Unique, never reused
    pub account_number: AccountNumber,

    /// Display name of the holder
    pub name: String,

    pub account_type: AccountType,

    /// Current balance, never negative
    ///
    /// Always equal to the net sum of the credits and debits in
    /// `transactions`.
    pub balance: Decimal,

    /// Shared secret for a future access-control layer
    ///
    /// Stored as given; ledger operations never check it.
    pub password: String,

    pub created_at: DateTime<Local>,

    /// Chronological history; ids are 1, 2, 3, ...
    pub transactions: Vec<Transaction>,
}

impl Account {
    /// Create a new account with a zero balance and empty history
    ///
    /// # Arguments
    ///
    /// * `account_number` - Number issued by the ledger
    /// * `name` - Holder name
    /// * `account_type` - Savings or Current
    /// * `password` - Shared secret, kept as given
    pub fn new(
        account_number: AccountNumber,
        name: impl Into<String>,
        account_type: AccountType,
        password: impl Into<String>,
    ) -> Self {
        Account {
            account_number,
            name: name.into(),
            account_type,
            balance: Decimal::ZERO,
            password: password.into(),
            created_at: Local::now(),
            transactions: Vec::new(),
        }
    }

    /// Id the next appended transaction will receive
    pub fn next_transaction_id(&self) -> TransactionId {
        self.transactions.len() as TransactionId + 1
    }

    /// Balance recomputed from the history
    ///
    /// Matches `balance` for every account maintained by the ledger.
    pub fn replayed_balance(&self) -> Decimal {
        self.transactions
            .iter()
            .map(Transaction::signed_amount)
            .sum()
    }
}
