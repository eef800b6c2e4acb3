//! Error types for the online banking ledger
//!
//! This module defines every error the ledger, the ATM front end and the
//! interactive menus can report. Errors are descriptive so the menus can
//! print them to the user as-is.
//!
//! # Error Categories
//!
//! - **Ledger Errors**: Unknown account, invalid amount, insufficient funds, self transfer
//! - **Arithmetic Errors**: Overflow in balance calculations
//! - **ATM Errors**: Session not authenticated, PIN problems, machine out of cash
//! - **Console/Export Errors**: I/O failures, unparseable input, CSV export failures

use super::transaction::AccountNumber;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the banking system
///
/// Every ledger condition is a caller error: the failed operation has no
/// effect and the caller decides how to report it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    /// Referenced account number does not exist
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The account number that was looked up
        account: AccountNumber,
    },

    /// Amount is zero or negative
    #[error("Invalid amount {amount}: amount must be positive")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Debit exceeds the account balance
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account that would be debited
        account: AccountNumber,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested debit
        requested: Decimal,
    },

    /// Transfer source and destination are the same account
    #[error("Cannot transfer from account {account} to itself")]
    SelfTransfer {
        /// The account given as both sides
        account: AccountNumber,
    },

    /// Checked decimal arithmetic would overflow
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account being updated
        account: AccountNumber,
    },

    /// ATM operation attempted without a successful PIN entry
    #[error("Please login first")]
    NotAuthenticated,

    /// ATM card number was empty
    #[error("Account number cannot be empty")]
    EmptyCardNumber,

    /// PIN is not exactly four digits
    #[error("PIN must be 4 digits")]
    InvalidPinFormat,

    /// Current PIN given for a PIN change did not match
    #[error("Current PIN is incorrect")]
    IncorrectPin,

    /// ATM cash pool cannot cover the withdrawal
    #[error("Not enough cash in ATM: available {available}, requested {requested}")]
    InsufficientCash {
        /// Cash in the machine
        available: Decimal,
        /// Requested withdrawal
        requested: Decimal,
    },

    /// Console input could not be parsed
    #[error("Invalid input '{input}': expected {expected}")]
    InvalidInput {
        /// The raw line entered
        input: String,
        /// What the prompt expected
        expected: String,
    },

    /// Console input ended before the prompt was answered
    #[error("Input closed")]
    InputClosed,

    /// I/O error on the console or an export file
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// CSV export failed
    #[error("CSV export error: {message}")]
    Export {
        /// Description of the CSV error
        message: String,
    },
}

// Conversion from io::Error to BankError
impl From<std::io::Error> for BankError {
    fn from(error: std::io::Error) -> Self {
        BankError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to BankError
impl From<csv::Error> for BankError {
    fn from(error: csv::Error) -> Self {
        BankError::Export {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BankError {
    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        BankError::AccountNotFound { account }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        BankError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountNumber, balance: Decimal, requested: Decimal) -> Self {
        BankError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create a SelfTransfer error
    pub fn self_transfer(account: AccountNumber) -> Self {
        BankError::SelfTransfer { account }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        BankError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create an InsufficientCash error
    pub fn insufficient_cash(available: Decimal, requested: Decimal) -> Self {
        BankError::InsufficientCash {
            available,
            requested,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(input: &str, expected: &str) -> Self {
        BankError::InvalidInput {
            input: input.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Whether this error was caused by console or file I/O
    ///
    /// I/O errors end an interactive session, everything else is reported
    /// and the menu continues.
    pub fn is_io(&self) -> bool {
        matches!(self, BankError::Io { .. })
    }
}
