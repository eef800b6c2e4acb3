//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account record and account type
//! - `transaction`: Transaction records, kinds and identifiers
//! - `error`: Error type for the ledger, the ATM and the menus

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountType};
pub use error::BankError;
pub use transaction::{AccountNumber, Transaction, TransactionId, TransactionKind};
