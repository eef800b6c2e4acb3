//! Online Banking Library
//! # Overview
//!
//! This library provides an in-memory banking ledger with interactive console
//! front ends: a multi-account online banking menu and a single-account ATM.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, BankError, etc.)
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Request validation and orchestration
//!   - [`core::account_store`] - Account ownership, numbering and balance arithmetic
//!   - [`core::shared`] - Lock-guarded ledger handle for concurrent callers
//!   - [`core::atm`] - Cash machine over a single ledger account
//! - [`io`] - Statement rendering and CSV export
//! - [`cli`] - Argument parsing and the interactive menus
//! - [`logging`] - Tracing subscriber setup
//!
//! # Operations
//!
//! The ledger supports four balance-affecting operations:
//!
//! - **Deposit**: Credit funds to an account
//! - **Withdrawal**: Debit funds from an account (requires sufficient balance)
//! - **Transfer out / in**: Move funds between two distinct accounts, recorded
//!   on both sides
//!
//! Every successful operation appends one transaction per affected account;
//! a rejected operation changes nothing.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod types;

pub use core::{Atm, AtmConfig, Banking, Ledger, SharedLedger};
pub use io::{render_statement, write_accounts_csv, write_transactions_csv};
pub use types::{
    Account, AccountNumber, AccountType, BankError, Transaction, TransactionId, TransactionKind,
};
