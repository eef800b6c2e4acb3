//! I/O module
//!
//! Handles statement rendering and CSV export.
//!
//! # Components
//!
//! - `statement` - Fixed-width text statement for the interactive menu
//! - `csv_format` - CSV export of account summaries and transaction histories

pub mod csv_format;
pub mod statement;

pub use csv_format::{write_accounts_csv, write_transactions_csv, AccountRow, TransactionRow};
pub use statement::{format_money, render_statement};
