//! CSV export of accounts and transaction histories
//!
//! This module centralizes the CSV format concerns:
//! - AccountRow / TransactionRow structures for serialization
//! - Account summary output in creation order
//! - Per-account transaction history output
//!
//! Amounts are written with two decimals, missing transfer sides as `N/A`.

use crate::io::statement::{format_money, format_party, format_timestamp};
use crate::types::{Account, AccountNumber, AccountType, BankError, TransactionId, TransactionKind};
use serde::Serialize;
use std::io::Write;

/// One line of the account summary
///
/// Columns: account, name, type, balance
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct AccountRow {
    pub account: AccountNumber,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub balance: String,
}

impl From<&Account> for AccountRow {
    fn from(account: &Account) -> Self {
        AccountRow {
            account: account.account_number,
            name: account.name.clone(),
            account_type: account.account_type,
            balance: format_money(account.balance),
        }
    }
}

/// One line of a transaction history export
///
/// Columns: id, type, amount, timestamp, from, to, description
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TransactionRow {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: String,
    pub timestamp: String,
    pub from: String,
    pub to: String,
    pub description: String,
}

/// Write the account summary to CSV
///
/// Accounts are written in the order given; ledger listings are already in
/// creation order. A header row is always written.
///
/// # Errors
///
/// Returns `Export` or `Io` if writing fails
pub fn write_accounts_csv(accounts: &[Account], output: &mut dyn Write) -> Result<(), BankError> {
    let mut writer = csv::Writer::from_writer(output);

    if accounts.is_empty() {
        writer.write_record(["account", "name", "type", "balance"])?;
    }
    for account in accounts {
        writer.serialize(AccountRow::from(account))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write one account's transaction history to CSV
///
/// # Errors
///
/// Returns `Export` or `Io` if writing fails
pub fn write_transactions_csv(account: &Account, output: &mut dyn Write) -> Result<(), BankError> {
    let mut writer = csv::Writer::from_writer(output);

    if account.transactions.is_empty() {
        writer.write_record(["id", "type", "amount", "timestamp", "from", "to", "description"])?;
    }
    for transaction in &account.transactions {
        writer.serialize(TransactionRow {
            id: transaction.id,
            kind: transaction.kind,
            amount: format_money(transaction.amount),
            timestamp: format_timestamp(&transaction.timestamp),
            from: format_party(transaction.from_account),
            to: format_party(transaction.to_account),
            description: transaction.description.clone(),
        })?;
    }

    writer.flush()?;
    Ok(())
}
