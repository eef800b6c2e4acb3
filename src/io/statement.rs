//! Statement rendering
//!
//! Renders an account as the fixed-width text statement shown by the
//! banking menu. Pure formatting: the caller chooses the writer.

use crate::types::{Account, AccountNumber, BankError, Transaction};
use chrono::{DateTime, Local};
use rust_decimal::{Decimal, RoundingStrategy};
use std::io::Write;

/// Timestamp layout used in statements and exports
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const RULE: &str = "----------------------------------------";
const TABLE_RULE: &str = "------------------------------------------------------------";

/// Format an amount with two decimals, rounding half away from zero
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Format a timestamp for display
pub fn format_timestamp(timestamp: &DateTime<Local>) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Format one side of a transaction, `N/A` when it does not apply
pub fn format_party(party: Option<AccountNumber>) -> String {
    party.map_or_else(|| "N/A".to_string(), |number| number.to_string())
}

/// Write the statement for one account
///
/// The header lists number, holder, type, balance and creation date. When
/// the account has history, a table with one row per transaction follows
/// (ID, Type, Amount, Date/Time, From, To, Description).
pub fn render_statement(account: &Account, output: &mut dyn Write) -> Result<(), BankError> {
    writeln!(output, "\n{}", RULE)?;
    writeln!(output, "          ACCOUNT STATEMENT")?;
    writeln!(output, "{}", RULE)?;
    writeln!(output, "{:<20}{}", "Account Number:", account.account_number)?;
    writeln!(output, "{:<20}{}", "Account Holder:", account.name)?;
    writeln!(output, "{:<20}{}", "Account Type:", account.account_type)?;
    writeln!(output, "{:<20}{} $", "Balance:", format_money(account.balance))?;
    writeln!(
        output,
        "{:<20}{}",
        "Creation Date:",
        format_timestamp(&account.created_at)
    )?;
    writeln!(output, "{}", RULE)?;

    if account.transactions.is_empty() {
        writeln!(output, "\nNo transactions found for this account.")?;
        return Ok(());
    }

    writeln!(output, "\nTRANSACTION HISTORY:")?;
    writeln!(
        output,
        "{:<8}{:<15}{:<12}{:<22}{:<12}{:<12}Description",
        "ID", "Type", "Amount", "Date/Time", "From", "To"
    )?;
    writeln!(output, "{}", TABLE_RULE)?;
    for transaction in &account.transactions {
        write_row(transaction, output)?;
    }
    writeln!(output, "{}", RULE)?;

    Ok(())
}

fn write_row(transaction: &Transaction, output: &mut dyn Write) -> Result<(), BankError> {
    writeln!(
        output,
        "{:<8}{:<15}{:<12}{:<22}{:<12}{:<12}{}",
        transaction.id,
        transaction.kind.as_str(),
        format_money(transaction.amount),
        format_timestamp(&transaction.timestamp),
        format_party(transaction.from_account),
        format_party(transaction.to_account),
        transaction.description
    )?;
    Ok(())
}
