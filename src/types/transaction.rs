//! Transaction-related types for the online banking ledger
//!
//! This module defines the identifiers, transaction kinds and the immutable
//! transaction record appended to an account's history.

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Account number
///
/// Issued sequentially by the ledger, starting at 1000.
pub type AccountNumber = u32;

/// Per-account transaction identifier
///
/// 1-based and only unique within the owning account's history.
pub type TransactionId = u32;

/// Kinds of balance-affecting events recorded in an account history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Credit from outside the ledger
    ///
    /// Increases the balance. Only the receiving side is set.
    Deposit,

    /// Debit to outside the ledger
    ///
    /// Decreases the balance. Only the paying side is set.
    Withdrawal,

    /// Sender half of a transfer between two ledger accounts
    TransferOut,

    /// Receiver half of a transfer between two ledger accounts
    TransferIn,
}

impl TransactionKind {
    /// Label used in statements and exports
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdrawal => "WITHDRAWAL",
            TransactionKind::TransferOut => "TRANSFER_OUT",
            TransactionKind::TransferIn => "TRANSFER_IN",
        }
    }

    /// Whether this kind adds to the owning account's balance
    pub fn is_credit(&self) -> bool {
        matches!(self, TransactionKind::Deposit | TransactionKind::TransferIn)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry in an account's history
///
/// Created only by the ledger as a side effect of a successful deposit,
/// withdrawal or transfer. Never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Position in the owning account's history (1, 2, 3, ...)
    pub id: TransactionId,

    pub kind: TransactionKind,

    /// Always strictly positive
    pub amount: Decimal,

    pub timestamp: DateTime<Local>,

    /// Paying account, `None` for deposits
    pub from_account: Option<AccountNumber>,

    /// Receiving account, `None` for withdrawals
    pub to_account: Option<AccountNumber>,

    /// Free text supplied by the caller
    pub description: String,
}

impl Transaction {
    /// Signed effect of this entry on the owning account's balance
    pub fn signed_amount(&self) -> Decimal {
        if self.kind.is_credit() {
            self.amount
        } else {
            -self.amount
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::deposit(TransactionKind::Deposit, "DEPOSIT", true)]
    #[case::withdrawal(TransactionKind::Withdrawal, "WITHDRAWAL", false)]
    #[case::transfer_out(TransactionKind::TransferOut, "TRANSFER_OUT", false)]
    #[case::transfer_in(TransactionKind::TransferIn, "TRANSFER_IN", true)]
    fn test_kind_labels_and_direction(
        #[case] kind: TransactionKind,
        #[case] label: &str,
        #[case] credit: bool,
    ) {
        assert_eq!(kind.to_string(), label);
        assert_eq!(kind.is_credit(), credit);
    }

    #[test]
    fn test_signed_amount_follows_kind() {
        let mut tx = Transaction {
            id: 1,
            kind: TransactionKind::TransferOut,
            amount: Decimal::new(2500, 2),
            timestamp: Local::now(),
            from_account: Some(1000),
            to_account: Some(1001),
            description: "rent".to_string(),
        };
        assert_eq!(tx.signed_amount(), Decimal::new(-2500, 2));

        tx.kind = TransactionKind::TransferIn;
        assert_eq!(tx.signed_amount(), Decimal::new(2500, 2));
    }
}
