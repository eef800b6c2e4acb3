//! Account storage module
//!
//! This module provides the `AccountStore` struct which owns every account,
//! issues account numbers and applies balance changes together with the
//! matching history entries.
//!
//! The AccountStore is responsible for:
//! - Issuing sequential account numbers starting at [`FIRST_ACCOUNT_NUMBER`]
//! - Keyed lookup by account number
//! - Remembering creation order for deterministic listings
//! - Checked balance arithmetic, with the transaction appended in the same step

use crate::types::{Account, AccountNumber, AccountType, BankError, Transaction, TransactionKind};
use chrono::Local;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// First account number issued by a fresh store
pub const FIRST_ACCOUNT_NUMBER: AccountNumber = 1000;

/// Owns all accounts and the account number generator
///
/// Accounts are keyed by number for lookup; a separate list keeps the
/// creation order so listings are stable.
#[derive(Debug)]
pub struct AccountStore {
    /// Map of account numbers to account records
    accounts: HashMap<AccountNumber, Account>,

    /// Account numbers in creation order
    order: Vec<AccountNumber>,

    /// Number the next created account receives
    next_number: AccountNumber,
}

impl AccountStore {
    /// Create an empty store issuing numbers from [`FIRST_ACCOUNT_NUMBER`]
    pub fn new() -> Self {
        AccountStore {
            accounts: HashMap::new(),
            order: Vec::new(),
            next_number: FIRST_ACCOUNT_NUMBER,
        }
    }

    /// Open a new account and return its number
    ///
    /// Numbers are issued sequentially and never reused.
    pub fn open(&mut self, name: &str, account_type: AccountType, password: &str) -> AccountNumber {
        let number = self.next_number;
        self.next_number += 1;

        self.accounts
            .insert(number, Account::new(number, name, account_type, password));
        self.order.push(number);

        number
    }

    /// Look up an account by number
    pub fn get(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.get(&number)
    }

    /// Look up an account, failing with `AccountNotFound`
    pub fn require(&self, number: AccountNumber) -> Result<&Account, BankError> {
        self.get(number)
            .ok_or_else(|| BankError::account_not_found(number))
    }

    /// Number of accounts opened so far
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Get all accounts in creation order
    pub fn all_accounts(&self) -> Vec<&Account> {
        self.order
            .iter()
            .filter_map(|number| self.accounts.get(number))
            .collect()
    }

    /// Credit an account from outside the ledger (deposit)
    ///
    /// Increases the balance by `amount` and appends a DEPOSIT entry whose
    /// receiving side is the account.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - Adding the amount would overflow the balance
    pub fn credit(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
        description: &str,
    ) -> Result<(), BankError> {
        let account = self
            .accounts
            .get_mut(&number)
            .ok_or_else(|| BankError::account_not_found(number))?;

        let new_balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("deposit", number))?;

        account.balance = new_balance;
        append(
            account,
            TransactionKind::Deposit,
            amount,
            None,
            Some(number),
            description,
        );

        Ok(())
    }

    /// Debit an account to outside the ledger (withdrawal)
    ///
    /// Decreases the balance by `amount` and appends a WITHDRAWAL entry whose
    /// paying side is the account.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - The amount exceeds the balance
    pub fn debit(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
        description: &str,
    ) -> Result<(), BankError> {
        let account = self
            .accounts
            .get_mut(&number)
            .ok_or_else(|| BankError::account_not_found(number))?;

        if account.balance < amount {
            return Err(BankError::insufficient_funds(
                number,
                account.balance,
                amount,
            ));
        }

        let new_balance = account
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("withdrawal", number))?;

        account.balance = new_balance;
        append(
            account,
            TransactionKind::Withdrawal,
            amount,
            Some(number),
            None,
            description,
        );

        Ok(())
    }

    /// Move funds between two distinct accounts
    ///
    /// Both new balances are computed before either account is touched, so
    /// a failure leaves both accounts as they were. On success the sender
    /// gets a TRANSFER_OUT entry and the receiver a TRANSFER_IN entry, both
    /// carrying the same (from, to) pair and timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either account does not exist
    /// - The amount exceeds the sender's balance
    /// - Crediting the receiver would overflow
    pub fn move_funds(
        &mut self,
        from: AccountNumber,
        to: AccountNumber,
        amount: Decimal,
        description: &str,
    ) -> Result<(), BankError> {
        let sender = self.require(from)?;
        let receiver = self.require(to)?;

        if sender.balance < amount {
            return Err(BankError::insufficient_funds(from, sender.balance, amount));
        }

        let sender_balance = sender
            .balance
            .checked_sub(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("transfer", from))?;
        let receiver_balance = receiver
            .balance
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("transfer", to))?;

        let timestamp = Local::now();

        // Both lookups were checked above
        if let Some(sender) = self.accounts.get_mut(&from) {
            sender.balance = sender_balance;
            sender.transactions.push(Transaction {
                id: sender.next_transaction_id(),
                kind: TransactionKind::TransferOut,
                amount,
                timestamp,
                from_account: Some(from),
                to_account: Some(to),
                description: description.to_string(),
            });
        }
        if let Some(receiver) = self.accounts.get_mut(&to) {
            receiver.balance = receiver_balance;
            receiver.transactions.push(Transaction {
                id: receiver.next_transaction_id(),
                kind: TransactionKind::TransferIn,
                amount,
                timestamp,
                from_account: Some(from),
                to_account: Some(to),
                description: description.to_string(),
            });
        }

        Ok(())
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}

fn append(
    account: &mut Account,
    kind: TransactionKind,
    amount: Decimal,
    from_account: Option<AccountNumber>,
    to_account: Option<AccountNumber>,
    description: &str,
) {
    let id = account.next_transaction_id();
    account.transactions.push(Transaction {
        id,
        kind,
        amount,
        timestamp: Local::now(),
        from_account,
        to_account,
        description: description.to_string(),
    });
}
