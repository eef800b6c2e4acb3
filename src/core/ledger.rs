//! Ledger
//!
//! This module provides the Ledger, the single owner and sole mutator of
//! account state. It validates each request and delegates the balance
//! update and history append to the [`AccountStore`].
//!
//! The ledger enforces business rules such as:
//! - Amounts must be strictly positive
//! - Debits may not exceed the balance
//! - Transfers need two existing, distinct accounts
//! - A rejected request leaves every account untouched

use crate::core::account_store::AccountStore;
use crate::core::traits::Banking;
use crate::types::{Account, AccountNumber, AccountType, BankError};
use rust_decimal::Decimal;
use tracing::{debug, info};

/// In-memory banking ledger
///
/// Owns every account and the account number generator.
#[derive(Debug, Default)]
pub struct Ledger {
    store: AccountStore,
}

impl Ledger {
    /// Create an empty ledger
    ///
    /// The first account opened receives number 1000.
    pub fn new() -> Self {
        Ledger {
            store: AccountStore::new(),
        }
    }

    /// Open a new account
    ///
    /// The account starts with a zero balance, an empty history and the
    /// current time as creation date. Never fails; the name is not
    /// validated.
    ///
    /// # Returns
    ///
    /// The newly issued account number
    pub fn create_account(
        &mut self,
        name: &str,
        account_type: AccountType,
        password: &str,
    ) -> AccountNumber {
        let number = self.store.open(name, account_type, password);
        info!(account = number, %account_type, "account created");
        number
    }

    /// Deposit funds into an account
    ///
    /// Increases the balance and appends a DEPOSIT entry with no paying side.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - The amount is zero or negative
    /// - The balance would overflow
    pub fn deposit(
        &mut self,
        account: AccountNumber,
        amount: Decimal,
        description: &str,
    ) -> Result<(), BankError> {
        self.store.require(account)?;
        ensure_positive(amount)?;

        self.store.credit(account, amount, description)?;
        debug!(account, %amount, "deposit applied");

        Ok(())
    }

    /// Withdraw funds from an account
    ///
    /// Decreases the balance and appends a WITHDRAWAL entry with no
    /// receiving side.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - The amount is zero or negative
    /// - The amount exceeds the balance
    pub fn withdraw(
        &mut self,
        account: AccountNumber,
        amount: Decimal,
        description: &str,
    ) -> Result<(), BankError> {
        self.store.require(account)?;
        ensure_positive(amount)?;

        self.store.debit(account, amount, description)?;
        debug!(account, %amount, "withdrawal applied");

        Ok(())
    }

    /// Transfer funds between two accounts
    ///
    /// On success the sender is debited and the receiver credited, and each
    /// gets one history entry (TRANSFER_OUT / TRANSFER_IN) naming the same
    /// sender and receiver.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either account does not exist
    /// - Source and destination are the same account
    /// - The amount is zero or negative
    /// - The amount exceeds the sender's balance
    pub fn transfer(
        &mut self,
        from: AccountNumber,
        to: AccountNumber,
        amount: Decimal,
        description: &str,
    ) -> Result<(), BankError> {
        self.store.require(from)?;
        self.store.require(to)?;

        if from == to {
            return Err(BankError::self_transfer(from));
        }
        ensure_positive(amount)?;

        self.store.move_funds(from, to, amount, description)?;
        debug!(from, to, %amount, "transfer applied");

        Ok(())
    }

    /// Read-only view of an account
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account has this number
    pub fn statement(&self, account: AccountNumber) -> Result<&Account, BankError> {
        self.store.require(account)
    }

    /// All accounts in creation order
    pub fn accounts(&self) -> Vec<&Account> {
        self.store.all_accounts()
    }

    /// Number of accounts opened
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl Banking for Ledger {
    fn create_account(
        &mut self,
        name: &str,
        account_type: AccountType,
        password: &str,
    ) -> AccountNumber {
        Ledger::create_account(self, name, account_type, password)
    }

    fn deposit(
        &mut self,
        account: AccountNumber,
        amount: Decimal,
        description: &str,
    ) -> Result<(), BankError> {
        Ledger::deposit(self, account, amount, description)
    }

    fn withdraw(
        &mut self,
        account: AccountNumber,
        amount: Decimal,
        description: &str,
    ) -> Result<(), BankError> {
        Ledger::withdraw(self, account, amount, description)
    }

    fn transfer(
        &mut self,
        from: AccountNumber,
        to: AccountNumber,
        amount: Decimal,
        description: &str,
    ) -> Result<(), BankError> {
        Ledger::transfer(self, from, to, amount, description)
    }

    fn statement(&self, account: AccountNumber) -> Result<Account, BankError> {
        Ledger::statement(self, account).cloned()
    }

    fn accounts(&self) -> Vec<Account> {
        Ledger::accounts(self).into_iter().cloned().collect()
    }
}

fn ensure_positive(amount: Decimal) -> Result<(), BankError> {
    if amount <= Decimal::ZERO {
        return Err(BankError::invalid_amount(amount));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionKind;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn dec(value: i64) -> Decimal {
        Decimal::new(value, 0)
    }

    fn funded_ledger(balance: i64) -> Ledger {
        let mut ledger = Ledger::new();
        ledger.create_account("Ada", AccountType::Savings, "pw");
        ledger.create_account("Grace", AccountType::Current, "pw");
        if balance > 0 {
            ledger.deposit(1000, dec(balance), "seed").unwrap();
        }
        ledger
    }

    #[test]
    fn test_create_account_starts_at_zero() {
        let mut ledger = Ledger::new();

        let number = ledger.create_account("Ada", AccountType::Savings, "pw");

        assert_eq!(number, 1000);
        let account = ledger.statement(number).unwrap();
        assert_eq!(account.balance, Decimal::ZERO);
        assert_eq!(account.account_type, AccountType::Savings);
        assert!(account.transactions.is_empty());
    }

    #[test]
    fn test_create_account_numbers_strictly_increase() {
        let mut ledger = Ledger::new();

        let numbers: Vec<AccountNumber> = (0..4)
            .map(|_| ledger.create_account("x", AccountType::Current, "pw"))
            .collect();

        assert_eq!(numbers, vec![1000, 1001, 1002, 1003]);
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn test_deposit_records_transaction() {
        let mut ledger = funded_ledger(0);

        ledger.deposit(1000, dec(500), "salary").unwrap();

        let account = ledger.statement(1000).unwrap();
        assert_eq!(account.balance, dec(500));
        assert_eq!(account.transactions.len(), 1);
        assert_eq!(account.transactions[0].kind, TransactionKind::Deposit);
        assert_eq!(account.transactions[0].id, 1);
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(Decimal::new(-1, 2))]
    fn test_deposit_rejects_non_positive_amount(#[case] amount: Decimal) {
        let mut ledger = funded_ledger(0);

        let result = ledger.deposit(1000, amount, "nothing");

        assert_eq!(result.unwrap_err(), BankError::invalid_amount(amount));
        assert!(ledger.statement(1000).unwrap().transactions.is_empty());
    }

    #[test]
    fn test_deposit_to_unknown_account() {
        let mut ledger = Ledger::new();

        let result = ledger.deposit(1000, dec(10), "lost");

        assert_eq!(result.unwrap_err(), BankError::account_not_found(1000));
    }

    #[test]
    fn test_unknown_account_reported_before_invalid_amount() {
        let mut ledger = Ledger::new();

        let result = ledger.withdraw(1234, Decimal::ZERO, "both wrong");

        assert_eq!(result.unwrap_err(), BankError::account_not_found(1234));
    }

    #[test]
    fn test_withdraw_records_transaction() {
        let mut ledger = funded_ledger(500);

        ledger.withdraw(1000, dec(200), "rent").unwrap();

        let account = ledger.statement(1000).unwrap();
        assert_eq!(account.balance, dec(300));
        let tx = &account.transactions[1];
        assert_eq!(tx.id, 2);
        assert_eq!(tx.kind, TransactionKind::Withdrawal);
        assert_eq!(tx.description, "rent");
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(dec(-20))]
    fn test_withdraw_rejects_non_positive_amount(#[case] amount: Decimal) {
        let mut ledger = funded_ledger(100);

        let result = ledger.withdraw(1000, amount, "nothing");

        assert!(matches!(result, Err(BankError::InvalidAmount { .. })));
        let account = ledger.statement(1000).unwrap();
        assert_eq!(account.balance, dec(100));
        assert_eq!(account.transactions.len(), 1);
    }

    #[test]
    fn test_withdraw_more_than_balance_has_no_effect() {
        let mut ledger = funded_ledger(200);
        let before = ledger.statement(1000).unwrap().clone();

        let result = ledger.withdraw(1000, dec(1000), "too much");

        assert!(matches!(
            result.unwrap_err(),
            BankError::InsufficientFunds { .. }
        ));
        assert_eq!(ledger.statement(1000).unwrap(), &before);
    }

    #[test]
    fn test_transfer_moves_funds() {
        let mut ledger = funded_ledger(300);

        ledger.transfer(1000, 1001, dec(100), "gift").unwrap();

        assert_eq!(ledger.statement(1000).unwrap().balance, dec(200));
        assert_eq!(ledger.statement(1001).unwrap().balance, dec(100));
    }

    #[rstest]
    #[case::self_transfer(1000, 1000, 50, BankError::self_transfer(1000))]
    #[case::missing_sender(4000, 1001, 50, BankError::account_not_found(4000))]
    #[case::missing_receiver(1000, 4000, 50, BankError::account_not_found(4000))]
    #[case::zero_amount(1000, 1001, 0, BankError::invalid_amount(Decimal::ZERO))]
    #[case::insufficient(
        1000,
        1001,
        301,
        BankError::insufficient_funds(1000, Decimal::new(300, 0), Decimal::new(301, 0))
    )]
    fn test_transfer_failures_have_no_effect(
        #[case] from: AccountNumber,
        #[case] to: AccountNumber,
        #[case] amount: i64,
        #[case] expected: BankError,
    ) {
        let mut ledger = funded_ledger(300);
        let before: Vec<Account> = ledger.accounts().into_iter().cloned().collect();

        let result = ledger.transfer(from, to, dec(amount), "rejected");

        assert_eq!(result.unwrap_err(), expected);
        let after: Vec<Account> = ledger.accounts().into_iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_self_transfer_fails_even_with_funds() {
        let mut ledger = funded_ledger(1_000_000);

        let result = ledger.transfer(1000, 1000, dec(1), "loop");

        assert!(matches!(result, Err(BankError::SelfTransfer { .. })));
    }

    #[test]
    fn test_statement_of_unknown_account() {
        let ledger = Ledger::new();
        assert_eq!(
            ledger.statement(1000).unwrap_err(),
            BankError::account_not_found(1000)
        );
    }

    #[test]
    fn test_banking_trait_returns_snapshots() {
        let mut ledger = funded_ledger(50);

        let snapshot = Banking::statement(&ledger, 1000).unwrap();
        Banking::deposit(&mut ledger, 1000, dec(25), "later").unwrap();

        assert_eq!(snapshot.balance, dec(50));
        assert_eq!(ledger.statement(1000).unwrap().balance, dec(75));
        assert_eq!(Banking::accounts(&ledger).len(), 2);
    }
}
