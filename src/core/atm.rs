//! ATM front end
//!
//! A single cash machine serving one fixed account held in its own
//! [`Ledger`]. Customer operations require a session opened with a card and
//! authenticated with a PIN; withdrawals are additionally limited by the
//! machine's cash pool. Administrators refill the pool.
//!
//! PIN and admin password are compared in plain text, exactly as configured.

use crate::core::ledger::Ledger;
use crate::types::{Account, AccountNumber, AccountType, BankError};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// Length of a valid PIN
pub const PIN_LENGTH: usize = 4;

/// Startup configuration of an ATM
#[derive(Debug, Clone, PartialEq)]
pub struct AtmConfig {
    /// Card number printed on the customer's card
    pub card_number: String,
    /// Initial PIN
    pub pin: String,
    /// Holder name of the served account
    pub holder: String,
    /// Balance the account starts with
    pub opening_balance: Decimal,
    /// Cash loaded in the machine
    pub cash: Decimal,
    /// Administrator login name
    pub admin_username: String,
    /// Administrator password
    pub admin_password: String,
}

impl Default for AtmConfig {
    fn default() -> Self {
        Self {
            card_number: "123456789".to_string(),
            pin: "1234".to_string(),
            holder: "ATM Customer".to_string(),
            opening_balance: Decimal::new(5000, 0),
            cash: Decimal::new(10000, 0),
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
        }
    }
}

/// Cash machine bound to one ledger account
#[derive(Debug)]
pub struct Atm {
    ledger: Ledger,
    account: AccountNumber,
    card_number: String,
    pin: String,
    cash_available: Decimal,
    admin_username: String,
    admin_password: String,
    /// Card inserted in the current session
    current_card: Option<String>,
    authenticated: bool,
}

impl Atm {
    /// Build an ATM from its configuration
    ///
    /// Opens the served account and records a positive opening balance as
    /// a deposit.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The opening balance or cash pool is negative
    /// - The configured PIN is not four digits
    pub fn new(config: AtmConfig) -> Result<Self, BankError> {
        if config.opening_balance < Decimal::ZERO {
            return Err(BankError::invalid_amount(config.opening_balance));
        }
        if config.cash < Decimal::ZERO {
            return Err(BankError::invalid_amount(config.cash));
        }
        validate_pin(&config.pin)?;

        let mut ledger = Ledger::new();
        let account = ledger.create_account(&config.holder, AccountType::Current, &config.pin);
        if config.opening_balance > Decimal::ZERO {
            ledger.deposit(account, config.opening_balance, "Opening balance")?;
        }

        Ok(Self {
            ledger,
            account,
            card_number: config.card_number,
            pin: config.pin,
            cash_available: config.cash,
            admin_username: config.admin_username,
            admin_password: config.admin_password,
            current_card: None,
            authenticated: false,
        })
    }

    /// Start a session with a card
    ///
    /// The session starts unauthenticated. A card other than the configured
    /// one is taken but can never be authenticated.
    pub fn insert_card(&mut self, card: &str) -> Result<(), BankError> {
        if card.is_empty() {
            return Err(BankError::EmptyCardNumber);
        }
        self.current_card = Some(card.to_string());
        self.authenticated = false;
        Ok(())
    }

    /// Authenticate the session
    ///
    /// # Returns
    ///
    /// Whether the inserted card is the configured one and the PIN matched.
    /// Otherwise the session stays unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPinFormat` if the PIN is not four digits
    pub fn enter_pin(&mut self, pin: &str) -> Result<bool, BankError> {
        validate_pin(pin)?;
        let card_matches = self.current_card.as_deref() == Some(self.card_number.as_str());
        self.authenticated = card_matches && pin == self.pin;
        if self.authenticated {
            info!(account = self.account, "ATM session authenticated");
        } else {
            warn!(account = self.account, "ATM PIN rejected");
        }
        Ok(self.authenticated)
    }

    /// Card inserted and PIN accepted
    pub fn logged_in(&self) -> bool {
        self.authenticated
    }

    /// Card inserted in the current session
    pub fn current_card(&self) -> Option<&str> {
        self.current_card.as_deref()
    }

    /// Balance of the served account
    pub fn check_balance(&self) -> Result<Decimal, BankError> {
        self.ensure_authenticated()?;
        Ok(self.account_view()?.balance)
    }

    /// Dispense cash from the served account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The session is not authenticated
    /// - The amount is zero or negative
    /// - The amount exceeds the account balance
    /// - The amount exceeds the cash in the machine
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), BankError> {
        self.ensure_authenticated()?;
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }

        let balance = self.account_view()?.balance;
        if amount > balance {
            return Err(BankError::insufficient_funds(self.account, balance, amount));
        }
        if amount > self.cash_available {
            return Err(BankError::insufficient_cash(self.cash_available, amount));
        }

        self.ledger.withdraw(self.account, amount, "ATM withdrawal")?;
        self.cash_available -= amount;
        debug!(%amount, cash = %self.cash_available, "ATM cash dispensed");

        Ok(())
    }

    /// Accept cash into the served account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The session is not authenticated
    /// - The amount is zero or negative
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), BankError> {
        self.ensure_authenticated()?;
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }
        let cash = self
            .cash_available
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("ATM deposit", self.account))?;

        self.ledger.deposit(self.account, amount, "ATM deposit")?;
        self.cash_available = cash;
        debug!(%amount, cash = %self.cash_available, "ATM cash accepted");

        Ok(())
    }

    /// Replace the PIN
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The session is not authenticated
    /// - `old_pin` does not match the current PIN
    /// - `new_pin` is not four digits
    pub fn change_pin(&mut self, old_pin: &str, new_pin: &str) -> Result<(), BankError> {
        self.ensure_authenticated()?;
        if old_pin != self.pin {
            return Err(BankError::IncorrectPin);
        }
        validate_pin(new_pin)?;

        self.pin = new_pin.to_string();
        info!(account = self.account, "ATM PIN changed");
        Ok(())
    }

    /// Eject the card and drop authentication
    pub fn end_session(&mut self) {
        self.current_card = None;
        self.authenticated = false;
    }

    /// Check administrator credentials
    pub fn admin_login(&self, username: &str, password: &str) -> bool {
        username == self.admin_username && password == self.admin_password
    }

    /// Add cash to the machine
    ///
    /// # Errors
    ///
    /// Returns `InvalidAmount` if the amount is zero or negative
    pub fn refill(&mut self, amount: Decimal) -> Result<(), BankError> {
        if amount <= Decimal::ZERO {
            return Err(BankError::invalid_amount(amount));
        }
        self.cash_available = self
            .cash_available
            .checked_add(amount)
            .ok_or_else(|| BankError::arithmetic_overflow("refill", self.account))?;
        info!(%amount, cash = %self.cash_available, "ATM refilled");
        Ok(())
    }

    /// Cash currently loaded in the machine
    pub fn cash_available(&self) -> Decimal {
        self.cash_available
    }

    /// History of the served account
    pub fn mini_statement(&self) -> Result<&Account, BankError> {
        self.ensure_authenticated()?;
        self.account_view()
    }

    fn account_view(&self) -> Result<&Account, BankError> {
        self.ledger.statement(self.account)
    }

    fn ensure_authenticated(&self) -> Result<(), BankError> {
        if !self.authenticated {
            return Err(BankError::NotAuthenticated);
        }
        Ok(())
    }
}

fn validate_pin(pin: &str) -> Result<(), BankError> {
    if pin.len() != PIN_LENGTH || !pin.chars().all(|c| c.is_ascii_digit()) {
        return Err(BankError::InvalidPinFormat);
    }
    Ok(())
}
