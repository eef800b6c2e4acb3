use crate::core::AtmConfig;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Interactive online banking ledger and ATM simulator
#[derive(Parser, Debug)]
#[command(name = "online-banking")]
#[command(about = "Interactive online banking ledger and ATM simulator", long_about = None)]
pub struct CliArgs {
    /// Log level used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        global = true,
        help = "Log level for stderr diagnostics when RUST_LOG is unset (error, warn, info, debug, trace)"
    )]
    pub log_level: String,

    /// Which program to run (defaults to the banking menu)
    #[command(subcommand)]
    pub mode: Option<Mode>,
}

/// Available programs
#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Mode {
    /// Online banking menu: accounts, deposits, withdrawals, transfers, statements
    Banking(BankingArgs),
    /// ATM simulator for a single account
    Atm(AtmArgs),
}

/// Options of the banking menu
#[derive(Args, Clone, Debug, Default, PartialEq)]
pub struct BankingArgs {
    /// Write the account summary as CSV to this file on exit
    #[arg(long = "export-accounts", value_name = "PATH")]
    pub export_accounts: Option<PathBuf>,

    /// Write each account's transaction history as CSV into this directory on exit
    #[arg(long = "export-transactions", value_name = "DIR")]
    pub export_transactions: Option<PathBuf>,
}

/// Options of the ATM simulator
#[derive(Args, Clone, Debug, PartialEq)]
pub struct AtmArgs {
    #[arg(long = "card-number", value_name = "CARD", default_value = "123456789")]
    pub card_number: String,

    #[arg(long = "pin", value_name = "PIN", default_value = "1234")]
    pub pin: String,

    #[arg(long = "holder", value_name = "NAME", default_value = "ATM Customer")]
    pub holder: String,

    #[arg(long = "opening-balance", value_name = "AMOUNT", default_value = "5000")]
    pub opening_balance: Decimal,

    /// Cash loaded in the machine
    #[arg(long = "cash", value_name = "AMOUNT", default_value = "10000")]
    pub cash: Decimal,

    #[arg(long = "admin-user", value_name = "USER", default_value = "admin")]
    pub admin_username: String,

    #[arg(long = "admin-password", value_name = "PASSWORD", default_value = "admin123")]
    pub admin_password: String,
}

impl CliArgs {
    /// Selected program, the banking menu when none was given
    pub fn mode(&self) -> Mode {
        self.mode
            .clone()
            .unwrap_or_else(|| Mode::Banking(BankingArgs::default()))
    }
}

impl AtmArgs {
    /// Create an AtmConfig from CLI arguments
    pub fn to_atm_config(&self) -> AtmConfig {
        AtmConfig {
            card_number: self.card_number.clone(),
            pin: self.pin.clone(),
            holder: self.holder.clone(),
            opening_balance: self.opening_balance,
            cash: self.cash,
            admin_username: self.admin_username.clone(),
            admin_password: self.admin_password.clone(),
        }
    }
}
