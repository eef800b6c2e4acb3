// CLI module
// Command-line parsing, the line console and the interactive menus

mod args;
pub mod atm_menu;
pub mod banking_menu;
mod console;

pub use args::{AtmArgs, BankingArgs, CliArgs, Mode};
pub use console::Console;

use crate::core::{Atm, Banking, Ledger};
use crate::io::{write_accounts_csv, write_transactions_csv};
use crate::types::BankError;
use clap::Parser;
use std::fs::File;
use std::io::{BufRead, Write};
use tracing::info;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., invalid arguments or --help flag), clap will
/// automatically display an error message or help text and exit the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Run the selected program over the given input and output
///
/// The banking menu starts with an empty ledger. Configured exports are
/// written once the menu ends: the account summary to one file, and each
/// account's history to `account_<number>.csv` in the export directory.
///
/// # Errors
///
/// Returns an error if the ATM configuration is invalid, the console fails,
/// or the export file cannot be written
pub fn run<R: BufRead, W: Write>(args: &CliArgs, input: R, output: W) -> Result<(), BankError> {
    let mut console = Console::new(input, output);

    match args.mode() {
        Mode::Banking(banking) => {
            let mut ledger = Ledger::new();
            banking_menu::run(&mut ledger, &mut console)?;

            if let Some(path) = banking.export_accounts {
                let accounts = Banking::accounts(&ledger);
                let mut file = File::create(&path)?;
                write_accounts_csv(&accounts, &mut file)?;
                info!(path = %path.display(), accounts = accounts.len(), "accounts exported");
            }

            if let Some(dir) = banking.export_transactions {
                for account in Banking::accounts(&ledger) {
                    let path = dir.join(format!("account_{}.csv", account.account_number));
                    let mut file = File::create(&path)?;
                    write_transactions_csv(&account, &mut file)?;
                }
                info!(dir = %dir.display(), "transaction histories exported");
            }
        }
        Mode::Atm(atm_args) => {
            let mut atm = Atm::new(atm_args.to_atm_config())?;
            atm_menu::run(&mut atm, &mut console)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(args: &[&str], script: &str) -> Result<String, BankError> {
        let args = CliArgs::try_parse_from(args).unwrap();
        let mut output = Vec::new();
        run(&args, Cursor::new(script.as_bytes().to_vec()), &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_default_mode_is_banking() {
        let output = run_script(&["program"], "6\n").unwrap();
        assert!(output.contains("ONLINE BANKING SYSTEM - MENU"));
    }

    #[test]
    fn test_atm_mode() {
        let output = run_script(&["program", "atm"], "3\n").unwrap();
        assert!(output.contains("WELCOME TO BANK OF DEVELOPERS"));
    }

    #[test]
    fn test_atm_mode_rejects_bad_pin_config() {
        let result = run_script(&["program", "atm", "--pin", "12345"], "3\n");
        assert_eq!(result.unwrap_err(), BankError::InvalidPinFormat);
    }

    #[test]
    fn test_banking_export_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.csv");
        let path_arg = path.to_str().unwrap();

        run_script(
            &["program", "banking", "--export-accounts", path_arg],
            "1\nAda\npw\n1\n2\n1000\n42.5\npay\n6\n",
        )
        .unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "account,name,type,balance\n1000,Ada,Savings,42.50\n"
        );
    }

    #[test]
    fn test_banking_export_writes_one_history_per_account() {
        let dir = tempfile::tempdir().unwrap();
        let dir_arg = dir.path().to_str().unwrap();

        run_script(
            &["program", "banking", "--export-transactions", dir_arg],
            "1\nAda\npw\n1\n1\nGrace\npw\n2\n2\n1000\n10\npay\n6\n",
        )
        .unwrap();

        let ada = std::fs::read_to_string(dir.path().join("account_1000.csv")).unwrap();
        let grace = std::fs::read_to_string(dir.path().join("account_1001.csv")).unwrap();
        assert!(ada.starts_with("id,type,amount,timestamp,from,to,description\n1,DEPOSIT,10.00,"));
        assert!(ada.ends_with(",N/A,1000,pay\n"));
        assert_eq!(grace, "id,type,amount,timestamp,from,to,description\n");
    }
}
