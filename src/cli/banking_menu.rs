//! Online banking menu
//!
//! Sequences console prompts and calls the [`Banking`] operations. All
//! business rules live in the ledger; this module only collects input and
//! translates outcomes into messages.

use crate::cli::console::Console;
use crate::core::Banking;
use crate::io::render_statement;
use crate::types::{AccountNumber, AccountType, BankError};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use tracing::warn;

const RULE: &str = "----------------------------------------";

/// Run the banking menu until the user exits or input ends
///
/// Operation failures are reported and the menu continues. Only console
/// I/O failures are returned.
pub fn run<B, R, W>(bank: &mut B, console: &mut Console<R, W>) -> Result<(), BankError>
where
    B: Banking,
    R: BufRead,
    W: Write,
{
    loop {
        match serve_choice(bank, console) {
            Ok(true) => {}
            Ok(false) | Err(BankError::InputClosed) => return Ok(()),
            Err(e) if e.is_io() => return Err(e),
            Err(e) => {
                warn!(error = %e, "invalid menu input");
                console.line(&format!("\nError: {}", e))?;
            }
        }
    }
}

/// Show the menu and run one selection, `false` once the user exits
fn serve_choice<B, R, W>(bank: &mut B, console: &mut Console<R, W>) -> Result<bool, BankError>
where
    B: Banking,
    R: BufRead,
    W: Write,
{
    display_main_menu(console)?;
    let choice = console.read_number(
        "Enter your choice (1-6): ",
        "Invalid input. Please enter a number (1-6): ",
    )?;

    match choice {
        1 => create_account(bank, console)?,
        2 => deposit(bank, console)?,
        3 => withdraw(bank, console)?,
        4 => transfer(bank, console)?,
        5 => view_statement(bank, console)?,
        6 => {
            console.line("\nThank you for using our banking system!")?;
            return Ok(false);
        }
        _ => console.line("Invalid choice. Please enter a number between 1 and 6.")?,
    }

    Ok(true)
}

fn display_main_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), BankError> {
    console.line("------------------------------------------")?;
    console.line("       ONLINE BANKING SYSTEM - MENU")?;
    console.line("------------------------------------------")?;
    console.line("1. Create New Account")?;
    console.line("2. Deposit Money")?;
    console.line("3. Withdraw Money")?;
    console.line("4. Transfer Money")?;
    console.line("5. View Account Statement")?;
    console.line("6. Exit")?;
    console.line(RULE)
}

fn header<R: BufRead, W: Write>(console: &mut Console<R, W>, title: &str) -> Result<(), BankError> {
    console.line(RULE)?;
    console.line(title)?;
    console.line(RULE)
}

fn read_account<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<AccountNumber, BankError> {
    console.prompt_parse(prompt, "an account number")
}

fn read_amount<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> Result<Decimal, BankError> {
    console.prompt_parse(prompt, "an amount")
}

fn create_account<B: Banking, R: BufRead, W: Write>(
    bank: &mut B,
    console: &mut Console<R, W>,
) -> Result<(), BankError> {
    header(console, "          CREATE NEW ACCOUNT")?;

    let name = console.prompt("Enter your full name: ")?;
    let password = console.prompt("Enter password: ")?;

    console.line("Select account type:")?;
    console.line("1. Savings Account")?;
    console.line("2. Current Account")?;
    let choice = console.read_choice(
        "Enter choice (1-2): ",
        1..=2,
        "Invalid choice. Please enter 1 or 2: ",
    )?;
    let account_type = account_type_for(choice)?;

    let number = bank.create_account(&name, account_type, &password);
    console.line("\nAccount created successfully!")?;
    console.line(&format!("Your account number is: {}", number))
}

fn account_type_for(choice: u32) -> Result<AccountType, BankError> {
    AccountType::from_choice(choice)
        .ok_or_else(|| BankError::invalid_input(&choice.to_string(), "account type 1 or 2"))
}

fn deposit<B: Banking, R: BufRead, W: Write>(
    bank: &mut B,
    console: &mut Console<R, W>,
) -> Result<(), BankError> {
    header(console, "              DEPOSIT MONEY")?;

    let account = read_account(console, "Enter account number: ")?;
    let amount = read_amount(console, "Enter amount to deposit: $")?;
    let description = console.prompt("Enter description: ")?;

    match bank.deposit(account, amount, &description) {
        Ok(()) => console.line("\nDeposit successful!"),
        Err(e) => report_failure(console, "Deposit failed. Invalid account or amount.", e),
    }
}

fn withdraw<B: Banking, R: BufRead, W: Write>(
    bank: &mut B,
    console: &mut Console<R, W>,
) -> Result<(), BankError> {
    header(console, "             WITHDRAW MONEY")?;

    let account = read_account(console, "Enter account number: ")?;
    let amount = read_amount(console, "Enter amount to withdraw: $")?;
    let description = console.prompt("Enter description: ")?;

    match bank.withdraw(account, amount, &description) {
        Ok(()) => console.line("\nWithdrawal successful!"),
        Err(e) => report_failure(
            console,
            "Withdrawal failed. Invalid account, amount or insufficient funds.",
            e,
        ),
    }
}

fn transfer<B: Banking, R: BufRead, W: Write>(
    bank: &mut B,
    console: &mut Console<R, W>,
) -> Result<(), BankError> {
    header(console, "             TRANSFER MONEY")?;

    let from = read_account(console, "Enter your account number: ")?;
    let to = read_account(console, "Enter recipient account number: ")?;
    let amount = read_amount(console, "Enter amount to transfer: $")?;
    let description = console.prompt("Enter description: ")?;

    match bank.transfer(from, to, amount, &description) {
        Ok(()) => console.line("\nTransfer successful!"),
        Err(e) => report_failure(console, "Transfer failed. Check account numbers and balance.", e),
    }
}

fn view_statement<B: Banking, R: BufRead, W: Write>(
    bank: &mut B,
    console: &mut Console<R, W>,
) -> Result<(), BankError> {
    header(console, "          VIEW ACCOUNT STATEMENT")?;

    let account = read_account(console, "Enter account number: ")?;
    match bank.statement(account) {
        Ok(view) => render_statement(&view, console.output()),
        Err(BankError::AccountNotFound { .. }) => console.line("\nError: Account not found!"),
        Err(e) => Err(e),
    }
}

fn report_failure<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    message: &str,
    error: BankError,
) -> Result<(), BankError> {
    warn!(error = %error, "banking operation rejected");
    console.line(&format!("\n{}", message))?;
    console.line(&format!("Reason: {}", error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Ledger;
    use crate::types::TransactionKind;
    use rstest::rstest;
    use std::io::Cursor;

    fn session(ledger: &mut Ledger, script: &str) -> String {
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        run(ledger, &mut console).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_create_account_and_exit() {
        let mut ledger = Ledger::new();

        let output = session(&mut ledger, "1\nAda Lovelace\nsecret\n2\n6\n");

        assert!(output.contains("Account created successfully!"));
        assert!(output.contains("Your account number is: 1000"));
        assert!(output.contains("Thank you for using our banking system!"));
        let account = ledger.statement(1000).unwrap();
        assert_eq!(account.name, "Ada Lovelace");
        assert_eq!(account.account_type, AccountType::Current);
        assert_eq!(account.password, "secret");
    }

    #[test]
    fn test_account_type_reprompts_until_valid() {
        let mut ledger = Ledger::new();

        let output = session(&mut ledger, "1\nAda\npw\n5\nx\n1\n6\n");

        assert_eq!(output.matches("Invalid choice. Please enter 1 or 2: ").count(), 2);
        assert_eq!(
            ledger.statement(1000).unwrap().account_type,
            AccountType::Savings
        );
    }

    #[rstest]
    #[case::savings(1, Ok(AccountType::Savings))]
    #[case::current(2, Ok(AccountType::Current))]
    #[case::zero(0, Err(BankError::invalid_input("0", "account type 1 or 2")))]
    #[case::out_of_range(3, Err(BankError::invalid_input("3", "account type 1 or 2")))]
    fn test_account_type_for_choice(
        #[case] choice: u32,
        #[case] expected: Result<AccountType, BankError>,
    ) {
        assert_eq!(account_type_for(choice), expected);
    }

    #[test]
    fn test_deposit_withdraw_transfer_flow() {
        let mut ledger = Ledger::new();
        let script = "1\nAda\npw\n1\n\
                      1\nGrace\npw\n2\n\
                      2\n1000\n500\nsalary\n\
                      3\n1000\n200\nrent\n\
                      4\n1000\n1001\n100\ngift\n\
                      3\n1000\n1000\ntoo much\n\
                      6\n";

        let output = session(&mut ledger, script);

        assert!(output.contains("Deposit successful!"));
        assert!(output.contains("Withdrawal successful!"));
        assert!(output.contains("Transfer successful!"));
        assert!(output.contains("Withdrawal failed. Invalid account, amount or insufficient funds."));
        assert!(output.contains("Reason: Insufficient funds in account 1000"));

        let ada = ledger.statement(1000).unwrap();
        assert_eq!(ada.balance, Decimal::new(200, 0));
        assert_eq!(ada.transactions.len(), 3);
        assert_eq!(ada.transactions[2].kind, TransactionKind::TransferOut);
        assert_eq!(ledger.statement(1001).unwrap().balance, Decimal::new(100, 0));
    }

    #[test]
    fn test_failed_deposit_and_transfer_messages() {
        let mut ledger = Ledger::new();
        let script = "1\nAda\npw\n1\n\
                      2\n4242\n10\nlost\n\
                      2\n1000\n-5\nnegative\n\
                      4\n1000\n1000\n1\nself\n\
                      6\n";

        let output = session(&mut ledger, script);

        assert_eq!(output.matches("Deposit failed. Invalid account or amount.").count(), 2);
        assert!(output.contains("Reason: Account 4242 not found"));
        assert!(output.contains("Transfer failed. Check account numbers and balance."));
        assert!(output.contains("Reason: Cannot transfer from account 1000 to itself"));
        assert!(ledger.statement(1000).unwrap().transactions.is_empty());
    }

    #[test]
    fn test_unparseable_amount_returns_to_menu() {
        let mut ledger = Ledger::new();

        let output = session(&mut ledger, "1\nAda\npw\n1\n2\n1000\nten\n6\n");

        assert!(output.contains("Error: Invalid input 'ten': expected an amount"));
        assert!(output.contains("Thank you for using our banking system!"));
        assert!(ledger.statement(1000).unwrap().transactions.is_empty());
    }

    #[test]
    fn test_view_statement() {
        let mut ledger = Ledger::new();
        let script = "1\nAda\npw\n1\n2\n1000\n500\nsalary\n5\n1000\n5\n7777\n6\n";

        let output = session(&mut ledger, script);

        assert!(output.contains("ACCOUNT STATEMENT"));
        assert!(output.contains("Balance:            500.00 $"));
        assert!(output.contains("salary"));
        assert!(output.contains("Error: Account not found!"));
    }

    #[test]
    fn test_invalid_menu_choices() {
        let mut ledger = Ledger::new();

        let output = session(&mut ledger, "abc\n9\n6\n");

        assert!(output.contains("Invalid input. Please enter a number (1-6): "));
        assert!(output.contains("Invalid choice. Please enter a number between 1 and 6."));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let mut ledger = Ledger::new();

        let output = session(&mut ledger, "1\nAda\n");

        assert!(!output.contains("Account created successfully!"));
        assert!(ledger.is_empty());
    }
}
