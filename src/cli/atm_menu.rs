//! ATM menus: user type selection, customer session and admin session.

use crate::cli::console::Console;
use crate::core::Atm;
use crate::io::{format_money, render_statement};
use crate::types::BankError;
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use tracing::warn;

const SCREEN_WIDTH: usize = 40;
const BOX_RULE: &str = "+--------------------------------------+";

/// Run the ATM until the user picks Exit or input ends
pub fn run<R: BufRead, W: Write>(atm: &mut Atm, console: &mut Console<R, W>) -> Result<(), BankError> {
    loop {
        display_header(console)?;
        center_text(console, "PLEASE SELECT USER TYPE")?;
        console.line("")?;
        boxed_text(console, "1. Customer")?;
        boxed_text(console, "2. Administrator")?;
        boxed_text(console, "3. Exit")?;

        let user_type = match console.read_choice(
            "\nEnter your choice (1-3): ",
            1..=3,
            "Invalid input. Please enter a number between 1-3: ",
        ) {
            Ok(choice) => choice,
            Err(BankError::InputClosed) => return Ok(()),
            Err(e) => return Err(e),
        };

        let session = match user_type {
            1 => customer_session(atm, console),
            2 => admin_session(atm, console),
            _ => {
                display_header(console)?;
                center_text(console, "THANK YOU FOR USING")?;
                center_text(console, "BANK OF DEVELOPERS ATM")?;
                console.line("")?;
                boxed_text(console, "Goodbye!")?;
                return Ok(());
            }
        };

        match session {
            Ok(()) => {}
            Err(BankError::InputClosed) => {
                atm.end_session();
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }
}

fn customer_session<R: BufRead, W: Write>(
    atm: &mut Atm,
    console: &mut Console<R, W>,
) -> Result<(), BankError> {
    display_header(console)?;
    center_text(console, "CUSTOMER LOGIN")?;
    console.line("")?;
    boxed_text(console, "Please enter your card number:")?;
    let card = console.prompt(">> ")?;
    boxed_text(console, "Please enter your 4-digit PIN:")?;
    let pin = console.prompt(">> ")?;

    if !customer_login(atm, console, &card, &pin)? {
        console.line("")?;
        return boxed_text(console, "LOGIN FAILED - Invalid credentials");
    }
    show_progress(console)?;

    loop {
        display_header(console)?;
        center_text(console, "MAIN MENU")?;
        console.line("")?;
        console.line(&format!("\n{}", BOX_RULE))?;
        console.line("|           CUSTOMER MENU              |")?;
        console.line(BOX_RULE)?;
        console.line(" 1. Check Balance")?;
        console.line(" 2. Withdraw Cash")?;
        console.line(" 3. Deposit Cash")?;
        console.line(" 4. Change PIN")?;
        console.line(" 5. Mini Statement")?;
        console.line(" 6. End Transaction")?;
        console.line(BOX_RULE)?;

        let choice = console.read_choice(
            "\nEnter your choice (1-6): ",
            1..=6,
            "Invalid input. Please enter a number between 1-6: ",
        )?;

        display_header(console)?;
        let title = match choice {
            1 => "BALANCE INQUIRY",
            2 => "CASH WITHDRAWAL",
            3 => "CASH DEPOSIT",
            4 => "CHANGE PIN",
            5 => "MINI STATEMENT",
            _ => "END TRANSACTION",
        };
        center_text(console, title)?;
        console.line("")?;

        let outcome = match choice {
            1 => check_balance(atm, console),
            2 => withdraw(atm, console),
            3 => deposit(atm, console),
            4 => change_pin(atm, console),
            5 => mini_statement(atm, console),
            _ => {
                atm.end_session();
                console.line("Transaction ended. Thank you for using our ATM.")?;
                return Ok(());
            }
        };
        report(console, outcome)?;
    }
}

fn customer_login<R: BufRead, W: Write>(
    atm: &mut Atm,
    console: &mut Console<R, W>,
    card: &str,
    pin: &str,
) -> Result<bool, BankError> {
    let result = atm.insert_card(card).and_then(|_| atm.enter_pin(pin));
    match result {
        Ok(accepted) => Ok(accepted),
        Err(e) => {
            warn!(error = %e, "ATM login rejected");
            console.line(&format!("Error: {}", e))?;
            Ok(false)
        }
    }
}

fn check_balance<R: BufRead, W: Write>(atm: &mut Atm, console: &mut Console<R, W>) -> Result<(), BankError> {
    let balance = atm.check_balance()?;
    console.line(&format!("Current Balance: {}", format_money(balance)))
}

fn withdraw<R: BufRead, W: Write>(atm: &mut Atm, console: &mut Console<R, W>) -> Result<(), BankError> {
    let amount = read_amount(console, "Enter amount to withdraw: ")?;
    atm.withdraw(amount)?;
    let balance = atm.check_balance()?;
    console.line(&format!(
        "Withdrawal successful. Remaining balance: {}",
        format_money(balance)
    ))
}

fn deposit<R: BufRead, W: Write>(atm: &mut Atm, console: &mut Console<R, W>) -> Result<(), BankError> {
    let amount = read_amount(console, "Enter amount to deposit: ")?;
    atm.deposit(amount)?;
    let balance = atm.check_balance()?;
    console.line(&format!("Deposit successful. New balance: {}", format_money(balance)))
}

fn change_pin<R: BufRead, W: Write>(atm: &mut Atm, console: &mut Console<R, W>) -> Result<(), BankError> {
    let old_pin = console.prompt("Enter current PIN: ")?;
    let new_pin = console.prompt("Enter new PIN: ")?;
    match atm.change_pin(&old_pin, &new_pin) {
        Ok(()) => console.line("PIN changed successfully"),
        Err(BankError::IncorrectPin) => {
            warn!("ATM PIN change rejected");
            console.line("Failed to change PIN. Current PIN is incorrect")
        }
        Err(e) => Err(e),
    }
}

fn mini_statement<R: BufRead, W: Write>(atm: &mut Atm, console: &mut Console<R, W>) -> Result<(), BankError> {
    let account = atm.mini_statement()?;
    render_statement(account, console.output())
}

fn admin_session<R: BufRead, W: Write>(
    atm: &mut Atm,
    console: &mut Console<R, W>,
) -> Result<(), BankError> {
    display_header(console)?;
    center_text(console, "ADMINISTRATOR LOGIN")?;
    console.line("")?;
    boxed_text(console, "Enter admin username:")?;
    let username = console.prompt(">> ")?;
    boxed_text(console, "Enter admin password:")?;
    let password = console.prompt(">> ")?;

    if !atm.admin_login(&username, &password) {
        warn!(username = %username, "ATM admin login rejected");
        console.line("")?;
        return boxed_text(console, "LOGIN FAILED - Invalid credentials");
    }
    show_progress(console)?;

    loop {
        display_header(console)?;
        center_text(console, "ADMIN MENU")?;
        console.line("")?;
        console.line("\n===== Admin Menu =====")?;
        console.line("1. Refill Cash")?;
        console.line("2. View ATM Cash")?;
        console.line("3. Perform Maintenance")?;
        console.line("4. Logout")?;

        let choice = console.read_choice(
            "\nEnter your choice (1-4): ",
            1..=4,
            "Invalid input. Please enter a number between 1-4: ",
        )?;

        display_header(console)?;
        let title = match choice {
            1 => "REFILL CASH",
            2 => "VIEW ATM CASH",
            3 => "MAINTENANCE",
            _ => "LOGOUT",
        };
        center_text(console, title)?;
        console.line("")?;

        let outcome = match choice {
            1 => refill(atm, console),
            2 => console.line(&format!(
                "ATM Cash Available: {}",
                format_money(atm.cash_available())
            )),
            3 => {
                console.line("Performing maintenance...")?;
                console.write("...")?;
                console.line("\nMaintenance completed")
            }
            _ => return console.line("Logged out from admin system"),
        };
        report(console, outcome)?;
    }
}

fn refill<R: BufRead, W: Write>(atm: &mut Atm, console: &mut Console<R, W>) -> Result<(), BankError> {
    let amount = read_amount(console, "Enter amount to refill: ")?;
    atm.refill(amount)?;
    console.line(&format!(
        "Refill successful. Current cash: {}",
        format_money(atm.cash_available())
    ))
}

fn read_amount<R: BufRead, W: Write>(console: &mut Console<R, W>, prompt: &str) -> Result<Decimal, BankError> {
    console.prompt_parse(prompt, "an amount")
}

/// Print a rejected operation and keep the session going
fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, outcome: Result<(), BankError>) -> Result<(), BankError> {
    match outcome {
        Err(e) if e.is_io() || e == BankError::InputClosed => Err(e),
        Err(e) => {
            warn!(error = %e, "ATM operation rejected");
            console.line(&format!("Error: {}", e))
        }
        Ok(()) => Ok(()),
    }
}

fn display_header<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), BankError> {
    console.line("========================================")?;
    console.line("|      WELCOME TO BANK OF DEVELOPERS   |")?;
    console.line("========================================\n")
}

fn center_text<R: BufRead, W: Write>(console: &mut Console<R, W>, text: &str) -> Result<(), BankError> {
    let padding = SCREEN_WIDTH.saturating_sub(text.len()) / 2;
    console.line(&format!("{}{}", " ".repeat(padding), text))
}

fn boxed_text<R: BufRead, W: Write>(console: &mut Console<R, W>, text: &str) -> Result<(), BankError> {
    console.line(BOX_RULE)?;
    console.line(&format!("| {:<36} |", text))?;
    console.line(BOX_RULE)
}

fn show_progress<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), BankError> {
    console.line(&format!("\nProcessing: [{}] Done!", ".".repeat(20)))
}
