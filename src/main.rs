//! Online Banking CLI
//!
//! Interactive console for the in-memory banking ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- banking --export-accounts accounts.csv
//! cargo run -- atm --pin 4321 --cash 20000
//! RUST_LOG=debug cargo run -- atm
//! ```
//!
//! Menus read from stdin and write to stdout; diagnostics go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success (user exited or input ended)
//! - 1: Error (invalid ATM configuration, console failure, export failure)

use online_banking::{cli, logging};
use std::io;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    logging::init(&args.log_level);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = cli::run(&args, stdin.lock(), stdout.lock()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
