//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - The `Banking` operation set shared by all ledger handles
//! - `account_store` - Account ownership, numbering and balance arithmetic
//! - `ledger` - Request validation and orchestration
//! - `shared` - Lock-guarded handle for concurrent callers
//! - `atm` - Single-account cash machine built on a ledger

pub mod account_store;
pub mod atm;
pub mod ledger;
pub mod shared;
pub mod traits;

pub use account_store::{AccountStore, FIRST_ACCOUNT_NUMBER};
pub use atm::{Atm, AtmConfig};
pub use ledger::Ledger;
pub use shared::SharedLedger;
pub use traits::Banking;
