//! Display formatting for terminal output
//!
//! Table and detail formatting used by the non-interactive subcommands.

pub mod account;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use transaction::format_transaction_list;
