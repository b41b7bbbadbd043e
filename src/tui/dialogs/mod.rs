//! TUI dialogs
//!
//! Modal overlays: the add-transaction form and the help screen.

pub mod add_transaction;
pub mod help;

pub use add_transaction::TransactionForm;
