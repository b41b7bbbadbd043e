//! Data models for accounts, transactions, and the user profile

pub mod account;
pub mod ids;
pub mod money;
pub mod profile;
pub mod transaction;

pub use account::{Account, CurrencyCode};
pub use ids::{AccountId, TransactionId};
pub use money::Money;
pub use profile::{ProfileField, UserProfile};
pub use transaction::{date_label, Category, Direction, Transaction, TransactionStatus};
