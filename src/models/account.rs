//! Account model
//!
//! Represents the currency balances shown as cards on the dashboard. Accounts
//! come from the seed only: they are never created or deleted at runtime, and
//! the only field that changes is the balance.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// ISO-style currency code ("EUR", "USD", ...)
///
/// Kept as an open string newtype rather than a closed enum: the dashboard
/// treats codes opaquely and only ever compares them for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// View the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A currency account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique, stable identifier
    pub id: AccountId,

    /// Currency this account holds
    pub currency: CurrencyCode,

    /// Current balance
    pub balance: Money,

    /// Flag glyph shown on the account card
    pub flag: String,

    /// Masked account number (".. 64818")
    pub account_number: String,
}

impl Account {
    /// Create an account
    pub fn new(
        id: impl Into<AccountId>,
        currency: impl Into<CurrencyCode>,
        balance: Money,
        flag: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            currency: currency.into(),
            balance,
            flag: flag.into(),
            account_number: account_number.into(),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.balance.format_grouped(), self.currency)
    }
}
