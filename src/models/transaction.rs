//! Transaction model
//!
//! Entries in the dashboard feed. Amounts are stored as magnitudes; whether a
//! transaction increases or decreases the balance narrative is carried by the
//! direction label, which is display-only and never feeds balance math.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::account::CurrencyCode;
use super::ids::TransactionId;
use super::money::Money;

/// Status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Transaction has settled
    #[default]
    Completed,
    /// Transaction is still in flight
    Pending,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "Completed"),
            Self::Pending => write!(f, "Pending"),
        }
    }
}

/// Whether a transaction is money in or money out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Incoming,
    Outgoing,
}

impl Direction {
    /// Arrow glyph used next to feed amounts
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Incoming => "↘",
            Self::Outgoing => "↗",
        }
    }

    /// Sign prefix used when rendering the amount
    pub fn sign(&self) -> &'static str {
        match self {
            Self::Incoming => "+",
            Self::Outgoing => "-",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incoming => write!(f, "Incoming"),
            Self::Outgoing => write!(f, "Outgoing"),
        }
    }
}

/// Icon category tag for a feed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transfer,
    Shopping,
    Income,
}

impl Category {
    /// Glyph rendered in the feed's icon column
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Transfer => "⇄",
            Self::Shopping => "🛒",
            Self::Income => "💰",
        }
    }

    /// Default category for a freshly entered transaction
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Incoming => Self::Income,
            Direction::Outgoing => Self::Shopping,
        }
    }
}

/// A dashboard feed entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Who the money went to or came from
    pub recipient: String,

    /// Short description ("Subscription", "Payout", ...)
    pub description: String,

    /// Amount magnitude; the sign narrative lives in `direction`
    pub amount: Money,

    /// Currency of the amount
    pub currency: CurrencyCode,

    /// Display date label ("Today", "Yesterday", "14 Dec")
    pub date: String,

    /// Settlement status
    pub status: TransactionStatus,

    /// Money in or money out
    pub direction: Direction,

    /// Icon category tag
    pub category: Category,
}

impl Transaction {
    /// Create a transaction with a freshly minted id, dated "Today"
    pub fn new(
        recipient: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
        currency: CurrencyCode,
        direction: Direction,
    ) -> Self {
        Self {
            id: TransactionId::generate(),
            recipient: recipient.into(),
            description: description.into(),
            amount,
            currency,
            date: "Today".to_string(),
            status: TransactionStatus::Completed,
            direction,
            category: Category::for_direction(direction),
        }
    }

    /// Check if this entry increases the balance narrative
    pub fn is_incoming(&self) -> bool {
        self.direction == Direction::Incoming
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{} {}",
            self.date,
            self.recipient,
            self.direction.sign(),
            self.amount.format_grouped(),
            self.currency
        )
    }
}

/// Derive the display date label for a calendar date
///
/// "Today" and "Yesterday" relative to the reference date, otherwise the
/// configured format (the seed uses "14 Dec" style, "%-d %b").
pub fn date_label(date: NaiveDate, today: NaiveDate, fallback_format: &str) -> String {
    let days_ago = today.signed_duration_since(date).num_days();
    match days_ago {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        _ => date.format(fallback_format).to_string(),
    }
}
