//! Built-in demo dataset
//!
//! The dashboard ships with a fixed set of accounts, feed entries, and a
//! profile. There is no persistence layer behind them; edits live for the
//! session and a reload restores exactly these values.

use crate::models::{
    Account, Category, CurrencyCode, Direction, Money, Transaction, TransactionId,
    TransactionStatus, UserProfile,
};

/// Seed accounts, ordered as they appear in the card row
pub fn accounts() -> Vec<Account> {
    vec![
        Account::new("1", "EUR", Money::from_cents(23253), "🇪🇺", ".. 64818"),
        Account::new("2", "USD", Money::from_cents(145000), "🇺🇸", ".. 74161"),
        Account::new("3", "GBP", Money::from_cents(0), "🇬🇧", ".. 99212"),
        Account::new("4", "THB", Money::from_cents(1208634), "🇹🇭", ".. 11234"),
    ]
}

/// Seed feed entries, newest first
pub fn transactions() -> Vec<Transaction> {
    vec![
        seeded(
            "t1",
            "Shwe Sin Win",
            "Sending",
            1208634,
            "THB",
            "Today",
            TransactionStatus::Completed,
            Direction::Outgoing,
            Category::Transfer,
        ),
        seeded(
            "t2",
            "To EUR",
            "Moved by you",
            3430,
            "EUR",
            "Today",
            TransactionStatus::Completed,
            Direction::Incoming,
            Category::Transfer,
        ),
        seeded(
            "t3",
            "Iberojet",
            "Travel",
            40576,
            "EUR",
            "Yesterday",
            TransactionStatus::Pending,
            Direction::Outgoing,
            Category::Shopping,
        ),
        seeded(
            "t4",
            "Spotify AB",
            "Subscription",
            1099,
            "EUR",
            "14 Dec",
            TransactionStatus::Completed,
            Direction::Outgoing,
            Category::Shopping,
        ),
        seeded(
            "t5",
            "Upwork Global Inc.",
            "Payout",
            125000,
            "USD",
            "10 Dec",
            TransactionStatus::Completed,
            Direction::Incoming,
            Category::Income,
        ),
    ]
}

/// Seed profile card
pub fn profile() -> UserProfile {
    UserProfile::new(
        "NICOLÁS SALCEDO FERIX",
        "@nicolass1748",
        "https://picsum.photos/100/100",
        "P38371203",
    )
}

#[allow(clippy::too_many_arguments)]
fn seeded(
    id: &str,
    recipient: &str,
    description: &str,
    cents: i64,
    currency: &str,
    date: &str,
    status: TransactionStatus,
    direction: Direction,
    category: Category,
) -> Transaction {
    Transaction {
        id: TransactionId::from(id),
        recipient: recipient.to_string(),
        description: description.to_string(),
        amount: Money::from_cents(cents),
        currency: CurrencyCode::from(currency),
        date: date.to_string(),
        status,
        direction,
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_accounts() {
        let accounts = accounts();
        assert_eq!(accounts.len(), 4);
        assert_eq!(accounts[0].currency.as_str(), "EUR");
        assert_eq!(accounts[0].balance.cents(), 23253);
        assert_eq!(accounts[2].balance, Money::zero());
        assert_eq!(accounts[3].currency.as_str(), "THB");
        assert_eq!(accounts[3].balance.cents(), 1208634);
    }

    #[test]
    fn test_seed_transactions() {
        let txs = transactions();
        assert_eq!(txs.len(), 5);
        assert_eq!(txs[0].recipient, "Shwe Sin Win");
        assert_eq!(txs[0].amount.cents(), 1208634);
        assert_eq!(txs[2].status, TransactionStatus::Pending);
        assert_eq!(txs[4].direction, Direction::Incoming);
        assert_eq!(txs[4].category, Category::Income);
    }

    #[test]
    fn test_seed_ids_are_stable() {
        let first = transactions();
        let second = transactions();
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.id, b.id);
        }
    }

    #[test]
    fn test_seed_profile() {
        let profile = profile();
        assert_eq!(profile.name, "NICOLÁS SALCEDO FERIX");
        assert_eq!(profile.handle, "@nicolass1748");
        assert_eq!(profile.membership_number, "P38371203");
    }
}
