//! Session state container
//!
//! All screens read from one [`Dashboard`] value and every change goes
//! through a named mutation on it. Fields stay private so nothing outside
//! this module can reach in and edit a balance without going through the
//! method that logs and validates it.

pub mod edit;
pub mod view;

pub use edit::{parse_edited_amount, ParsedAmount};
pub use view::{navigate, Nav, View};

use tracing::{debug, info};

use crate::models::{
    Account, AccountId, Money, ProfileField, Transaction, TransactionId, UserProfile,
};
use crate::seed;

/// In-memory state for one dashboard session
#[derive(Debug, Clone)]
pub struct Dashboard {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    profile: UserProfile,
    view: View,
    edit_mode: bool,
}

impl Dashboard {
    /// Build a dashboard over the given data, starting on the overview
    pub fn new(accounts: Vec<Account>, transactions: Vec<Transaction>, profile: UserProfile) -> Self {
        Self {
            accounts,
            transactions,
            profile,
            view: View::Overview,
            edit_mode: false,
        }
    }

    /// Build a dashboard over the built-in demo dataset
    pub fn seeded() -> Self {
        Self::new(seed::accounts(), seed::transactions(), seed::profile())
    }

    // --- reads ---

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// First account; the hero section reports its balance
    pub fn primary_account(&self) -> Option<&Account> {
        self.accounts.first()
    }

    pub fn account(&self, id: &AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| &a.id == id)
    }

    pub fn transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    /// Account shown by the current screen, if it is a detail screen
    pub fn selected_account(&self) -> Option<&Account> {
        self.view.account_id().and_then(|id| self.account(id))
    }

    /// Feed entries whose currency matches the given account's
    pub fn transactions_for(&self, account: &Account) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.currency == account.currency)
            .collect()
    }

    // --- mutations ---

    /// Replace a feed entry wholesale, matched by id
    ///
    /// No field validation. Unknown ids are ignored; returns whether
    /// anything changed.
    pub fn update_transaction(&mut self, updated: Transaction) -> bool {
        match self.transactions.iter_mut().find(|t| t.id == updated.id) {
            Some(slot) => {
                debug!(id = %updated.id, "transaction replaced");
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Replace an account's balance
    ///
    /// Unknown ids are ignored; returns whether anything changed.
    pub fn update_balance(&mut self, id: &AccountId, balance: Money) -> bool {
        match self.accounts.iter_mut().find(|a| &a.id == id) {
            Some(account) => {
                debug!(id = %account.id, %balance, "balance updated");
                account.balance = balance;
                true
            }
            None => false,
        }
    }

    /// Replace one profile field
    pub fn update_profile(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        debug!(%field, "profile field updated");
        match field {
            ProfileField::Name => self.profile.name = value,
            ProfileField::Handle => self.profile.handle = value,
            ProfileField::AvatarUrl => self.profile.avatar_url = value,
            ProfileField::MembershipNumber => self.profile.membership_number = value,
        }
    }

    /// Prepend a feed entry, newest first
    ///
    /// While a detail screen is active the entry is re-tagged with that
    /// account's currency so it shows up in the feed being looked at.
    pub fn add_transaction(&mut self, mut tx: Transaction) -> TransactionId {
        if let Some(account) = self.selected_account() {
            tx.currency = account.currency.clone();
        }
        info!(id = %tx.id, recipient = %tx.recipient, "transaction added");
        let id = tx.id.clone();
        self.transactions.insert(0, tx);
        id
    }

    /// Apply a navigation request to the visible screen
    pub fn navigate(&mut self, nav: Nav) {
        let next = view::navigate(self.view.clone(), nav);
        if next != self.view {
            debug!(?next, "screen changed");
            self.view = next;
        }
    }

    /// Flip edit mode; returns the new state
    pub fn toggle_edit_mode(&mut self) -> bool {
        self.edit_mode = !self.edit_mode;
        debug!(edit_mode = self.edit_mode, "edit mode toggled");
        self.edit_mode
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CurrencyCode, Direction, TransactionStatus};

    fn dashboard() -> Dashboard {
        Dashboard::seeded()
    }

    #[test]
    fn test_primary_account_is_first() {
        let dash = dashboard();
        assert_eq!(dash.primary_account().unwrap().currency.as_str(), "EUR");
    }

    #[test]
    fn test_primary_account_empty() {
        let dash = Dashboard::new(vec![], vec![], seed::profile());
        assert!(dash.primary_account().is_none());
        assert!(dash.selected_account().is_none());
    }

    #[test]
    fn test_update_balance() {
        let mut dash = dashboard();
        let id = AccountId::from("3");
        assert!(dash.update_balance(&id, Money::from_cents(5000)));
        assert_eq!(dash.account(&id).unwrap().balance.cents(), 5000);
    }

    #[test]
    fn test_update_balance_unknown_id_is_noop() {
        let mut dash = dashboard();
        let before: Vec<_> = dash.accounts().to_vec();
        assert!(!dash.update_balance(&AccountId::from("99"), Money::from_cents(1)));
        assert_eq!(dash.accounts().len(), before.len());
        for (a, b) in dash.accounts().iter().zip(before.iter()) {
            assert_eq!(a.balance, b.balance);
        }
    }

    #[test]
    fn test_update_transaction_replaces_by_id() {
        let mut dash = dashboard();
        let id = TransactionId::from("t4");
        let mut updated = dash.transaction(&id).unwrap().clone();
        updated.amount = Money::from_cents(1299);

        assert!(dash.update_transaction(updated));
        assert_eq!(dash.transaction(&id).unwrap().amount.cents(), 1299);
        // the rest of the record rides along unchanged
        assert_eq!(dash.transaction(&id).unwrap().direction, Direction::Outgoing);
        assert_eq!(dash.transactions().len(), 5);
    }

    #[test]
    fn test_update_transaction_unknown_id_is_noop() {
        let mut dash = dashboard();
        let mut stray = dash.transaction(&TransactionId::from("t1")).unwrap().clone();
        stray.id = TransactionId::from("t99");

        assert!(!dash.update_transaction(stray));
        assert_eq!(dash.transactions().len(), 5);
        assert!(dash.transaction(&TransactionId::from("t99")).is_none());
    }

    #[test]
    fn test_update_profile_fields() {
        let mut dash = dashboard();
        dash.update_profile(ProfileField::Name, "ADA LOVELACE");
        dash.update_profile(ProfileField::Handle, "@ada");
        dash.update_profile(ProfileField::MembershipNumber, "P00000001");
        assert_eq!(dash.profile().name, "ADA LOVELACE");
        assert_eq!(dash.profile().handle, "@ada");
        assert_eq!(dash.profile().membership_number, "P00000001");
    }

    #[test]
    fn test_add_transaction_prepends() {
        let mut dash = dashboard();
        let tx = Transaction::new(
            "Cafe Aroma",
            "Coffee",
            Money::from_cents(450),
            CurrencyCode::from("EUR"),
            Direction::Outgoing,
        );
        let id = dash.add_transaction(tx);
        assert_eq!(dash.transactions().len(), 6);
        assert_eq!(dash.transactions()[0].id, id);
    }

    #[test]
    fn test_add_transaction_retags_currency_on_detail_screen() {
        let mut dash = dashboard();
        dash.navigate(Nav::SelectAccount(AccountId::from("4")));
        let tx = Transaction::new(
            "Street Market",
            "Groceries",
            Money::from_cents(12000),
            CurrencyCode::from("EUR"),
            Direction::Outgoing,
        );
        let id = dash.add_transaction(tx);
        assert_eq!(dash.transaction(&id).unwrap().currency.as_str(), "THB");
    }

    #[test]
    fn test_add_transaction_keeps_currency_on_overview() {
        let mut dash = dashboard();
        let tx = Transaction::new(
            "Cafe Aroma",
            "Coffee",
            Money::from_cents(450),
            CurrencyCode::from("USD"),
            Direction::Outgoing,
        );
        let id = dash.add_transaction(tx);
        assert_eq!(dash.transaction(&id).unwrap().currency.as_str(), "USD");
    }

    #[test]
    fn test_detail_feed_filters_by_currency() {
        let dash = dashboard();
        let eur = dash.account(&AccountId::from("1")).unwrap();
        let feed = dash.transactions_for(eur);
        assert_eq!(feed.len(), 3);
        assert!(feed.iter().all(|t| t.currency.as_str() == "EUR"));

        let gbp = dash.account(&AccountId::from("3")).unwrap();
        assert!(dash.transactions_for(gbp).is_empty());
    }

    #[test]
    fn test_navigate_updates_view() {
        let mut dash = dashboard();
        dash.navigate(Nav::SelectAccount(AccountId::from("2")));
        assert_eq!(dash.selected_account().unwrap().currency.as_str(), "USD");
        dash.navigate(Nav::Back);
        assert!(dash.view().is_overview());
    }

    #[test]
    fn test_toggle_edit_mode() {
        let mut dash = dashboard();
        assert!(!dash.edit_mode());
        assert!(dash.toggle_edit_mode());
        assert!(!dash.toggle_edit_mode());
    }

    #[test]
    fn test_seeded_matches_demo_dataset() {
        let dash = dashboard();
        assert_eq!(dash.accounts().len(), 4);
        assert_eq!(dash.transactions().len(), 5);
        assert_eq!(dash.transactions()[0].status, TransactionStatus::Completed);
        assert_eq!(dash.transactions()[0].category, Category::Transfer);
        assert_eq!(dash.profile().handle, "@nicolass1748");
    }
}
