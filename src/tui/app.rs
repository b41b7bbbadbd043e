//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the dashboard data, cursor positions per screen, the in-progress inline
//! edit, and the crash slot the recovery screen reads from.

use ratatui::style::Color;
use tracing::warn;

use crate::config::Settings;
use crate::models::{Account, AccountId, ProfileField, Transaction, TransactionId};
use crate::state::{parse_edited_amount, Dashboard, Nav};

use super::dialogs::add_transaction::TransactionForm;
use super::fallback::CrashInfo;
use super::widgets::editor::LineEditor;

/// Focus zones on the overview screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverviewFocus {
    #[default]
    Hero,
    Cards,
    Feed,
}

impl OverviewFocus {
    /// Next zone for Tab cycling
    pub fn next(self) -> Self {
        match self {
            Self::Hero => Self::Cards,
            Self::Cards => Self::Feed,
            Self::Feed => Self::Hero,
        }
    }
}

/// What an inline edit is pointed at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    /// An account's balance
    Balance(AccountId),
    /// A feed entry's amount magnitude
    Amount(TransactionId),
    /// A profile text field
    Profile(ProfileField),
}

/// An in-progress inline edit
#[derive(Debug, Clone)]
pub struct InlineEdit {
    pub target: EditTarget,
    pub editor: LineEditor,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddTransaction,
    Help,
}

/// Main application state
pub struct App {
    /// Dashboard data and visible screen
    pub dashboard: Dashboard,

    /// User settings
    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Focused zone on the overview
    pub overview_focus: OverviewFocus,

    /// Selected card in the account row
    pub card_index: usize,

    /// Selected row in the overview feed
    pub feed_index: usize,

    /// Selected row in the detail feed
    pub detail_index: usize,

    /// Selected row on the profile screen, indexing [`ProfileField::ALL`]
    pub profile_index: usize,

    /// In-progress inline edit, if any
    pub editor: Option<InlineEdit>,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Add-transaction form state
    pub transaction_form: TransactionForm,

    /// Caught crash; set when a draw or update panicked
    pub crash: Option<CrashInfo>,

    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App over the demo dataset
    pub fn new(settings: Settings) -> Self {
        Self {
            dashboard: Dashboard::seeded(),
            settings,
            should_quit: false,
            overview_focus: OverviewFocus::default(),
            card_index: 0,
            feed_index: 0,
            detail_index: 0,
            profile_index: 0,
            editor: None,
            active_dialog: ActiveDialog::default(),
            transaction_form: TransactionForm::new(),
            crash: None,
            status_message: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Accent color from settings
    pub fn accent(&self) -> Color {
        self.settings.accent_color()
    }

    // --- dialogs ---

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if dialog == ActiveDialog::AddTransaction {
            self.transaction_form = TransactionForm::new();
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    // --- inline editing ---

    /// Check if an inline edit is in progress
    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Start an inline edit, pre-filled with the target's current value
    pub fn begin_edit(&mut self, target: EditTarget) {
        let current = match &target {
            EditTarget::Balance(id) => self
                .dashboard
                .account(id)
                .map(|a| a.balance.to_string()),
            EditTarget::Amount(id) => self
                .dashboard
                .transaction(id)
                .map(|t| t.amount.to_string()),
            EditTarget::Profile(field) => {
                Some(self.dashboard.profile().field(*field).to_string())
            }
        };

        match current {
            Some(value) => {
                self.editor = Some(InlineEdit {
                    target,
                    editor: LineEditor::with_value(value),
                });
            }
            None => {
                warn!(?target, "edit target not found");
                self.set_status("Nothing to edit here");
            }
        }
    }

    /// Commit the in-progress edit through the matching dashboard mutation
    ///
    /// Malformed amount text is never an error: it parses to zero and zero
    /// is what gets committed, with a status note.
    pub fn commit_edit(&mut self) {
        let Some(edit) = self.editor.take() else {
            return;
        };

        match edit.target {
            EditTarget::Balance(id) => {
                let parsed = parse_edited_amount(edit.editor.value());
                if self.dashboard.update_balance(&id, parsed.value) {
                    self.set_status(if parsed.valid {
                        "Balance updated"
                    } else {
                        "Not a number; balance set to 0.00"
                    });
                }
            }
            EditTarget::Amount(id) => {
                let parsed = parse_edited_amount(edit.editor.value());
                if let Some(mut tx) = self.dashboard.transaction(&id).cloned() {
                    tx.amount = parsed.value;
                    self.dashboard.update_transaction(tx);
                    self.set_status(if parsed.valid {
                        "Amount updated"
                    } else {
                        "Not a number; amount set to 0.00"
                    });
                }
            }
            EditTarget::Profile(field) => {
                self.dashboard.update_profile(field, edit.editor.value());
                self.set_status(format!("{} updated", field));
            }
        }
    }

    /// Abandon the in-progress edit
    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    /// Active editor if it is pointed at this account's balance
    pub fn balance_editor(&self, id: &AccountId) -> Option<&LineEditor> {
        match &self.editor {
            Some(InlineEdit {
                target: EditTarget::Balance(target),
                editor,
            }) if target == id => Some(editor),
            _ => None,
        }
    }

    /// Active editor if it is pointed at this feed entry's amount
    pub fn amount_editor(&self, id: &TransactionId) -> Option<&LineEditor> {
        match &self.editor {
            Some(InlineEdit {
                target: EditTarget::Amount(target),
                editor,
            }) if target == id => Some(editor),
            _ => None,
        }
    }

    /// Active editor if it is pointed at this profile field
    pub fn profile_editor(&self, field: ProfileField) -> Option<&LineEditor> {
        match &self.editor {
            Some(InlineEdit {
                target: EditTarget::Profile(target),
                editor,
            }) if *target == field => Some(editor),
            _ => None,
        }
    }

    // --- selection ---

    pub fn card_count(&self) -> usize {
        self.dashboard.accounts().len()
    }

    /// Account under the card cursor
    pub fn selected_card_account(&self) -> Option<&Account> {
        self.dashboard.accounts().get(self.card_index)
    }

    /// Feed entry under the overview cursor
    pub fn overview_selected_transaction(&self) -> Option<&Transaction> {
        self.dashboard.transactions().get(self.feed_index)
    }

    /// Feed entry under the detail cursor, within the filtered feed
    pub fn detail_selected_transaction(&self) -> Option<&Transaction> {
        let account = self.dashboard.selected_account()?;
        self.dashboard
            .transactions_for(account)
            .get(self.detail_index)
            .copied()
    }

    /// Rows in the detail screen's filtered feed
    pub fn detail_feed_len(&self) -> usize {
        self.dashboard
            .selected_account()
            .map(|a| self.dashboard.transactions_for(a).len())
            .unwrap_or(0)
    }

    pub fn card_left(&mut self) {
        self.card_index = self.card_index.saturating_sub(1);
    }

    pub fn card_right(&mut self) {
        if self.card_index + 1 < self.card_count() {
            self.card_index += 1;
        }
    }

    pub fn feed_up(&mut self) {
        self.feed_index = self.feed_index.saturating_sub(1);
    }

    pub fn feed_down(&mut self) {
        if self.feed_index + 1 < self.dashboard.transactions().len() {
            self.feed_index += 1;
        }
    }

    pub fn detail_up(&mut self) {
        self.detail_index = self.detail_index.saturating_sub(1);
    }

    pub fn detail_down(&mut self) {
        if self.detail_index + 1 < self.detail_feed_len() {
            self.detail_index += 1;
        }
    }

    pub fn profile_up(&mut self) {
        self.profile_index = self.profile_index.saturating_sub(1);
    }

    pub fn profile_down(&mut self) {
        if self.profile_index + 1 < ProfileField::ALL.len() {
            self.profile_index += 1;
        }
    }

    /// Field under the profile cursor
    pub fn profile_field(&self) -> ProfileField {
        ProfileField::ALL[self.profile_index.min(ProfileField::ALL.len() - 1)]
    }

    /// Open the detail screen for the card under the cursor
    pub fn open_selected_card(&mut self) {
        if let Some(account) = self.selected_card_account() {
            let id = account.id.clone();
            self.detail_index = 0;
            self.dashboard.navigate(Nav::SelectAccount(id));
        }
    }

    // --- recovery ---

    /// Check if the session is showing the recovery screen
    pub fn crashed(&self) -> bool {
        self.crash.is_some()
    }

    /// Leave the recovery screen, keeping current data ("try again")
    pub fn clear_crash(&mut self) {
        self.crash = None;
        self.clear_status();
    }

    /// Rebuild the dashboard from the demo dataset, keeping settings
    pub fn reload(&mut self) {
        self.dashboard = Dashboard::seeded();
        self.overview_focus = OverviewFocus::default();
        self.card_index = 0;
        self.feed_index = 0;
        self.detail_index = 0;
        self.profile_index = 0;
        self.editor = None;
        self.active_dialog = ActiveDialog::None;
        self.crash = None;
        self.set_status("Dashboard reloaded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn app() -> App {
        App::new(Settings::default())
    }

    #[test]
    fn test_begin_and_commit_balance_edit() {
        let mut app = app();
        let id = AccountId::from("1");
        app.begin_edit(EditTarget::Balance(id.clone()));

        let edit = app.editor.as_mut().unwrap();
        assert_eq!(edit.editor.value(), "232.53");
        edit.editor.clear();
        for c in "500.00".chars() {
            edit.editor.insert(c);
        }

        app.commit_edit();
        assert!(app.editor.is_none());
        assert_eq!(
            app.dashboard.account(&id).unwrap().balance,
            Money::from_cents(50000)
        );
    }

    #[test]
    fn test_invalid_edit_commits_zero() {
        let mut app = app();
        let id = TransactionId::from("t4");
        app.begin_edit(EditTarget::Amount(id.clone()));

        let edit = app.editor.as_mut().unwrap();
        edit.editor.clear();
        for c in "oops".chars() {
            edit.editor.insert(c);
        }

        app.commit_edit();
        assert_eq!(
            app.dashboard.transaction(&id).unwrap().amount,
            Money::zero()
        );
        assert!(app.status_message.as_deref().unwrap().contains("0.00"));
    }

    #[test]
    fn test_empty_edit_commits_zero() {
        let mut app = app();
        let id = AccountId::from("2");
        app.begin_edit(EditTarget::Balance(id.clone()));
        app.editor.as_mut().unwrap().editor.clear();
        app.commit_edit();
        assert_eq!(app.dashboard.account(&id).unwrap().balance, Money::zero());
    }

    #[test]
    fn test_cancel_edit_discards_changes() {
        let mut app = app();
        let id = AccountId::from("2");
        app.begin_edit(EditTarget::Balance(id.clone()));
        app.editor.as_mut().unwrap().editor.insert('9');
        app.cancel_edit();

        assert!(app.editor.is_none());
        assert_eq!(
            app.dashboard.account(&id).unwrap().balance,
            Money::from_cents(145000)
        );
    }

    #[test]
    fn test_profile_edit_applies_raw_text() {
        let mut app = app();
        app.begin_edit(EditTarget::Profile(ProfileField::Handle));
        let edit = app.editor.as_mut().unwrap();
        edit.editor.clear();
        for c in "@new_handle".chars() {
            edit.editor.insert(c);
        }
        app.commit_edit();
        assert_eq!(app.dashboard.profile().handle, "@new_handle");
    }

    #[test]
    fn test_begin_edit_unknown_target_sets_status() {
        let mut app = app();
        app.begin_edit(EditTarget::Balance(AccountId::from("404")));
        assert!(app.editor.is_none());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_card_cursor_clamps() {
        let mut app = app();
        app.card_left();
        assert_eq!(app.card_index, 0);
        for _ in 0..10 {
            app.card_right();
        }
        assert_eq!(app.card_index, 3);
    }

    #[test]
    fn test_open_selected_card() {
        let mut app = app();
        app.card_index = 3;
        app.open_selected_card();
        assert_eq!(
            app.dashboard.selected_account().unwrap().currency.as_str(),
            "THB"
        );
    }

    #[test]
    fn test_detail_cursor_tracks_filtered_feed() {
        let mut app = app();
        app.card_index = 0;
        app.open_selected_card();
        // EUR feed has three entries
        app.detail_down();
        app.detail_down();
        app.detail_down();
        assert_eq!(app.detail_index, 2);
        assert_eq!(
            app.detail_selected_transaction().unwrap().recipient,
            "Spotify AB"
        );
    }

    #[test]
    fn test_reload_restores_demo_data_and_keeps_settings() {
        let mut app = app();
        app.settings.accent = "green".to_string();
        let id = AccountId::from("1");
        app.dashboard.update_balance(&id, Money::from_cents(1));
        app.crash = Some(crate::tui::fallback::CrashInfo {
            message: "boom".to_string(),
        });

        app.reload();

        assert_eq!(
            app.dashboard.account(&id).unwrap().balance,
            Money::from_cents(23253)
        );
        assert!(app.crash.is_none());
        assert_eq!(app.settings.accent, "green");
    }

    #[test]
    fn test_profile_cursor_walks_all_fields() {
        let mut app = app();
        assert_eq!(app.profile_field(), ProfileField::Name);
        app.profile_down();
        assert_eq!(app.profile_field(), ProfileField::Handle);
        app.profile_down();
        assert_eq!(app.profile_field(), ProfileField::AvatarUrl);
        app.profile_down();
        app.profile_down();
        assert_eq!(app.profile_field(), ProfileField::MembershipNumber);
        app.profile_up();
        assert_eq!(app.profile_field(), ProfileField::AvatarUrl);
    }

    #[test]
    fn test_overview_focus_cycle() {
        assert_eq!(OverviewFocus::Hero.next(), OverviewFocus::Cards);
        assert_eq!(OverviewFocus::Cards.next(), OverviewFocus::Feed);
        assert_eq!(OverviewFocus::Feed.next(), OverviewFocus::Hero);
    }
}
