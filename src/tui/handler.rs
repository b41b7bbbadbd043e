//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state. Precedence: recovery screen, then an open dialog, then
//! an in-progress inline edit, then the normal per-screen keys.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::Nav;
use crate::tui::app::{ActiveDialog, App, EditTarget, OverviewFocus};
use crate::tui::dialogs::add_transaction::FormField;

use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.crashed() {
        return handle_recovery_key(app, key);
    }
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }
    if app.is_editing() {
        return handle_editing_key(app, key);
    }
    handle_normal_key(app, key)
}

/// Handle keys on the recovery screen
fn handle_recovery_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('t') | KeyCode::Char('T') => app.clear_crash(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reload(),
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Help => {
            // Any key closes the help overlay
            app.close_dialog();
            Ok(())
        }
        ActiveDialog::AddTransaction => handle_transaction_form_key(app, key),
        ActiveDialog::None => Ok(()),
    }
}

/// Handle keys in the add-transaction form
fn handle_transaction_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }
        KeyCode::Tab | KeyCode::Down => {
            app.transaction_form.clear_error();
            app.transaction_form.next_field();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.transaction_form.clear_error();
            app.transaction_form.prev_field();
        }
        KeyCode::Enter => submit_transaction_form(app),
        KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
            if app.transaction_form.focused_field == FormField::Direction =>
        {
            app.transaction_form.toggle_direction();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(editor) = app.transaction_form.focused_editor() {
                editor.insert(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(editor) = app.transaction_form.focused_editor() {
                editor.backspace();
            }
        }
        KeyCode::Delete => {
            if let Some(editor) = app.transaction_form.focused_editor() {
                editor.delete();
            }
        }
        KeyCode::Left => {
            if let Some(editor) = app.transaction_form.focused_editor() {
                editor.move_left();
            }
        }
        KeyCode::Right => {
            if let Some(editor) = app.transaction_form.focused_editor() {
                editor.move_right();
            }
        }
        _ => {}
    }
    Ok(())
}

/// Build the form's transaction and push it into the dashboard
fn submit_transaction_form(app: &mut App) {
    // Default currency; the container re-tags it on a detail screen anyway.
    let currency = match app
        .dashboard
        .selected_account()
        .or_else(|| app.dashboard.primary_account())
    {
        Some(account) => account.currency.clone(),
        None => {
            app.transaction_form.set_error("No account to attach to");
            return;
        }
    };

    match app
        .transaction_form
        .build(currency, &app.settings.date_format)
    {
        Ok(tx) => {
            app.dashboard.add_transaction(tx);
            app.feed_index = 0;
            app.detail_index = 0;
            app.close_dialog();
            app.set_status("Transaction added");
        }
        Err(message) => app.transaction_form.set_error(message),
    }
}

/// Handle keys while an inline edit is in progress
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        code => {
            if let Some(edit) = app.editor.as_mut() {
                match code {
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        edit.editor.insert(c)
                    }
                    KeyCode::Backspace => edit.editor.backspace(),
                    KeyCode::Delete => edit.editor.delete(),
                    KeyCode::Left => edit.editor.move_left(),
                    KeyCode::Right => edit.editor.move_right(),
                    KeyCode::Home => edit.editor.move_start(),
                    KeyCode::End => edit.editor.move_end(),
                    _ => {}
                }
            }
        }
    }
    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys (work on every screen)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Char('e') => {
            let on = app.dashboard.toggle_edit_mode();
            app.set_status(if on { "Edit mode on" } else { "Edit mode off" });
            return Ok(());
        }
        KeyCode::Char('p') => {
            app.profile_index = 0;
            app.dashboard.navigate(Nav::OpenProfile);
            return Ok(());
        }
        KeyCode::Char('a') => {
            app.open_dialog(ActiveDialog::AddTransaction);
            return Ok(());
        }
        KeyCode::Esc => {
            app.clear_status();
            app.dashboard.navigate(Nav::Back);
            return Ok(());
        }
        _ => {}
    }

    // Screen-specific keys
    if app.dashboard.view().is_profile() {
        handle_profile_key(app, key)
    } else if app.dashboard.view().account_id().is_some() {
        handle_detail_key(app, key)
    } else {
        handle_overview_key(app, key)
    }
}

/// Handle keys on the overview screen
fn handle_overview_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Tab => {
            app.overview_focus = app.overview_focus.next();
        }
        KeyCode::Char('h') | KeyCode::Left => {
            if app.overview_focus == OverviewFocus::Cards {
                app.card_left();
            }
        }
        KeyCode::Char('l') | KeyCode::Right => {
            if app.overview_focus == OverviewFocus::Cards {
                app.card_right();
            }
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.overview_focus == OverviewFocus::Feed {
                app.feed_down();
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.overview_focus == OverviewFocus::Feed {
                app.feed_up();
            }
        }
        KeyCode::Enter => handle_overview_enter(app),
        _ => {}
    }
    Ok(())
}

/// Enter on the overview: open or edit depending on focus and edit mode
fn handle_overview_enter(app: &mut App) {
    match app.overview_focus {
        OverviewFocus::Hero => {
            if app.dashboard.edit_mode() {
                if let Some(account) = app.dashboard.primary_account() {
                    let id = account.id.clone();
                    app.begin_edit(EditTarget::Balance(id));
                }
            }
        }
        OverviewFocus::Cards => {
            if app.dashboard.edit_mode() {
                if let Some(account) = app.selected_card_account() {
                    let id = account.id.clone();
                    app.begin_edit(EditTarget::Balance(id));
                }
            } else {
                app.open_selected_card();
            }
        }
        OverviewFocus::Feed => {
            if app.dashboard.edit_mode() {
                if let Some(tx) = app.overview_selected_transaction() {
                    let id = tx.id.clone();
                    app.begin_edit(EditTarget::Amount(id));
                }
            }
        }
    }
}

/// Handle keys on the account detail screen
fn handle_detail_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.detail_down(),
        KeyCode::Char('k') | KeyCode::Up => app.detail_up(),
        KeyCode::Char('b') => {
            if app.dashboard.edit_mode() {
                if let Some(account) = app.dashboard.selected_account() {
                    let id = account.id.clone();
                    app.begin_edit(EditTarget::Balance(id));
                }
            } else {
                app.dashboard.navigate(Nav::Back);
            }
        }
        KeyCode::Enter => {
            if app.dashboard.edit_mode() {
                if let Some(tx) = app.detail_selected_transaction() {
                    let id = tx.id.clone();
                    app.begin_edit(EditTarget::Amount(id));
                }
            }
        }
        _ => {}
    }
    Ok(())
}

/// Handle keys on the profile screen
fn handle_profile_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.profile_down(),
        KeyCode::Char('k') | KeyCode::Up => app.profile_up(),
        KeyCode::Enter => {
            if app.dashboard.edit_mode() {
                app.begin_edit(EditTarget::Profile(app.profile_field()));
            }
        }
        _ => {}
    }
    Ok(())
}
