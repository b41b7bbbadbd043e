//! Account detail screen
//!
//! One account's summary plus its feed, filtered to entries in the
//! account's currency.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Account;
use crate::tui::app::App;
use crate::tui::layout::DetailLayout;

use super::{format_amount, render_feed_table};

/// Render the account detail screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(account) = app.dashboard.selected_account() else {
        // A detail screen always carries an account id; an unknown id can
        // only mean the data under it went away.
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let text = Paragraph::new("Account not found. Press Esc to go back.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    };

    let layout = DetailLayout::new(area);
    render_summary(frame, app, account, layout.summary);

    let entries = app.dashboard.transactions_for(account);
    let selected = (!entries.is_empty()).then_some(app.detail_index.min(entries.len() - 1));
    let title = format!(" {} activity ", account.currency);
    render_feed_table(frame, app, layout.feed, &title, &entries, selected, true);
}

/// Render the account summary header
fn render_summary(frame: &mut Frame, app: &App, account: &Account, area: Rect) {
    let accent = app.accent();

    let block = Block::default()
        .title(format!(" {} {} account ", account.flag, account.currency))
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let balance_line = match app.balance_editor(&account.id) {
        Some(editor) => editor.styled_line(true, accent),
        None => Line::from(Span::styled(
            format!(
                "{} {}",
                format_amount(account.balance, &app.settings),
                account.currency
            ),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    };

    let hint = if app.dashboard.edit_mode() {
        "Enter:Edit amount  b:Edit balance  Esc:Back"
    } else {
        "j/k:Feed  a:Add  Esc:Back"
    };

    let lines = vec![
        Line::from(""),
        balance_line,
        Line::from(Span::styled(
            account.account_number.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
