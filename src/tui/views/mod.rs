//! TUI views module
//!
//! The three dashboard screens plus the header, status bar, and the
//! recovery screen shown after a caught crash.

pub mod account_detail;
pub mod overview;
pub mod profile;
pub mod recovery;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::config::Settings;
use crate::models::{Money, Transaction, TransactionStatus};
use crate::state::View;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    // The recovery screen bypasses everything else and is never guarded.
    if let Some(crash) = &app.crash {
        let area = frame.area();
        recovery::render(frame, crash, area);
        return;
    }

    let layout = AppLayout::new(frame.area());

    render_header(frame, app, layout.header);

    match app.dashboard.view() {
        View::Overview => overview::render(frame, app, layout.body),
        View::Account(_) => account_detail::render(frame, app, layout.body),
        View::Profile { .. } => profile::render(frame, app, layout.body),
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::AddTransaction => dialogs::add_transaction::render(frame, app),
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::None => {}
    }
}

/// Render the title bar
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let accent = app.accent();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let title = Line::from(vec![
        Span::styled(
            " moneydeck ",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            app.dashboard.profile().handle.clone(),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    frame.render_widget(Paragraph::new(title).block(block), area);
}

/// Format an amount per the grouping preference
pub(crate) fn format_amount(money: Money, settings: &Settings) -> String {
    if settings.grouped_amounts {
        money.format_grouped()
    } else {
        money.to_string()
    }
}

/// Render a feed table into the given area
///
/// Used by both the overview (full feed) and the detail screen (filtered
/// feed). The amount cell swaps to the inline editor when one is active for
/// that row.
pub(crate) fn render_feed_table(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    entries: &[&Transaction],
    selected: Option<usize>,
    focused: bool,
) {
    let accent = app.accent();
    let border_color = if focused { accent } else { Color::DarkGray };
    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if entries.is_empty() {
        let text = Paragraph::new("No transactions yet. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        ratatui::layout::Constraint::Length(3),  // Icon
        ratatui::layout::Constraint::Min(14),    // Recipient
        ratatui::layout::Constraint::Min(10),    // Description
        ratatui::layout::Constraint::Length(10), // Date
        ratatui::layout::Constraint::Length(12), // Status
        ratatui::layout::Constraint::Length(16), // Amount
    ];

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Recipient").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Description").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Status").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = entries
        .iter()
        .map(|tx| {
            let (status_symbol, status_color) = match tx.status {
                TransactionStatus::Completed => ("✓", Color::Green),
                TransactionStatus::Pending => ("○", Color::Yellow),
            };

            let amount_cell = match app.amount_editor(&tx.id) {
                Some(editor) => Cell::from(editor.styled_line(true, accent)),
                None => {
                    let amount_style = if tx.is_incoming() {
                        Style::default().fg(Color::Green)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Cell::from(format!(
                        "{}{} {}",
                        tx.direction.sign(),
                        format_amount(tx.amount, &app.settings),
                        tx.currency
                    ))
                    .style(amount_style)
                }
            };

            Row::new(vec![
                Cell::from(tx.category.glyph()),
                Cell::from(truncate(&tx.recipient, 22)),
                Cell::from(truncate(&tx.description, 18)),
                Cell::from(tx.date.clone()),
                Cell::from(format!("{} {}", status_symbol, tx.status))
                    .style(Style::default().fg(status_color)),
                amount_cell,
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(selected);

    frame.render_stateful_widget(table, area, &mut state);
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
