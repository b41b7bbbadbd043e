//! Overview screen
//!
//! Main balance hero, the account card row, and the recent activity feed.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, OverviewFocus};
use crate::tui::layout::OverviewLayout;

use super::{format_amount, render_feed_table};

/// Render the overview screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = OverviewLayout::new(area);

    render_hero(frame, app, layout.hero);
    render_cards(frame, app, layout.cards);

    let entries: Vec<_> = app.dashboard.transactions().iter().collect();
    let selected = (app.overview_focus == OverviewFocus::Feed && !entries.is_empty())
        .then_some(app.feed_index);
    render_feed_table(
        frame,
        app,
        layout.feed,
        " Recent activity ",
        &entries,
        selected,
        app.overview_focus == OverviewFocus::Feed,
    );
}

/// Render the main balance section
fn render_hero(frame: &mut Frame, app: &App, area: Rect) {
    let accent = app.accent();
    let focused = app.overview_focus == OverviewFocus::Hero;
    let border_color = if focused { accent } else { Color::DarkGray };

    let block = Block::default()
        .title(" Main balance ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let lines = match app.dashboard.primary_account() {
        Some(account) => {
            let amount_line = match app.balance_editor(&account.id) {
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
            vec![
                amount_line,
                Line::from(Span::styled(
                    format!(
                        "{} {} · {}",
                        account.flag, account.currency, account.account_number
                    ),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        }
        None => vec![Line::from(Span::styled(
            "No accounts",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the account card row
fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let accent = app.accent();
    let accounts = app.dashboard.accounts();

    if accounts.is_empty() {
        let block = Block::default()
            .title(" Accounts ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let text = Paragraph::new("No accounts")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    // One extra column for the inert add-account card.
    let columns = OverviewLayout::card_columns(area, accounts.len() + 1);
    for (i, (account, column)) in accounts.iter().zip(columns.iter()).enumerate() {
        let selected = app.overview_focus == OverviewFocus::Cards && app.card_index == i;
        let border_style = if selected {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .title(format!(" {} {} ", account.flag, account.currency))
            .borders(Borders::ALL)
            .border_style(border_style);

        let balance_line = match app.balance_editor(&account.id) {
            Some(editor) => editor.styled_line(true, accent),
            None => Line::from(Span::styled(
                format_amount(account.balance, &app.settings),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
        };

        let lines = vec![
            Line::from(""),
            balance_line,
            Line::from(Span::styled(
                account.account_number.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), *column);
    }

    if let Some(column) = columns.last() {
        render_add_card(frame, *column);
    }
}

/// The add-account card; present on the rail but not wired to anything
fn render_add_card(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("+", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled("Add account", Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(ratatui::layout::Alignment::Center),
        area,
    );
}
