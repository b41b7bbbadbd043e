//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::state::View;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let accent = app.accent();
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let paragraph = Paragraph::new(help_lines(app))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Build help text for the current screen
fn help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("q", "Quit"),
        key_line("?", "Show/hide help"),
        key_line("e", "Toggle edit mode"),
        key_line("p", "Open profile"),
        key_line("a", "Add transaction"),
        Line::from(""),
    ];

    match app.dashboard.view() {
        View::Overview => {
            lines.push(section("Overview"));
            lines.push(Line::from(""));
            lines.push(key_line("Tab", "Cycle focus (balance / cards / feed)"));
            lines.push(key_line("h/l", "Select account card"));
            lines.push(key_line("j/k", "Move through the feed"));
            lines.push(key_line("Enter", "Open card, or edit in edit mode"));
        }
        View::Account(_) => {
            lines.push(section("Account Detail"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Move through the feed"));
            lines.push(key_line("Enter", "Edit amount (edit mode)"));
            lines.push(key_line("Esc", "Back to overview"));
        }
        View::Profile { .. } => {
            lines.push(section("Profile"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Select a profile field"));
            lines.push(key_line("Enter", "Edit field (edit mode)"));
            lines.push(key_line("Esc", "Back"));
        }
    }

    lines.push(Line::from(""));
    lines.push(section("While Editing"));
    lines.push(Line::from(""));
    lines.push(key_line("Enter", "Commit"));
    lines.push(key_line("Esc", "Cancel"));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>8}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
