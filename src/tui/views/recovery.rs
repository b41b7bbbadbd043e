//! Recovery screen
//!
//! Replaces every other screen after a caught crash. Drawing this screen
//! deliberately avoids the crash guard so a broken screen cannot take the
//! recovery path down with it; it renders from nothing but the crash text.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::fallback::CrashInfo;
use crate::tui::layout::centered_rect;

/// Render the recovery screen
pub fn render(frame: &mut Frame, crash: &CrashInfo, area: Rect) {
    let card = centered_rect(60, 50, area);

    let block = Block::default()
        .title(" Something went wrong ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "The dashboard hit an unexpected error.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            crash.message.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(""),
        key_line("t", "Try again with current data"),
        key_line("r", "Reload the demo data"),
        key_line("q", "Quit"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, card);
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("[{}] ", key),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
