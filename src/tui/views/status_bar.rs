//! Status bar view
//!
//! Shows the current screen, edit mode state, transient messages, and key
//! hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::View;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    let screen = match app.dashboard.view() {
        View::Overview => "Overview".to_string(),
        View::Account(id) => match app.dashboard.account(id) {
            Some(account) => format!("{} account", account.currency),
            None => "Account".to_string(),
        },
        View::Profile { .. } => "Profile".to_string(),
    };
    spans.push(Span::styled(
        format!(" {} ", screen),
        Style::default().fg(Color::White),
    ));

    if app.dashboard.edit_mode() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            " EDIT ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = if app.is_editing() {
        " Enter:Commit  Esc:Cancel "
    } else if app.has_dialog() {
        " Tab:Next  Enter:Save  Esc:Close "
    } else {
        " q:Quit  ?:Help  e:Edit  p:Profile  a:Add "
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hints_len = hints.chars().count();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints_len);
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
