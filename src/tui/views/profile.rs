//! Profile screen
//!
//! Membership card with the avatar placeholder, name, handle, and
//! membership number. Name and handle are editable in place.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::ProfileField;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the profile screen
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let accent = app.accent();
    let profile = app.dashboard.profile();
    let card = centered_rect_fixed(46, 14, area);

    let block = Block::default()
        .title(" Profile ")
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    let name_line = match app.profile_editor(ProfileField::Name) {
        Some(editor) => editor.styled_line(true, accent),
        None => Line::from(Span::styled(
            profile.title_cased_name(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    };
    let handle_line = match app.profile_editor(ProfileField::Handle) {
        Some(editor) => editor.styled_line(true, accent),
        None => Line::from(Span::styled(
            profile.handle.clone(),
            Style::default().fg(accent),
        )),
    };
    let avatar_line = match app.profile_editor(ProfileField::AvatarUrl) {
        Some(editor) => editor.styled_line(true, accent),
        None => Line::from(Span::styled(
            profile.avatar_url.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    };
    let membership_line = match app.profile_editor(ProfileField::MembershipNumber) {
        Some(editor) => editor.styled_line(true, accent),
        None => Line::from(Span::styled(
            format!("Member {}", profile.membership_number),
            Style::default().fg(Color::DarkGray),
        )),
    };

    let hint = if app.dashboard.edit_mode() {
        "j/k:Select  Enter:Edit  Esc:Back"
    } else {
        "e:Edit mode  Esc:Back"
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("░░░░░░", Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled("░░░░░░", Style::default().fg(Color::DarkGray))),
        Line::from(""),
        selectable(name_line, app.profile_index == 0),
        selectable(handle_line, app.profile_index == 1),
        Line::from(""),
        selectable(avatar_line, app.profile_index == 2),
        selectable(membership_line, app.profile_index == 3),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, card);
}

/// Prefix the row under the cursor with a marker
fn selectable(line: Line<'static>, selected: bool) -> Line<'static> {
    if !selected {
        return line;
    }
    let mut spans = vec![Span::styled("▶ ", Style::default().fg(Color::Yellow))];
    spans.extend(line.spans);
    Line::from(spans)
}
