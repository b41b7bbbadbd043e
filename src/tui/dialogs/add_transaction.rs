//! Add-transaction dialog
//!
//! Modal form for entering a new feed entry: recipient, description, amount,
//! and direction, with tab navigation and validation.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{date_label, CurrencyCode, Direction, Money, Transaction};
use crate::state::parse_edited_amount;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::editor::LineEditor;

/// Which field is currently focused in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Recipient,
    Description,
    Amount,
    Direction,
}

impl FormField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Recipient => Self::Description,
            Self::Description => Self::Amount,
            Self::Amount => Self::Direction,
            Self::Direction => Self::Recipient,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Recipient => Self::Direction,
            Self::Description => Self::Recipient,
            Self::Amount => Self::Description,
            Self::Direction => Self::Amount,
        }
    }
}

/// State for the add-transaction form
#[derive(Debug, Clone)]
pub struct TransactionForm {
    /// Currently focused field
    pub focused_field: FormField,

    /// Recipient input
    pub recipient: LineEditor,

    /// Description input (optional, defaults by direction)
    pub description: LineEditor,

    /// Amount input
    pub amount: LineEditor,

    /// Money in or money out
    pub direction: Direction,

    /// Error message to display
    pub error_message: Option<String>,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionForm {
    /// Create an empty form, outgoing by default
    pub fn new() -> Self {
        Self {
            focused_field: FormField::default(),
            recipient: LineEditor::new(),
            description: LineEditor::new(),
            amount: LineEditor::new(),
            direction: Direction::Outgoing,
            error_message: None,
        }
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Get the focused text input, if the focused field is one
    pub fn focused_editor(&mut self) -> Option<&mut LineEditor> {
        match self.focused_field {
            FormField::Recipient => Some(&mut self.recipient),
            FormField::Description => Some(&mut self.description),
            FormField::Amount => Some(&mut self.amount),
            FormField::Direction => None,
        }
    }

    /// Flip between outgoing and incoming
    pub fn toggle_direction(&mut self) {
        self.direction = match self.direction {
            Direction::Outgoing => Direction::Incoming,
            Direction::Incoming => Direction::Outgoing,
        };
    }

    /// Validate the form and return any error
    pub fn validate(&self) -> Result<(), String> {
        if self.recipient.value().trim().is_empty() {
            return Err("Enter a recipient".to_string());
        }
        if !parse_edited_amount(self.amount.value()).valid {
            return Err("Enter an amount".to_string());
        }
        Ok(())
    }

    /// Build a transaction from the form state
    ///
    /// The currency is the caller's default; the state container re-tags it
    /// when a detail screen is active. An empty description falls back to
    /// "Sent" or "Received".
    pub fn build(
        &self,
        currency: CurrencyCode,
        date_format: &str,
    ) -> Result<Transaction, String> {
        self.validate()?;

        let amount: Money = parse_edited_amount(self.amount.value()).value;
        let description = if self.description.value().trim().is_empty() {
            match self.direction {
                Direction::Outgoing => "Sent".to_string(),
                Direction::Incoming => "Received".to_string(),
            }
        } else {
            self.description.value().trim().to_string()
        };

        let mut tx = Transaction::new(
            self.recipient.value().trim(),
            description,
            amount,
            currency,
            self.direction,
        );
        let today = Local::now().date_naive();
        tx.date = date_label(today, today, date_format);
        Ok(tx)
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    /// Clear any error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Render the add-transaction dialog
pub fn render(frame: &mut Frame, app: &App) {
    let accent = app.accent();
    let area = centered_rect_fixed(52, 12, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Transaction ")
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(1), // Recipient
            Constraint::Length(1), // Description
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Direction
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.transaction_form;
    let focused = form.focused_field;

    frame.render_widget(
        Paragraph::new(field_line(
            "Recipient",
            &form.recipient,
            focused == FormField::Recipient,
            accent,
        )),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(field_line(
            "Description",
            &form.description,
            focused == FormField::Description,
            accent,
        )),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(field_line(
            "Amount",
            &form.amount,
            focused == FormField::Amount,
            accent,
        )),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(direction_line(
            form.direction,
            focused == FormField::Direction,
            accent,
        )),
        chunks[3],
    );

    if let Some(ref error) = form.error_message {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            ))),
            chunks[5],
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Tab:Next  Space:Toggle direction  Enter:Save  Esc:Cancel",
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[7],
    );
}

fn field_line(label: &str, editor: &LineEditor, focused: bool, accent: Color) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:>12}: ", label),
        Style::default().fg(accent),
    )];
    spans.extend(editor.styled_line(focused, accent).spans);
    Line::from(spans)
}

fn direction_line(direction: Direction, focused: bool, accent: Color) -> Line<'static> {
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(accent)
    } else {
        Style::default().fg(Color::White)
    };
    Line::from(vec![
        Span::styled(
            format!("{:>12}: ", "Direction"),
            Style::default().fg(accent),
        ),
        Span::styled(format!("◀ {} ▶", direction), value_style),
    ])
}
