//! Inline line editor
//!
//! A single-line text editor used for in-place edits of balances, amounts,
//! and profile fields, and for the add-transaction form. The cursor is
//! tracked in characters, not bytes, so accented input behaves.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Editable line of text with a cursor
#[derive(Debug, Clone, Default)]
pub struct LineEditor {
    value: String,
    /// Cursor position in characters
    cursor: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an editor pre-filled with content, cursor at the end
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index();
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.value.remove(at);
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index();
            self.value.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Render the content as a line, with a block cursor when focused
    pub fn styled_line(&self, focused: bool, accent: Color) -> Line<'static> {
        if !focused {
            return Line::from(self.value.clone());
        }

        let chars: Vec<char> = self.value.chars().collect();
        let before: String = chars[..self.cursor].iter().collect();
        let at = chars
            .get(self.cursor)
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after: String = if self.cursor < chars.len() {
            chars[self.cursor + 1..].iter().collect()
        } else {
            String::new()
        };

        Line::from(vec![
            Span::raw(before),
            Span::styled(at, Style::default().fg(Color::Black).bg(accent)),
            Span::raw(after),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_value() {
        let mut editor = LineEditor::new();
        editor.insert('4');
        editor.insert('2');
        assert_eq!(editor.value(), "42");
    }

    #[test]
    fn test_with_value_puts_cursor_at_end() {
        let mut editor = LineEditor::with_value("232.53");
        editor.insert('0');
        assert_eq!(editor.value(), "232.530");
    }

    #[test]
    fn test_backspace() {
        let mut editor = LineEditor::with_value("12.34");
        editor.backspace();
        assert_eq!(editor.value(), "12.3");
        editor.move_start();
        editor.backspace();
        assert_eq!(editor.value(), "12.3");
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut editor = LineEditor::with_value("abc");
        editor.move_start();
        editor.delete();
        assert_eq!(editor.value(), "bc");
        editor.move_end();
        editor.delete();
        assert_eq!(editor.value(), "bc");
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut editor = LineEditor::with_value("14");
        editor.move_left();
        editor.insert('.');
        assert_eq!(editor.value(), "1.4");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut editor = LineEditor::with_value("NICOLÁS");
        editor.backspace();
        editor.backspace();
        assert_eq!(editor.value(), "NICOL");
        editor.insert('É');
        assert_eq!(editor.value(), "NICOLÉ");
    }

    #[test]
    fn test_styled_line_cursor_at_end() {
        let editor = LineEditor::with_value("12");
        let line = editor.styled_line(true, Color::Cyan);
        // content plus the block cursor cell
        let rendered: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rendered, "12 ");
    }

    #[test]
    fn test_styled_line_unfocused_has_no_cursor() {
        let editor = LineEditor::with_value("12");
        let line = editor.styled_line(false, Color::Cyan);
        let rendered: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(rendered, "12");
    }
}
