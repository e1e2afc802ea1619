//! Text input component.
//!
//! A single-line text input with cursor movement, used by the product
//! form fields.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// A single-line text input widget.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// The current input value.
    value: String,
    /// Cursor position within the value.
    cursor: usize,
    /// Placeholder text shown when empty.
    placeholder: String,
}

impl TextInput {
    /// Create a new empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new input with an initial value.
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self {
            value,
            cursor,
            placeholder: String::new(),
        }
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Get the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the value and move the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    /// Clear the input.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Check if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the cursor position as a byte index into the value.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Get the cursor position as a character column for rendering. Differs
    /// from [`cursor`](Self::cursor) whenever the text before the cursor
    /// contains multibyte characters.
    pub fn cursor_column(&self) -> usize {
        self.value[..self.cursor].chars().count()
    }

    /// Handle keyboard input.
    ///
    /// Returns true if the value was modified.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.value.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                true
            }
            (KeyCode::Backspace, _) => {
                if self.cursor > 0 {
                    let prev = self.value[..self.cursor]
                        .chars()
                        .next_back()
                        .map(char::len_utf8)
                        .unwrap_or(1);
                    self.cursor -= prev;
                    self.value.remove(self.cursor);
                    true
                } else {
                    false
                }
            }
            (KeyCode::Delete, _) => {
                if self.cursor < self.value.len() {
                    self.value.remove(self.cursor);
                    true
                } else {
                    false
                }
            }
            (KeyCode::Left, KeyModifiers::NONE) => {
                if self.cursor > 0 {
                    let prev = self.value[..self.cursor]
                        .chars()
                        .next_back()
                        .map(char::len_utf8)
                        .unwrap_or(1);
                    self.cursor -= prev;
                }
                false
            }
            (KeyCode::Right, KeyModifiers::NONE) => {
                if self.cursor < self.value.len() {
                    let next = self.value[self.cursor..]
                        .chars()
                        .next()
                        .map(char::len_utf8)
                        .unwrap_or(1);
                    self.cursor += next;
                }
                false
            }
            (KeyCode::Home, _) => {
                self.cursor = 0;
                false
            }
            (KeyCode::End, _) => {
                self.cursor = self.value.len();
                false
            }
            // Ctrl+U - clear line
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                if !self.value.is_empty() {
                    self.clear();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Render the input field with a labeled border.
    pub fn render_with_label(&self, frame: &mut Frame, area: Rect, label: &str, focused: bool) {
        let display = if self.value.is_empty() && !self.placeholder.is_empty() {
            self.placeholder.clone()
        } else {
            self.value.clone()
        };

        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else if self.value.is_empty() && !self.placeholder.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let title_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", label), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        frame.render_widget(Paragraph::new(display).style(style).block(block), area);

        if focused {
            let cursor_x = area.x + 1 + self.cursor_column() as u16;
            let cursor_y = area.y + 1;
            if cursor_x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position(Position::new(cursor_x, cursor_y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_new_input_is_empty() {
        let input = TextInput::new();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_with_value_places_cursor_at_end() {
        let input = TextInput::with_value("hello");
        assert_eq!(input.value(), "hello");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_character_input() {
        let mut input = TextInput::new();
        assert!(input.handle_input(key(KeyCode::Char('a'))));
        assert!(input.handle_input(key(KeyCode::Char('b'))));
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_insert_mid_value() {
        let mut input = TextInput::with_value("ac");
        input.handle_input(key(KeyCode::Left));
        input.handle_input(key(KeyCode::Char('b')));
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_backspace() {
        let mut input = TextInput::with_value("abc");
        assert!(input.handle_input(key(KeyCode::Backspace)));
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::with_value("abc");
        input.handle_input(key(KeyCode::Home));
        assert!(!input.handle_input(key(KeyCode::Backspace)));
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInput::with_value("abc");
        input.handle_input(key(KeyCode::Home));
        assert!(input.handle_input(key(KeyCode::Delete)));
        assert_eq!(input.value(), "bc");
    }

    #[test]
    fn test_home_and_end() {
        let mut input = TextInput::with_value("abc");
        input.handle_input(key(KeyCode::Home));
        assert_eq!(input.cursor(), 0);
        input.handle_input(key(KeyCode::End));
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = TextInput::with_value("abc");
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(input.handle_input(ctrl_u));
        assert!(input.is_empty());
    }

    #[test]
    fn test_multibyte_input() {
        let mut input = TextInput::new();
        input.handle_input(key(KeyCode::Char('é')));
        input.handle_input(key(KeyCode::Backspace));
        assert!(input.is_empty());
    }

    #[test]
    fn test_cursor_column_counts_characters_not_bytes() {
        let mut input = TextInput::with_value("héllo");
        assert_eq!(input.cursor(), 6);
        assert_eq!(input.cursor_column(), 5);

        input.handle_input(key(KeyCode::Left));
        input.handle_input(key(KeyCode::Left));
        input.handle_input(key(KeyCode::Left));
        assert_eq!(input.cursor_column(), 2);
    }
}
