//! Single-line text input state with cursor management

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

/// Text input state; the cursor is a char index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputState {
    input: String,
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial value, cursor at end
    pub fn with_value(value: &str) -> Self {
        Self {
            input: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    /// Set the input value and move cursor to end
    pub fn set(&mut self, value: &str) {
        self.input = value.to_string();
        self.cursor = self.input.chars().count();
    }

    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    /// Insert a character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor (backspace). Returns whether text changed.
    pub fn delete_char(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.input.remove(at);
        true
    }

    /// Delete character at cursor (delete). Returns whether text changed.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.input.chars().count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.input.remove(at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.input.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.input.chars().count();
    }

    /// Spans for rendering; when focused the char under the cursor is reversed
    pub fn spans(&self, focused: bool, style: Style) -> Vec<Span<'_>> {
        if !focused {
            return vec![Span::styled(self.input.as_str(), style)];
        }

        let cursor_style = style.add_modifier(Modifier::REVERSED);
        let at = self.byte_index(self.cursor);
        let (before, rest) = self.input.split_at(at);
        let mut chars = rest.chars();
        let under = chars.next();
        let after = chars.as_str();

        vec![
            Span::styled(before, style),
            Span::styled(
                under.map(String::from).unwrap_or_else(|| " ".to_string()),
                cursor_style,
            ),
            Span::styled(after, style),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_delete() {
        let mut input = TextInputState::new();
        for c in "Ada".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.value(), "Ada");
        assert!(input.delete_char());
        assert_eq!(input.value(), "Ad");
        input.move_start();
        assert!(!input.delete_char());
        assert!(input.delete_forward());
        assert_eq!(input.value(), "d");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInputState::with_value("Zoë");
        input.move_left();
        input.insert_char('x');
        assert_eq!(input.value(), "Zoxë");
        input.move_end();
        assert!(input.delete_char());
        assert_eq!(input.value(), "Zox");
    }

    #[test]
    fn test_focused_spans_show_cursor_block_at_end() {
        let input = TextInputState::with_value("Al");
        let spans = input.spans(true, Style::default());
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].content, "Al");
        assert_eq!(spans[1].content, " ");
    }
}
