//! One-line filter input
//!
//! A minimal text input with cursor support, used as the picker's
//! autocomplete filter.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// A single-line text input with a cursor
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    content: String,
    cursor: usize,
}

impl SearchInput {
    /// Create an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Whether the input is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .chars()
                .next_back()
                .map(char::len_utf8)
                .unwrap_or(0);
            self.cursor -= prev;
            self.content.remove(self.cursor);
        }
    }

    /// Move the cursor one character left
    pub fn move_left(&mut self) {
        if let Some(prev) = self.content[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    /// Move the cursor one character right
    pub fn move_right(&mut self) {
        if let Some(next) = self.content[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Render the input as a single line with a block cursor
    pub fn line<'a>(&'a self, placeholder: &'a str) -> Line<'a> {
        if self.content.is_empty() {
            return Line::from(vec![
                Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
                Span::styled(placeholder, Style::default().fg(Color::DarkGray)),
            ]);
        }

        let (before, rest) = self.content.split_at(self.cursor);
        let cursor_char = rest.chars().next().unwrap_or(' ');
        let after: &str = rest.get(cursor_char.len_utf8().min(rest.len())..).unwrap_or("");

        Line::from(vec![
            Span::styled(before, Style::default().fg(Color::White)),
            Span::styled(
                cursor_char.to_string(),
                Style::default().add_modifier(Modifier::REVERSED),
            ),
            Span::styled(after, Style::default().fg(Color::White)),
        ])
    }
}
