//! Reusable text input state with cursor management
//!
//! The cursor is a character index, not a byte offset, so editing stays
//! correct for multi-byte input. Multi-line values are supported; line-wise
//! commands (`C-a`, `C-e`, `C-u`, `C-k`) act on the line holding the cursor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::action::Action;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputState {
    input: String,
    /// Cursor position, in chars
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial value, cursor at the end
    pub fn with_value(value: &str) -> Self {
        let mut state = Self::new();
        state.set(value);
        state
    }

    /// Set the input value and move cursor to end
    pub fn set(&mut self, value: &str) {
        self.input = value.to_string();
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    pub fn value(&self) -> &str {
        &self.input
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_len(&self) -> usize {
        self.input.chars().count()
    }

    /// Byte offset of a char index
    fn byte_index(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn char_at(&self, char_idx: usize) -> Option<char> {
        self.input.chars().nth(char_idx)
    }

    /// Char index where the cursor's line starts
    fn line_start(&self) -> usize {
        let before = &self.input[..self.byte_index(self.cursor)];
        before
            .rfind('\n')
            .map(|i| before[..=i].chars().count())
            .unwrap_or(0)
    }

    /// Char index where the cursor's line ends (before its newline)
    fn line_end(&self) -> usize {
        let start = self.byte_index(self.cursor);
        match self.input[start..].find('\n') {
            Some(i) => self.cursor + self.input[start..start + i].chars().count(),
            None => self.char_len(),
        }
    }

    fn remove_range(&mut self, from: usize, to: usize) {
        let (from, to) = (self.byte_index(from), self.byte_index(to));
        self.input.drain(from..to);
    }

    /// Insert a character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.input.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.remove_range(self.cursor, self.cursor + 1);
        }
    }

    /// Delete character at cursor (delete)
    pub fn delete_forward(&mut self) {
        if self.cursor < self.char_len() {
            self.remove_range(self.cursor, self.cursor + 1);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start of the current line
    pub fn move_start(&mut self) {
        self.cursor = self.line_start();
    }

    /// Move cursor to end of the current line
    pub fn move_end(&mut self) {
        self.cursor = self.line_end();
    }

    /// Delete from cursor to start of line (Ctrl+U)
    pub fn delete_to_start(&mut self) {
        let start = self.line_start();
        self.remove_range(start, self.cursor);
        self.cursor = start;
    }

    /// Delete from cursor to end of line (Ctrl+K)
    pub fn delete_to_end(&mut self) {
        let end = self.line_end();
        self.remove_range(self.cursor, end);
    }

    /// Delete word before cursor (Ctrl+W)
    pub fn delete_word(&mut self) {
        let end = self.cursor;
        let mut start = end;
        while start > 0 && self.char_at(start - 1).is_some_and(char::is_whitespace) {
            start -= 1;
        }
        while start > 0 && self.char_at(start - 1).is_some_and(|c| !c.is_whitespace()) {
            start -= 1;
        }
        self.remove_range(start, end);
        self.cursor = start;
    }

    /// Apply a text editing action. Returns false for actions that are not
    /// text edits, leaving the input untouched.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::InsertNewline => self.insert_char('\n'),
            Action::Backspace => self.delete_char(),
            Action::Delete => self.delete_forward(),
            Action::DeleteWordBack => self.delete_word(),
            Action::DeleteToStart => self.delete_to_start(),
            Action::DeleteToEnd => self.delete_to_end(),
            Action::MoveCursorLeft => self.move_left(),
            Action::MoveCursorRight => self.move_right(),
            Action::MoveCursorStart => self.move_start(),
            Action::MoveCursorEnd => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Cursor position as (line, display column)
    pub fn cursor_position(&self) -> (u16, u16) {
        let before = &self.input[..self.byte_index(self.cursor)];
        let row = before.matches('\n').count();
        let line = before.rsplit('\n').next().unwrap_or("");
        (row as u16, line.width() as u16)
    }

    /// Render the text, scrolled so the cursor stays visible
    pub fn render(&self, area: Rect, buf: &mut Buffer, style: Style, show_cursor: bool) {
        self.render_with_placeholder(area, buf, style, "", style, show_cursor);
    }

    /// Render with placeholder text when empty
    pub fn render_with_placeholder(
        &self,
        area: Rect,
        buf: &mut Buffer,
        style: Style,
        placeholder: &str,
        placeholder_style: Style,
        show_cursor: bool,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (row, col) = self.cursor_position();
        let scroll_y = row.saturating_sub(area.height - 1);
        let scroll_x = col.saturating_sub(area.width - 1);

        if self.input.is_empty() {
            Paragraph::new(placeholder)
                .style(placeholder_style)
                .render(area, buf);
        } else {
            Paragraph::new(self.input.as_str())
                .style(style)
                .scroll((scroll_y, scroll_x))
                .render(area, buf);
        }

        if show_cursor {
            let x = area.x + col - scroll_x;
            let y = area.y + row - scroll_y;
            buf[(x, y)].set_style(Style::default().add_modifier(Modifier::REVERSED));
        }
    }
}

impl std::fmt::Display for TextInputState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.input)
    }
}
