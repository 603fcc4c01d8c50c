//! Reusable dialog frame and instruction bar components

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::key_hints::{render_key_hints, HintStyle, KeyHint};
use super::theme::ACCENT_PRIMARY;

/// A centered dialog frame with title and border
pub struct DialogFrame<'a> {
    title: &'a str,
    width: u16,
    height: u16,
    border_color: Color,
}

impl<'a> DialogFrame<'a> {
    pub fn new(title: &'a str, width: u16, height: u16) -> Self {
        Self {
            title,
            width,
            height,
            border_color: ACCENT_PRIMARY,
        }
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    /// Render the dialog frame and return the inner area for content
    pub fn render(&self, area: Rect, buf: &mut Buffer) -> Rect {
        // Capped to the available area
        let dialog_width = self.width.min(area.width.saturating_sub(4));
        let dialog_height = self.height.min(area.height.saturating_sub(2));

        let dialog_area = Rect {
            x: area.x + area.width.saturating_sub(dialog_width) / 2,
            y: area.y + area.height.saturating_sub(dialog_height) / 2,
            width: dialog_width,
            height: dialog_height,
        };

        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.border_color));

        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        inner
    }
}

/// Centered key hints along the bottom of a dialog
pub struct InstructionBar<'a> {
    hints: &'a [KeyHint],
}

impl<'a> InstructionBar<'a> {
    pub fn new(hints: &'a [KeyHint]) -> Self {
        Self { hints }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        render_key_hints(area, buf, self.hints, HintStyle::Dialog);
    }
}
