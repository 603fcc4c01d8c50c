use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use super::dialog::{DialogFrame, InstructionBar};
use super::key_hints::KeyHint;
use super::theme::{ACCENT_SUCCESS, TEXT_PRIMARY};

/// Blocking acknowledgement with a single OK
pub struct NoticeDialog<'a> {
    message: &'a str,
    hints: &'a [KeyHint],
}

impl<'a> NoticeDialog<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message, hints: &[] }
    }

    pub fn hints(mut self, hints: &'a [KeyHint]) -> Self {
        self.hints = hints;
        self
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let inner = DialogFrame::new("Notice", 36, 6)
            .border_color(ACCENT_SUCCESS)
            .render(area, buf);

        let [message, _, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(self.message)
            .style(Style::default().fg(TEXT_PRIMARY))
            .alignment(Alignment::Center)
            .render(message, buf);

        InstructionBar::new(self.hints).render(hints, buf);
    }
}
