use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::dialog::{DialogFrame, InstructionBar};
use super::key_hints::KeyHint;
use super::text_input::TextInputState;
use super::theme::{ACCENT_PRIMARY, TEXT_FAINT, TEXT_PRIMARY};
use crate::data::{TimeSlot, Weekday};

const DIALOG_WIDTH: u16 = 56;
const DIALOG_HEIGHT: u16 = 12;
const COMMENT_ROWS: u16 = 4;

/// Modal collecting an optional comment before a slot is booked
pub struct BookingDialog<'a> {
    day: Weekday,
    time: TimeSlot,
    comment: &'a TextInputState,
    hints: &'a [KeyHint],
}

impl<'a> BookingDialog<'a> {
    pub fn new(day: Weekday, time: TimeSlot, comment: &'a TextInputState) -> Self {
        Self {
            day,
            time,
            comment,
            hints: &[],
        }
    }

    pub fn hints(mut self, hints: &'a [KeyHint]) -> Self {
        self.hints = hints;
        self
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let inner = DialogFrame::new("Book Time Slot", DIALOG_WIDTH, DIALOG_HEIGHT).render(area, buf);

        let [slot, _, comment, _, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(COMMENT_ROWS + 2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(format!(" {} at {}", self.day, self.time))
            .style(Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD))
            .render(slot, buf);

        let block = Block::default()
            .title(" Comment ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT_PRIMARY));
        let comment_inner = block.inner(comment);
        block.render(comment, buf);
        self.comment.render_with_placeholder(
            comment_inner,
            buf,
            Style::default().fg(TEXT_PRIMARY),
            "Optional",
            Style::default().fg(TEXT_FAINT),
            true,
        );

        InstructionBar::new(self.hints).render(hints, buf);
    }
}
