//! Weekly slot grid: five weekday columns by fifteen hourly rows

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::theme::{
    ACCENT_PRIMARY, SLOT_AVAILABLE_BG, SLOT_BOOKED_BG, TEXT_FAINT, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::data::{BookingRepository, TimeSlot, Weekday};

/// Width of the leading time column
pub const TIME_COLUMN_WIDTH: u16 = 7;

/// Labels shorter than "Available" are used below this column width
const FULL_LABEL_WIDTH: u16 = 10;

pub struct CalendarGrid<'a> {
    repo: &'a BookingRepository,
    cursor: (Weekday, TimeSlot),
    focused: bool,
}

impl<'a> CalendarGrid<'a> {
    pub fn new(repo: &'a BookingRepository, cursor: (Weekday, TimeSlot)) -> Self {
        Self {
            repo,
            cursor,
            focused: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Calendar Booking ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(TEXT_FAINT));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width <= TIME_COLUMN_WIDTH {
            return;
        }

        let col_width = (inner.width - TIME_COLUMN_WIDTH) / Weekday::ALL.len() as u16;
        let full_labels = col_width >= FULL_LABEL_WIDTH;

        // Header row
        let header_style = Style::default().fg(TEXT_MUTED);
        cell(inner.x, inner.y, TIME_COLUMN_WIDTH, "Time", header_style, buf);
        for day in Weekday::ALL {
            let label = if full_labels { day.as_str() } else { &day.as_str()[..3] };
            cell(
                day_x(inner, day, col_width),
                inner.y,
                col_width,
                label,
                header_style.add_modifier(Modifier::BOLD),
                buf,
            );
        }

        // Keep the cursor row visible on short terminals
        let visible = (inner.height - 1) as usize;
        let first = (self.cursor.1.index() + 1).saturating_sub(visible);

        for (row, time) in TimeSlot::ALL.iter().skip(first).take(visible).enumerate() {
            let y = inner.y + 1 + row as u16;
            cell(
                inner.x,
                y,
                TIME_COLUMN_WIDTH,
                &time.to_string(),
                Style::default().fg(TEXT_MUTED),
                buf,
            );

            for day in Weekday::ALL {
                let booked = self.repo.is_booked(day, *time);
                let label = match (booked, full_labels) {
                    (true, _) => "Booked",
                    (false, true) => "Available",
                    (false, false) => "Free",
                };
                let mut style = Style::default().fg(TEXT_PRIMARY).bg(if booked {
                    SLOT_BOOKED_BG
                } else {
                    SLOT_AVAILABLE_BG
                });
                if self.focused && self.cursor == (day, *time) {
                    style = style
                        .fg(ACCENT_PRIMARY)
                        .add_modifier(Modifier::REVERSED | Modifier::BOLD);
                }
                // One blank column between cells
                let x = day_x(inner, day, col_width);
                cell(x, y, col_width.saturating_sub(1), label, style, buf);
            }
        }
    }
}

fn day_x(inner: Rect, day: Weekday, col_width: u16) -> u16 {
    inner.x + TIME_COLUMN_WIDTH + day.index() as u16 * col_width
}

fn cell(x: u16, y: u16, width: u16, text: &str, style: Style, buf: &mut Buffer) {
    let area = Rect::new(x, y, width, 1);
    Paragraph::new(Line::from(text.to_string()))
        .style(style)
        .alignment(Alignment::Center)
        .render(area, buf);
}
