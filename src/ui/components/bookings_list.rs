use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
    },
};

use super::theme::{ACCENT_ERROR, SELECTED_BG, TEXT_FAINT, TEXT_MUTED, TEXT_PRIMARY};
use crate::data::Booking;

/// Flat list of bookings, one card per booking
pub struct BookingsList<'a> {
    bookings: &'a [Booking],
    selected: usize,
    cancel_key: &'a str,
}

impl<'a> BookingsList<'a> {
    pub fn new(bookings: &'a [Booking], selected: usize) -> Self {
        Self {
            bookings,
            selected,
            cancel_key: "d",
        }
    }

    /// Key shown next to each card's cancel hint
    pub fn cancel_key(mut self, key: &'a str) -> Self {
        self.cancel_key = key;
        self
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" My Bookings ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(TEXT_FAINT));
        let inner = block.inner(area);
        block.render(area, buf);

        if self.bookings.is_empty() {
            Paragraph::new("No bookings yet")
                .style(Style::default().fg(TEXT_MUTED))
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .bookings
            .iter()
            .map(|b| booking_item(b, self.cancel_key))
            .collect();
        let list = List::new(items)
            .highlight_style(Style::default().bg(SELECTED_BG))
            .highlight_symbol("▶ ");

        let mut state =
            ListState::default().with_selected(Some(self.selected.min(self.bookings.len() - 1)));
        StatefulWidget::render(list, inner, buf, &mut state);
    }
}

fn booking_item(booking: &Booking, cancel_key: &str) -> ListItem<'static> {
    let mut lines = vec![Line::from(Span::styled(
        booking.label(),
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    ))];

    let comment_style = if booking.comment.is_empty() {
        Style::default()
            .fg(TEXT_MUTED)
            .add_modifier(Modifier::ITALIC)
    } else {
        Style::default().fg(TEXT_MUTED)
    };
    lines.extend(
        booking
            .comment_or_placeholder()
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), comment_style))),
    );

    lines.push(Line::from(vec![
        Span::styled("Cancel Booking", Style::default().fg(ACCENT_ERROR)),
        Span::styled(format!(" ({cancel_key})"), Style::default().fg(TEXT_FAINT)),
    ]));
    lines.push(Line::default());

    ListItem::new(lines)
}
