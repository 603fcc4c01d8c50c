use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{ACCENT_PRIMARY, NAV_BAR_BG, TEXT_MUTED, TEXT_PRIMARY};
use crate::ui::navigation::Screen;

/// Navigation bar for switching between the three screens
pub struct NavBar {
    active: Screen,
    /// Dimmed while a modal is open
    focused: bool,
}

impl NavBar {
    pub fn new(active: Screen) -> Self {
        Self {
            active,
            focused: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for screen in Screen::ALL {
            let is_active = screen == self.active;

            if is_active && self.focused {
                spans.push(Span::styled(" ▶ ", Style::default().fg(ACCENT_PRIMARY)));
            } else {
                spans.push(Span::raw("   "));
            }

            let style = match (is_active, self.focused) {
                (true, true) => Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
                (true, false) => Style::default().fg(TEXT_PRIMARY),
                _ => Style::default().fg(TEXT_MUTED),
            };

            spans.push(Span::styled(
                format!("[F{}] {}", screen.index() + 1, screen.title()),
                style,
            ));
            spans.push(Span::raw("  "));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(NAV_BAR_BG))
            .render(area, buf);
    }
}
