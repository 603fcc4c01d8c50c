use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::text_input::TextInputState;
use super::theme::{ACCENT_PRIMARY, KEY_HINT_BG, TEXT_FAINT, TEXT_MUTED, TEXT_PRIMARY};
use crate::data::ProfileField;

/// Rows of text shown for the multi-line preferences field
const PREFERENCES_ROWS: u16 = 4;

/// The profile form: one bordered input per field and a save button
pub struct ProfileForm<'a> {
    inputs: &'a [TextInputState; 4],
    focused: ProfileField,
    save_key: &'a str,
    active: bool,
}

impl<'a> ProfileForm<'a> {
    pub fn new(inputs: &'a [TextInputState; 4], focused: ProfileField) -> Self {
        Self {
            inputs,
            focused,
            save_key: "C-s",
            active: true,
        }
    }

    pub fn save_key(mut self, key: &'a str) -> Self {
        self.save_key = key;
        self
    }

    /// Whether the form has keyboard focus (false under a modal)
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" User Profile ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(TEXT_FAINT));
        let inner = block.inner(area);
        block.render(area, buf);

        let [name, email, phone, preferences, helper, save] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(PREFERENCES_ROWS + 2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let field_areas = [name, email, phone, preferences];
        for (field, field_area) in ProfileField::ALL.into_iter().zip(field_areas) {
            self.render_field(field, field_area, buf);
        }

        Paragraph::new("Enter any special requirements or preferences for your bookings")
            .style(Style::default().fg(TEXT_MUTED))
            .render(helper, buf);

        Paragraph::new(Line::from(vec![
            Span::styled(
                " Save Changes ",
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .bg(KEY_HINT_BG)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" ({})", self.save_key), Style::default().fg(TEXT_FAINT)),
        ]))
        .render(save, buf);
    }

    fn render_field(&self, field: ProfileField, area: Rect, buf: &mut Buffer) {
        let focused = self.active && field == self.focused;
        let border_color = if focused { ACCENT_PRIMARY } else { TEXT_FAINT };

        let block = Block::default()
            .title(format!(" {} ", field.label()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        self.inputs[field as usize].render(
            inner,
            buf,
            Style::default().fg(TEXT_PRIMARY),
            focused,
        );
    }
}
