use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::key_hints::{key_hint_spans, HintStyle, KeyHint};
use super::theme::{ACCENT_ERROR, ACCENT_SUCCESS, FOOTER_BG, KEY_HINT_BG};
use crate::config::{KeyContext, KeybindingConfig};
use crate::ui::action::Action;

/// Outcome of the last action, shown at the right of the footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

impl StatusMessage {
    pub fn text(&self) -> &str {
        match self {
            StatusMessage::Info(text) | StatusMessage::Error(text) => text,
        }
    }
}

/// Footer with the current context's key hints and the last status
pub struct GlobalFooter<'a> {
    hints: Vec<KeyHint>,
    status: Option<&'a StatusMessage>,
}

impl<'a> GlobalFooter<'a> {
    pub fn for_context(context: KeyContext, bindings: &KeybindingConfig) -> Self {
        Self {
            hints: Self::hints_for(context, bindings),
            status: None,
        }
    }

    pub fn status(mut self, status: Option<&'a StatusMessage>) -> Self {
        self.status = status;
        self
    }

    /// Hints advertised in `context`, labelled with the keys bound there
    pub fn hints_for(context: KeyContext, bindings: &KeybindingConfig) -> Vec<KeyHint> {
        let movement = match context {
            KeyContext::Calendar => KeyHint::bound(
                bindings,
                context,
                &[
                    Action::MoveLeft,
                    Action::MoveDown,
                    Action::MoveUp,
                    Action::MoveRight,
                ],
                "move",
            ),
            KeyContext::Bookings => {
                KeyHint::bound(bindings, context, &[Action::MoveDown, Action::MoveUp], "select")
            }
            KeyContext::Profile => {
                KeyHint::bound(bindings, context, &[Action::PrevField, Action::NextField], "field")
            }
            _ => None,
        };

        let actions: &[(Action, &'static str)] = match context {
            KeyContext::Calendar => &[
                (Action::OpenDialog, "book"),
                (Action::NextScreen, "screens"),
                (Action::Quit, "quit"),
            ],
            KeyContext::Bookings => &[
                (Action::CancelBooking, "cancel booking"),
                (Action::NextScreen, "screens"),
                (Action::Quit, "quit"),
            ],
            KeyContext::Profile => &[
                (Action::SaveProfile, "save"),
                (Action::NextScreen, "screens"),
                (Action::Quit, "quit"),
            ],
            KeyContext::Dialog => &[(Action::ConfirmBooking, "book"), (Action::CancelDialog, "cancel")],
            KeyContext::Notice => &[(Action::DismissNotice, "dismiss")],
            KeyContext::Global => &[(Action::Quit, "quit")],
        };

        movement
            .into_iter()
            .chain(KeyHint::collect(bindings, context, actions))
            .collect()
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let style = HintStyle::Footer {
            key_bg: KEY_HINT_BG,
            bar_bg: FOOTER_BG,
        };
        let status_width = self
            .status
            .map(|s| (s.text().chars().count() as u16 + 2).min(area.width / 2))
            .unwrap_or(0);
        let [hints, status] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(status_width)]).areas(area);

        let mut spans = vec![Span::raw(" ")];
        spans.extend(key_hint_spans(&self.hints, style));
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(FOOTER_BG))
            .render(hints, buf);

        if let Some(message) = self.status {
            let color = match message {
                StatusMessage::Info(_) => ACCENT_SUCCESS,
                StatusMessage::Error(_) => ACCENT_ERROR,
            };
            Paragraph::new(format!("{} ", message.text()))
                .style(Style::default().fg(color).bg(FOOTER_BG))
                .alignment(Alignment::Right)
                .render(status, buf);
        }
    }
}
