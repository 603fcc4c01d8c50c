//! Key hints derived from the active keybindings.
//!
//! Hints are looked up through [`KeybindingConfig::key_for`] so a rebound
//! key shows up everywhere it is advertised.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{ACCENT_PRIMARY, TEXT_FAINT, TEXT_MUTED, TEXT_SECONDARY};
use crate::config::{KeyContext, KeybindingConfig};
use crate::ui::action::Action;

/// One `key action` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: String,
    pub label: &'static str,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, label: &'static str) -> Self {
        Self {
            key: key.into(),
            label,
        }
    }

    /// Hint covering `actions`, keyed by whatever is bound to each of them.
    ///
    /// Single-character keys are run together (`hjkl`), longer ones are
    /// joined with `/`. `None` when any of the actions is unbound.
    pub fn bound(
        bindings: &KeybindingConfig,
        context: KeyContext,
        actions: &[Action],
        label: &'static str,
    ) -> Option<Self> {
        let keys = actions
            .iter()
            .map(|action| bindings.key_for(*action, context).map(|k| k.hint_label()))
            .collect::<Option<Vec<_>>>()?;
        let separator = if keys.iter().all(|k| k.chars().count() == 1) {
            ""
        } else {
            "/"
        };
        Some(Self::new(keys.join(separator), label))
    }

    /// Hints for single actions, skipping any that are unbound
    pub fn collect(
        bindings: &KeybindingConfig,
        context: KeyContext,
        entries: &[(Action, &'static str)],
    ) -> Vec<Self> {
        entries
            .iter()
            .filter_map(|&(action, label)| Self::bound(bindings, context, &[action], label))
            .collect()
    }
}

/// Where a hint bar is drawn
#[derive(Debug, Clone, Copy)]
pub enum HintStyle {
    /// Centered, `│`-separated, inside a dialog
    Dialog,
    /// Left-aligned with boxed keys on the footer row
    Footer { key_bg: Color, bar_bg: Color },
}

impl HintStyle {
    fn key_style(&self) -> Style {
        match self {
            HintStyle::Dialog => Style::default().fg(ACCENT_PRIMARY),
            HintStyle::Footer { key_bg, .. } => Style::default().fg(TEXT_SECONDARY).bg(*key_bg),
        }
    }

    fn label_style(&self) -> Style {
        match self {
            HintStyle::Dialog => Style::default().fg(TEXT_SECONDARY),
            HintStyle::Footer { .. } => Style::default().fg(TEXT_MUTED),
        }
    }

    fn separator(&self) -> Span<'static> {
        match self {
            HintStyle::Dialog => Span::styled(" │ ", Style::default().fg(TEXT_FAINT)),
            HintStyle::Footer { .. } => Span::raw("  "),
        }
    }

    fn key_text(&self, key: &str) -> String {
        match self {
            HintStyle::Dialog => key.to_string(),
            HintStyle::Footer { .. } => format!(" {key} "),
        }
    }
}

/// Spans for a hint list, without rendering them
pub fn key_hint_spans(hints: &[KeyHint], style: HintStyle) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(style.separator());
        }
        spans.push(Span::styled(style.key_text(&hint.key), style.key_style()));
        spans.push(Span::styled(format!(" {}", hint.label), style.label_style()));
    }
    spans
}

pub fn render_key_hints(area: Rect, buf: &mut Buffer, hints: &[KeyHint], style: HintStyle) {
    let line = Line::from(key_hint_spans(hints, style));
    let paragraph = match style {
        HintStyle::Dialog => Paragraph::new(line).alignment(Alignment::Center),
        HintStyle::Footer { bar_bg, .. } => Paragraph::new(line).style(Style::default().bg(bar_bg)),
    };
    paragraph.render(area, buf);
}
