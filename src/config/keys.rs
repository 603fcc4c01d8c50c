//! Keybinding configuration types and parsing
//!
//! Keys are written in vim-style notation (e.g. `C-q`, `M-x`, `<CR>`,
//! `<BackTab>`) both in the defaults and in the user's config file.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::ui::action::Action;
use crate::ui::navigation::Screen;

/// A key combination (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a KeyCombo from a crossterm KeyEvent
    ///
    /// Normalizes to the canonical form produced by [`parse_key_notation`]:
    /// uppercase characters become lowercase + SHIFT, and BackTab drops the
    /// SHIFT that terminals report alongside it.
    pub fn from_key_event(event: &KeyEvent) -> Self {
        match event.code {
            KeyCode::Char(c) if c.is_ascii_uppercase() => Self {
                code: KeyCode::Char(c.to_ascii_lowercase()),
                modifiers: event.modifiers | KeyModifiers::SHIFT,
            },
            KeyCode::BackTab => Self {
                code: KeyCode::BackTab,
                modifiers: event.modifiers - KeyModifiers::SHIFT,
            },
            _ => Self {
                code: event.code,
                modifiers: event.modifiers,
            },
        }
    }

    /// Short label for on-screen hints (`Enter`, `C-q`, `↑`), as opposed to
    /// the config notation produced by `Display`.
    pub fn hint_label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "S-Tab".to_string(),
            KeyCode::Backspace => "Bksp".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        };

        let mut label = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            label.push_str("C-");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            label.push_str("M-");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            label.push_str("S-");
        }
        label.push_str(&key);
        label
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("C".into());
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("M".into());
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("S".into());
        }

        parts.push(match self.code {
            KeyCode::Char(' ') => "<Space>".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "<CR>".to_string(),
            KeyCode::Esc => "<Esc>".to_string(),
            KeyCode::Tab => "<Tab>".to_string(),
            KeyCode::BackTab => "<BackTab>".to_string(),
            KeyCode::Backspace => "<BS>".to_string(),
            KeyCode::Delete => "<Del>".to_string(),
            KeyCode::Up => "<Up>".to_string(),
            KeyCode::Down => "<Down>".to_string(),
            KeyCode::Left => "<Left>".to_string(),
            KeyCode::Right => "<Right>".to_string(),
            KeyCode::PageUp => "<PageUp>".to_string(),
            KeyCode::PageDown => "<PageDown>".to_string(),
            KeyCode::Home => "<Home>".to_string(),
            KeyCode::End => "<End>".to_string(),
            KeyCode::F(n) => format!("<F{}>", n),
            other => format!("{:?}", other),
        });

        write!(f, "{}", parts.join("-"))
    }
}

/// Context for keybindings (which part of the UI has focus)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyContext {
    /// Keys that work everywhere unless a context overrides them
    Global,
    /// Weekly slot grid
    Calendar,
    /// Bookings list
    Bookings,
    /// Profile form
    Profile,
    /// Booking dialog
    Dialog,
    /// Profile-saved acknowledgement
    Notice,
}

impl KeyContext {
    /// All non-global contexts
    pub fn all_contexts() -> &'static [KeyContext] {
        &[
            KeyContext::Calendar,
            KeyContext::Bookings,
            KeyContext::Profile,
            KeyContext::Dialog,
            KeyContext::Notice,
        ]
    }

    /// Resolve the active context. Modal overlays take precedence over the
    /// screen underneath them.
    pub fn from_state(screen: Screen, dialog_open: bool, notice_open: bool) -> Self {
        if notice_open {
            return KeyContext::Notice;
        }
        if dialog_open {
            return KeyContext::Dialog;
        }
        match screen {
            Screen::Calendar => KeyContext::Calendar,
            Screen::Bookings => KeyContext::Bookings,
            Screen::Profile => KeyContext::Profile,
        }
    }

    /// Whether unbound printable keys are typed into a text input
    pub fn accepts_text(&self) -> bool {
        matches!(self, KeyContext::Dialog | KeyContext::Profile)
    }

    /// Name of the config table holding this context's overrides
    pub fn table_name(&self) -> &'static str {
        match self {
            KeyContext::Global => "global",
            KeyContext::Calendar => "calendar",
            KeyContext::Bookings => "bookings",
            KeyContext::Profile => "profile",
            KeyContext::Dialog => "dialog",
            KeyContext::Notice => "notice",
        }
    }
}

/// Configuration for all keybindings
#[derive(Debug, Clone, Default)]
pub struct KeybindingConfig {
    /// Global keybindings (apply to all contexts unless overridden)
    pub global: HashMap<KeyCombo, Action>,
    /// Context-specific keybindings
    pub context: HashMap<KeyContext, HashMap<KeyCombo, Action>>,
}

impl KeybindingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an action for a key combo in a given context.
    /// Context-specific bindings win over global ones.
    pub fn get_action(&self, key: &KeyCombo, context: KeyContext) -> Option<Action> {
        self.context
            .get(&context)
            .and_then(|bindings| bindings.get(key))
            .or_else(|| self.global.get(key))
            .copied()
    }

    /// Shortest key bound to `action` in `context` (or globally), for hints
    pub fn key_for(&self, action: Action, context: KeyContext) -> Option<KeyCombo> {
        let find = |map: &HashMap<KeyCombo, Action>| {
            let mut keys: Vec<KeyCombo> = map
                .iter()
                .filter(|(_, a)| **a == action)
                .map(|(k, _)| *k)
                .collect();
            keys.sort_by_key(|k| {
                let label = k.to_string();
                (label.len(), label)
            });
            keys.into_iter().next()
        };
        self.context
            .get(&context)
            .and_then(find)
            .or_else(|| find(&self.global))
    }

    /// Merge user configuration on top of defaults
    pub fn merge(&mut self, other: KeybindingConfig) {
        self.global.extend(other.global);

        for (ctx, bindings) in other.context {
            self.context.entry(ctx).or_default().extend(bindings);
        }
    }
}

/// Error type for key parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyParseError {
    #[error("empty key notation")]
    Empty,
    #[error("no key specified")]
    NoKey,
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("invalid modifier: {0}")]
    InvalidModifier(String),
    #[error("invalid special key: {0}")]
    InvalidSpecialKey(String),
}

/// Parse a vim-style key notation string into a KeyCombo
///
/// Supported notation:
/// - `C-x` for Ctrl+x, `M-x` for Alt+x, `S-x` for Shift+x, combinable
/// - an uppercase letter (`G`) for Shift+g
/// - `<CR>`, `<Esc>`, `<Tab>`, `<BackTab>`, `<BS>`, `<Del>`, `<Space>`
/// - `<Up>`, `<Down>`, `<Left>`, `<Right>`, `<PageUp>`, `<PageDown>`,
///   `<Home>`, `<End>`
/// - `<F1>` through `<F12>`
/// - modifiers inside brackets, e.g. `<C-CR>`
pub fn parse_key_notation(s: &str) -> Result<KeyCombo, KeyParseError> {
    let s = s.trim();

    if s.is_empty() {
        return Err(KeyParseError::Empty);
    }

    if s.len() > 2 && s.starts_with('<') && s.ends_with('>') {
        return parse_bracketed(&s[1..s.len() - 1]);
    }

    // "C--" style bindings would be ambiguous, so '-' is only a separator
    let parts: Vec<&str> = s.split('-').collect();
    let (key_part, modifier_parts) = parts.split_last().ok_or(KeyParseError::Empty)?;
    let mut modifiers = parse_modifiers(modifier_parts)?;

    if key_part.is_empty() {
        return Err(KeyParseError::NoKey);
    }

    let code = if key_part.starts_with('<') && key_part.ends_with('>') && key_part.len() > 2 {
        special_key_code(&key_part[1..key_part.len() - 1])?
    } else {
        let mut chars = key_part.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                if c.is_ascii_uppercase() {
                    modifiers |= KeyModifiers::SHIFT;
                }
                KeyCode::Char(c.to_ascii_lowercase())
            }
            _ => special_key_code(key_part)
                .map_err(|_| KeyParseError::InvalidKey(key_part.to_string()))?,
        }
    };

    Ok(KeyCombo::new(code, modifiers))
}

fn parse_bracketed(inner: &str) -> Result<KeyCombo, KeyParseError> {
    let parts: Vec<&str> = inner.split('-').collect();
    let (key_name, modifier_parts) = parts.split_last().ok_or(KeyParseError::Empty)?;
    let modifiers = parse_modifiers(modifier_parts)?;
    Ok(KeyCombo::new(special_key_code(key_name)?, modifiers))
}

fn parse_modifiers(parts: &[&str]) -> Result<KeyModifiers, KeyParseError> {
    let mut modifiers = KeyModifiers::NONE;
    for part in parts {
        match *part {
            "C" => modifiers |= KeyModifiers::CONTROL,
            "M" => modifiers |= KeyModifiers::ALT,
            "S" => modifiers |= KeyModifiers::SHIFT,
            other => return Err(KeyParseError::InvalidModifier(other.to_string())),
        }
    }
    Ok(modifiers)
}

fn special_key_code(name: &str) -> Result<KeyCode, KeyParseError> {
    let code = match name.to_uppercase().as_str() {
        "CR" | "ENTER" | "RETURN" => KeyCode::Enter,
        "ESC" | "ESCAPE" => KeyCode::Esc,
        "TAB" => KeyCode::Tab,
        "BACKTAB" => KeyCode::BackTab,
        "BS" | "BACKSPACE" => KeyCode::Backspace,
        "DEL" | "DELETE" => KeyCode::Delete,
        "UP" => KeyCode::Up,
        "DOWN" => KeyCode::Down,
        "LEFT" => KeyCode::Left,
        "RIGHT" => KeyCode::Right,
        "PAGEUP" | "PGUP" => KeyCode::PageUp,
        "PAGEDOWN" | "PGDN" => KeyCode::PageDown,
        "HOME" => KeyCode::Home,
        "END" => KeyCode::End,
        "SPACE" => KeyCode::Char(' '),
        upper if upper.starts_with('F') && upper.len() > 1 => {
            let num: u8 = upper[1..]
                .parse()
                .map_err(|_| KeyParseError::InvalidSpecialKey(name.to_string()))?;
            if num == 0 || num > 12 {
                return Err(KeyParseError::InvalidSpecialKey(name.to_string()));
            }
            KeyCode::F(num)
        }
        _ => return Err(KeyParseError::InvalidSpecialKey(name.to_string())),
    };
    Ok(code)
}

impl FromStr for KeyCombo {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key_notation(s)
    }
}
