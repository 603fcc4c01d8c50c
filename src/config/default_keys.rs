//! Default keybindings
//!
//! Used when the config file has no `[keys]` section; user bindings are
//! merged on top of these.

use std::collections::HashMap;

use super::keys::{KeyCombo, KeyContext, KeybindingConfig};
use crate::ui::action::Action;

/// Helper to insert a keybinding
fn bind(map: &mut HashMap<KeyCombo, Action>, key: &str, action: Action) {
    if let Ok(combo) = key.parse() {
        map.insert(combo, action);
    }
}

/// Create the default keybindings configuration
pub fn default_keybindings() -> KeybindingConfig {
    let mut config = KeybindingConfig::new();

    // ========== Global Keybindings ==========

    bind(&mut config.global, "C-q", Action::Quit);
    bind(&mut config.global, "<F1>", Action::ShowCalendar);
    bind(&mut config.global, "<F2>", Action::ShowBookings);
    bind(&mut config.global, "<F3>", Action::ShowProfile);
    bind(&mut config.global, "<Tab>", Action::NextScreen);
    bind(&mut config.global, "<BackTab>", Action::PrevScreen);

    // ========== Calendar ==========

    let calendar = config.context.entry(KeyContext::Calendar).or_default();
    bind(calendar, "<Up>", Action::MoveUp);
    bind(calendar, "<Down>", Action::MoveDown);
    bind(calendar, "<Left>", Action::MoveLeft);
    bind(calendar, "<Right>", Action::MoveRight);
    bind(calendar, "k", Action::MoveUp);
    bind(calendar, "j", Action::MoveDown);
    bind(calendar, "h", Action::MoveLeft);
    bind(calendar, "l", Action::MoveRight);
    bind(calendar, "<CR>", Action::OpenDialog);
    bind(calendar, "<Space>", Action::OpenDialog);
    // Plain q only where no text input can have focus
    bind(calendar, "q", Action::Quit);

    // ========== Bookings List ==========

    let bookings = config.context.entry(KeyContext::Bookings).or_default();
    bind(bookings, "<Up>", Action::MoveUp);
    bind(bookings, "<Down>", Action::MoveDown);
    bind(bookings, "k", Action::MoveUp);
    bind(bookings, "j", Action::MoveDown);
    bind(bookings, "d", Action::CancelBooking);
    bind(bookings, "x", Action::CancelBooking);
    bind(bookings, "<Del>", Action::CancelBooking);
    bind(bookings, "q", Action::Quit);

    // ========== Profile Form ==========
    // Printable keys type into the focused field, so no letter bindings here

    let profile = config.context.entry(KeyContext::Profile).or_default();
    bind(profile, "<Up>", Action::PrevField);
    bind(profile, "<Down>", Action::NextField);
    bind(profile, "<CR>", Action::NextField);
    bind(profile, "C-s", Action::SaveProfile);
    bind(profile, "C-j", Action::InsertNewline);
    bind_text_editing(profile);

    // ========== Booking Dialog ==========

    let dialog = config.context.entry(KeyContext::Dialog).or_default();
    bind(dialog, "<CR>", Action::ConfirmBooking);
    bind(dialog, "<Esc>", Action::CancelDialog);
    bind(dialog, "C-j", Action::InsertNewline);
    bind_text_editing(dialog);

    // ========== Notice ==========

    let notice = config.context.entry(KeyContext::Notice).or_default();
    bind(notice, "<CR>", Action::DismissNotice);
    bind(notice, "<Esc>", Action::DismissNotice);
    bind(notice, "<Space>", Action::DismissNotice);

    config
}

/// Readline-style editing shared by every context with a text input
fn bind_text_editing(map: &mut HashMap<KeyCombo, Action>) {
    bind(map, "<BS>", Action::Backspace);
    bind(map, "C-h", Action::Backspace);
    bind(map, "<Del>", Action::Delete);
    bind(map, "<Left>", Action::MoveCursorLeft);
    bind(map, "<Right>", Action::MoveCursorRight);
    bind(map, "<Home>", Action::MoveCursorStart);
    bind(map, "<End>", Action::MoveCursorEnd);
    bind(map, "C-a", Action::MoveCursorStart);
    bind(map, "C-e", Action::MoveCursorEnd);
    bind(map, "C-u", Action::DeleteToStart);
    bind(map, "C-k", Action::DeleteToEnd);
    bind(map, "C-w", Action::DeleteWordBack);
    bind(map, "M-<BS>", Action::DeleteWordBack);
}
