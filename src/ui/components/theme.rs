//! Shared UI color constants.
//!
//! The palette is fixed; there is no runtime theme switching.

use ratatui::style::Color;

pub const ACCENT_PRIMARY: Color = Color::Rgb(97, 175, 239);
pub const ACCENT_SUCCESS: Color = Color::Rgb(152, 195, 121);
pub const ACCENT_ERROR: Color = Color::Rgb(224, 108, 117);

pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);
pub const TEXT_SECONDARY: Color = Color::Rgb(180, 180, 180);
pub const TEXT_MUTED: Color = Color::Rgb(130, 130, 130);
pub const TEXT_FAINT: Color = Color::Rgb(90, 90, 90);

pub const SLOT_AVAILABLE_BG: Color = Color::Rgb(66, 66, 66);
pub const SLOT_BOOKED_BG: Color = Color::Rgb(26, 35, 126);

pub const SELECTED_BG: Color = Color::Rgb(40, 60, 80);
pub const NAV_BAR_BG: Color = Color::Rgb(20, 20, 20);
pub const FOOTER_BG: Color = Color::Rgb(25, 25, 25);
pub const KEY_HINT_BG: Color = Color::Rgb(60, 60, 60);
