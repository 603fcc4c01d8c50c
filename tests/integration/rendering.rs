//! Rendering checks against an 80x24 TestBackend

use crossterm::event::KeyCode;
use slotbook::config::{parse_key_notation, KeyContext};
use slotbook::ui::Action;
use slotbook::{App, Config, MemoryStore};

use super::common::fixtures::{ctrl, memory_app, press, type_text};
use super::common::terminal::{buffer_contains, count_occurrences, render_app, render_app_sized, row};

#[test]
fn test_calendar_shows_full_grid() {
    let app = memory_app();
    let buffer = render_app(&app);

    assert!(buffer_contains(&buffer, "Calendar Booking"));
    assert!(buffer_contains(&buffer, "Time"));
    for day in ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"] {
        assert!(buffer_contains(&buffer, day), "missing {day}");
    }
    assert!(buffer_contains(&buffer, "8:00"));
    assert!(buffer_contains(&buffer, "22:00"));
    assert_eq!(count_occurrences(&buffer, "Available"), 75);
    assert_eq!(count_occurrences(&buffer, "Booked"), 0);
}

#[test]
fn test_booked_cell_and_status() {
    let mut app = memory_app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    let buffer = render_app(&app);
    assert_eq!(count_occurrences(&buffer, "Available"), 74);
    assert!(buffer_contains(&buffer, "Booked Monday at 8:00"));
}

#[test]
fn test_nav_bar_lists_screens() {
    let app = memory_app();
    let buffer = render_app(&app);
    let nav = row(&buffer, 0);
    assert!(nav.contains("[F1] Calendar"));
    assert!(nav.contains("[F2] My Bookings"));
    assert!(nav.contains("[F3] Profile"));
}

#[test]
fn test_empty_bookings_list() {
    let mut app = memory_app();
    press(&mut app, KeyCode::F(2));
    let buffer = render_app(&app);
    assert!(buffer_contains(&buffer, "No bookings yet"));
}

#[test]
fn test_bookings_list_cards() {
    let mut app = memory_app();
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "bring laptop");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::F(2));
    let buffer = render_app(&app);
    assert!(buffer_contains(&buffer, "Wednesday at 10:00"));
    assert!(buffer_contains(&buffer, "bring laptop"));
    assert!(buffer_contains(&buffer, "Wednesday at 11:00"));
    assert!(buffer_contains(&buffer, "No comment"));
    assert_eq!(count_occurrences(&buffer, "Cancel Booking"), 2);
    assert!(!buffer_contains(&buffer, "No bookings yet"));
}

#[test]
fn test_dialog_overlay() {
    let mut app = memory_app();
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "hello");

    let buffer = render_app(&app);
    assert!(buffer_contains(&buffer, "Book Time Slot"));
    assert!(buffer_contains(&buffer, "Monday at 8:00"));
    assert!(buffer_contains(&buffer, "Comment"));
    assert!(buffer_contains(&buffer, "hello"));
}

#[test]
fn test_profile_form_and_notice() {
    let mut app = memory_app();
    press(&mut app, KeyCode::F(3));
    type_text(&mut app, "Ada");

    let buffer = render_app(&app);
    for label in ["User Profile", "Name", "Email", "Phone", "Booking Preferences"] {
        assert!(buffer_contains(&buffer, label), "missing {label}");
    }
    assert!(buffer_contains(&buffer, "Ada"));
    assert!(buffer_contains(&buffer, "Save Changes"));

    ctrl(&mut app, 's');
    let buffer = render_app(&app);
    assert!(buffer_contains(&buffer, "Profile updated!"));
}

#[test]
fn test_short_terminal_keeps_cursor_row_visible() {
    let mut app = memory_app();
    for _ in 0..14 {
        press(&mut app, KeyCode::Down);
    }
    let buffer = render_app_sized(&app, 80, 12);
    assert!(buffer_contains(&buffer, "22:00"));
    assert!(!buffer_contains(&buffer, " 8:00"));
}

#[test]
fn test_hints_follow_user_bindings() {
    let mut config = Config::default();
    let dialog = config
        .keybindings
        .context
        .entry(KeyContext::Dialog)
        .or_default();
    dialog.retain(|_, action| *action != Action::ConfirmBooking);
    dialog.insert(parse_key_notation("C-s").unwrap(), Action::ConfirmBooking);

    let mut app = App::new(config, MemoryStore::shared());
    let buffer = render_app(&app);
    assert!(buffer_contains(&buffer, " Enter  book"));

    press(&mut app, KeyCode::Enter);
    let buffer = render_app(&app);
    assert!(buffer_contains(&buffer, "C-s Book"));
    assert!(!buffer_contains(&buffer, "Enter Book"));
    assert!(buffer_contains(&buffer, " C-s  book"));

    ctrl(&mut app, 's');
    assert_eq!(app.repository().len(), 1);
}

#[test]
fn test_notice_hint_uses_dismiss_key() {
    let mut app = memory_app();
    press(&mut app, KeyCode::F(3));
    ctrl(&mut app, 's');
    let buffer = render_app(&app);
    assert!(buffer_contains(&buffer, "Enter OK"));
    assert!(buffer_contains(&buffer, " Enter  dismiss"));
}
