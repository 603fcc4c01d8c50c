//! Key-driven scenarios across the three screens and the dialog

use crossterm::event::KeyCode;
use slotbook::config::KeyContext;
use slotbook::data::{ProfileField, TimeSlot, Weekday};
use slotbook::ui::{Screen, PROFILE_SAVED_NOTICE};

use super::common::fixtures::{ctrl, memory_app, press, type_text};

fn move_to(app: &mut slotbook::App, day: Weekday, hour: u8) {
    // Start from the top-left corner
    for _ in 0..Weekday::ALL.len() {
        press(app, KeyCode::Left);
    }
    for _ in 0..TimeSlot::COUNT {
        press(app, KeyCode::Up);
    }
    for _ in 0..day.index() {
        press(app, KeyCode::Char('l'));
    }
    for _ in 0..(hour - TimeSlot::FIRST_HOUR) {
        press(app, KeyCode::Char('j'));
    }
}

#[test]
fn test_first_run_defaults() {
    let app = memory_app();
    assert_eq!(app.navigator().screen(), Screen::Calendar);
    assert!(!app.navigator().is_dialog_open());
    assert!(app.repository().is_empty());
    for field in ProfileField::ALL {
        assert_eq!(app.profile().get(field), "");
    }
}

#[test]
fn test_book_wednesday_morning_then_reopen_refused() {
    let mut app = memory_app();
    move_to(&mut app, Weekday::Wednesday, 10);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.key_context(), KeyContext::Dialog);
    type_text(&mut app, "bring laptop");
    press(&mut app, KeyCode::Enter);

    let bookings = app.repository().list();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].day, Weekday::Wednesday);
    assert_eq!(bookings[0].time, TimeSlot::new(10).unwrap());
    assert_eq!(bookings[0].comment, "bring laptop");

    press(&mut app, KeyCode::Char(' '));
    assert!(!app.navigator().is_dialog_open());
    assert_eq!(app.repository().len(), 1);
}

#[test]
fn test_cancelled_dialog_books_nothing() {
    let mut app = memory_app();
    move_to(&mut app, Weekday::Friday, 22);
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "late one");
    press(&mut app, KeyCode::Esc);

    assert!(app.repository().is_empty());
    assert!(!app.navigator().is_dialog_open());

    // The next dialog starts with an empty comment
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.repository().list()[0].comment, "");
}

#[test]
fn test_comment_editing_keys() {
    let mut app = memory_app();
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "bring the laptop");
    ctrl(&mut app, 'w');
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Home);
    type_text(&mut app, "please ");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.repository().list()[0].comment, "please bring the");
}

#[test]
fn test_cancel_then_rebook_slot() {
    let mut app = memory_app();
    move_to(&mut app, Weekday::Tuesday, 13);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::F(2));
    press(&mut app, KeyCode::Delete);
    assert!(app.repository().is_empty());

    // Unknown selection on an empty list is a no-op
    press(&mut app, KeyCode::Char('x'));
    assert!(app.repository().is_empty());

    press(&mut app, KeyCode::F(1));
    press(&mut app, KeyCode::Enter);
    assert!(app.navigator().is_dialog_open());
}

#[test]
fn test_screen_cycling() {
    let mut app = memory_app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.navigator().screen(), Screen::Bookings);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.navigator().screen(), Screen::Profile);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.navigator().screen(), Screen::Calendar);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.navigator().screen(), Screen::Profile);
}

#[test]
fn test_profile_fields_are_independent() {
    let mut app = memory_app();
    press(&mut app, KeyCode::F(3));

    type_text(&mut app, "Grace");
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "grace@example.com");
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "555-0199");

    assert_eq!(app.profile().get(ProfileField::Name), "Grace");
    assert_eq!(app.profile().get(ProfileField::Email), "grace@example.com");
    assert_eq!(app.profile().get(ProfileField::Phone), "555-0199");
    assert_eq!(app.profile().get(ProfileField::Preferences), "");

    // Clearing one field leaves the others alone
    press(&mut app, KeyCode::Up);
    ctrl(&mut app, 'u');
    assert_eq!(app.profile().get(ProfileField::Email), "");
    assert_eq!(app.profile().get(ProfileField::Name), "Grace");
}

#[test]
fn test_save_acknowledgement_round_trip() {
    let mut app = memory_app();
    press(&mut app, KeyCode::F(3));
    type_text(&mut app, "Grace");
    ctrl(&mut app, 's');

    assert_eq!(app.state().notice.as_deref(), Some(PROFILE_SAVED_NOTICE));
    press(&mut app, KeyCode::Esc);
    assert!(app.state().notice.is_none());
    assert_eq!(app.profile().get(ProfileField::Name), "Grace");
}
