//! Write-through persistence against a real SQLite file

use crossterm::event::KeyCode;
use serde_json::Value;
use slotbook::data::{ProfileField, BOOKINGS_KEY, PROFILE_KEY};
use slotbook::{App, BookingRepository, Config, ProfileRecord};

use super::common::fixtures::{press, type_text, SqliteFixture};

#[test]
fn test_bookings_survive_restart() {
    let fixture = SqliteFixture::new();

    {
        let mut app = App::new(Config::default(), fixture.store.clone());
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "bring laptop");
        press(&mut app, KeyCode::Enter);
    }

    let reopened = fixture.reopen();
    let app = App::new(Config::default(), reopened.clone());
    assert_eq!(app.repository().len(), 1);
    assert_eq!(app.repository().list()[0].label(), "Wednesday at 10:00");

    // Stored layout: JSON array of {id, day, time, comment}
    let raw = reopened.get(BOOKINGS_KEY).unwrap().unwrap();
    let json: Value = serde_json::from_str(&raw).unwrap();
    let entry = &json.as_array().unwrap()[0];
    assert!(entry["id"].is_i64());
    assert_eq!(entry["day"], "Wednesday");
    assert_eq!(entry["time"], "10:00");
    assert_eq!(entry["comment"], "bring laptop");
}

#[test]
fn test_profile_survives_restart() {
    let fixture = SqliteFixture::new();

    {
        let mut app = App::new(Config::default(), fixture.store.clone());
        press(&mut app, KeyCode::F(3));
        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Up);
        type_text(&mut app, "aisle seat");
    }

    let reopened = fixture.reopen();
    let record = ProfileRecord::load(reopened.clone());
    assert_eq!(record.get(ProfileField::Name), "Ada");
    assert_eq!(record.get(ProfileField::Preferences), "aisle seat");
    assert_eq!(record.get(ProfileField::Email), "");

    let raw = reopened.get(PROFILE_KEY).unwrap().unwrap();
    let json: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Ada",
            "email": "",
            "phone": "",
            "preferences": "aisle seat"
        })
    );
}

#[test]
fn test_removal_is_persisted() {
    let fixture = SqliteFixture::new();
    let mut repo = BookingRepository::load(fixture.store.clone());
    let monday = repo
        .create("Monday".parse().unwrap(), "9:00".parse().unwrap(), "")
        .unwrap();
    repo.create("Friday".parse().unwrap(), "17:00".parse().unwrap(), "wrap-up")
        .unwrap();
    repo.remove(monday.id).unwrap();

    let reloaded = BookingRepository::load(fixture.reopen());
    assert_eq!(reloaded.list(), repo.list());
    assert!(reloaded.find(monday.id).is_none());
}

#[test]
fn test_malformed_entries_fall_back_to_defaults() {
    let fixture = SqliteFixture::new();
    fixture.store.set(BOOKINGS_KEY, "not json").unwrap();
    fixture.store.set(PROFILE_KEY, "{\"name\": 42}").unwrap();

    let app = App::new(Config::default(), fixture.reopen());
    assert!(app.repository().is_empty());
    assert_eq!(app.profile().get(ProfileField::Name), "");
}

#[test]
fn test_off_grid_entry_survives_booking_through_app() {
    let fixture = SqliteFixture::new();
    fixture
        .store
        .set(
            BOOKINGS_KEY,
            r#"[{"id":1,"day":"Monday","time":"9:00","comment":"keep"},
                {"id":2,"day":"Monday","time":"8:30","comment":"half past"}]"#,
        )
        .unwrap();

    {
        let mut app = App::new(Config::default(), fixture.reopen());
        assert_eq!(app.repository().len(), 1);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.repository().len(), 2);
    }

    let repo = BookingRepository::load(fixture.reopen());
    let labels: Vec<String> = repo.list().iter().map(|b| b.label()).collect();
    assert_eq!(labels, ["Monday at 9:00", "Monday at 8:00"]);
    assert_eq!(repo.unreadable_count(), 1);

    let raw = fixture.store.get(BOOKINGS_KEY).unwrap().unwrap();
    assert!(raw.contains("half past"));
}
