//! Non-interactive subcommands run against the built binary

use std::path::Path;
use std::sync::Arc;

use assert_cmd::{cargo_bin_cmd, Command};
use predicates::prelude::*;
use slotbook::data::{AppStateStore, Database, ProfileField};
use slotbook::{BookingRepository, ProfileRecord, SharedStore};
use tempfile::TempDir;

fn slotbook(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("slotbook");
    cmd.arg("--data-dir").arg(dir.path());
    cmd
}

fn seed_store(dir: &Path) -> SharedStore {
    let db = Database::open(dir.join("slotbook.db")).expect("Failed to open database");
    Arc::new(AppStateStore::new(db.connection()))
}

#[test]
fn test_bookings_empty() {
    let dir = TempDir::new().unwrap();
    slotbook(&dir)
        .arg("bookings")
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookings yet"));

    // First run writes the default config and the log file
    assert!(dir.path().join("config.toml").exists());
    assert!(dir.path().join("logs").join("slotbook.log").exists());
}

#[test]
fn test_bookings_json_empty() {
    let dir = TempDir::new().unwrap();
    slotbook(&dir)
        .args(["bookings", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn test_bookings_lists_seeded_entries() {
    let dir = TempDir::new().unwrap();
    let booking = {
        let mut repo = BookingRepository::load(seed_store(dir.path()));
        repo.create("Thursday".parse().unwrap(), "14:00".parse().unwrap(), "two\nlines")
            .unwrap()
    };

    slotbook(&dir)
        .arg("bookings")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "{}  Thursday at 14:00  two lines",
            booking.id
        )));

    slotbook(&dir)
        .args(["bookings", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"time\": \"14:00\""));
}

#[test]
fn test_bookings_warns_about_unreadable_entries() {
    let dir = TempDir::new().unwrap();
    seed_store(dir.path())
        .set(
            "bookings",
            r#"[{"id":7,"day":"Friday","time":"10:00","comment":""},{"id":8,"day":"Friday","time":"7:00"}]"#,
        )
        .unwrap();

    slotbook(&dir)
        .arg("bookings")
        .assert()
        .success()
        .stdout(predicate::str::contains("7  Friday at 10:00  No comment"))
        .stderr(predicate::str::contains("1 stored booking(s) could not be read"));
}

#[test]
fn test_cancel_by_id() {
    let dir = TempDir::new().unwrap();
    let id = {
        let mut repo = BookingRepository::load(seed_store(dir.path()));
        repo.create("Monday".parse().unwrap(), "8:00".parse().unwrap(), "")
            .unwrap()
            .id
    };

    slotbook(&dir)
        .args(["cancel", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled Monday at 8:00"));

    let repo = BookingRepository::load(seed_store(dir.path()));
    assert!(repo.is_empty());
}

#[test]
fn test_cancel_unknown_id() {
    let dir = TempDir::new().unwrap();
    slotbook(&dir)
        .args(["cancel", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No booking with id 42"));
}

#[test]
fn test_profile_output() {
    let dir = TempDir::new().unwrap();
    {
        let mut record = ProfileRecord::load(seed_store(dir.path()));
        record.update(ProfileField::Name, "Ada").unwrap();
    }

    slotbook(&dir)
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("name: Ada"))
        .stdout(predicate::str::contains("preferences: "));

    slotbook(&dir)
        .args(["profile", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Ada\""));
}

#[test]
fn test_ephemeral_ignores_database() {
    let dir = TempDir::new().unwrap();
    {
        let mut repo = BookingRepository::load(seed_store(dir.path()));
        repo.create("Friday".parse().unwrap(), "9:00".parse().unwrap(), "")
            .unwrap();
    }

    slotbook(&dir)
        .args(["--ephemeral", "bookings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookings yet"));
}

#[test]
fn test_ephemeral_writes_no_data_files() {
    let dir = TempDir::new().unwrap();
    slotbook(&dir)
        .args(["--ephemeral", "profile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name: "));

    assert!(!dir.path().join("config.toml").exists());
    assert!(!dir.path().join("slotbook.db").exists());
}

#[test]
fn test_unknown_subcommand_fails() {
    let dir = TempDir::new().unwrap();
    slotbook(&dir)
        .arg("reschedule")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
