//! App and store fixtures

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use slotbook::data::{AppStateStore, Database, MemoryStore, SharedStore};
use slotbook::{App, Config};
use tempfile::TempDir;

/// A SQLite-backed store in a throwaway directory.
///
/// The directory is removed when the fixture drops.
pub struct SqliteFixture {
    pub dir: TempDir,
    pub store: SharedStore,
}

impl SqliteFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = open_store(&dir);
        Self { dir, store }
    }

    /// Open a second connection to the same database file
    pub fn reopen(&self) -> SharedStore {
        open_store(&self.dir)
    }
}

fn open_store(dir: &TempDir) -> SharedStore {
    let db = Database::open(dir.path().join("slotbook.db")).expect("Failed to open database");
    Arc::new(AppStateStore::new(db.connection()))
}

/// App over a fresh in-memory store with default config
pub fn memory_app() -> App {
    App::new(Config::default(), MemoryStore::shared())
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

pub fn ctrl(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}
