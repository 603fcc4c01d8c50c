//! Data persistence layer
//!
//! Bookings and the user profile live in memory and are written through to a
//! string key-value store (SQLite by default) on every mutation.

mod app_state;
mod booking;
mod database;
mod migrations;
mod models;
mod profile;
mod store;

pub use app_state::AppStateStore;
pub use booking::{BookingError, BookingRepository, BOOKINGS_KEY};
pub use database::{Database, DatabaseError};
pub use models::{Booking, ProfileField, SlotParseError, TimeSlot, UserProfile, Weekday};
pub use profile::{ProfileRecord, PROFILE_KEY};
pub use store::{
    load_json_or_default, save_json, MemoryStore, PersistentStore, SharedStore, StoreError,
};
