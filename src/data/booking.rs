//! Booking repository
//!
//! Holds the ordered booking list in memory and writes the whole list
//! through to the persistent store under [`BOOKINGS_KEY`] on every change.
//! Stored entries that no longer parse (a day or hour off the grid) are kept
//! aside and written back untouched, so a single bad entry never costs the
//! readable ones.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::models::{Booking, TimeSlot, Weekday};
use super::store::{load_json_or_default, save_json, SharedStore, StoreError};

/// Store key holding the JSON array of bookings
pub const BOOKINGS_KEY: &str = "bookings";

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("{day} at {time} is already booked")]
    SlotTaken { day: Weekday, time: TimeSlot },
    #[error("No booking id is left to assign")]
    IdsExhausted,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Ordered bookings mirrored to the persistent store
pub struct BookingRepository {
    store: SharedStore,
    bookings: Vec<Booking>,
    /// Stored entries that did not parse, preserved verbatim
    unreadable: Vec<Value>,
    enforce_unique_slots: bool,
}

impl BookingRepository {
    /// Load bookings from the store. A missing or non-array value yields an
    /// empty list; entries that fail to parse are skipped but retained.
    pub fn load(store: SharedStore) -> Self {
        let entries: Vec<Value> = load_json_or_default(store.as_ref(), BOOKINGS_KEY);

        let mut bookings = Vec::with_capacity(entries.len());
        let mut unreadable = Vec::new();
        for entry in entries {
            match Booking::deserialize(&entry) {
                Ok(booking) => bookings.push(booking),
                Err(e) => {
                    tracing::warn!(%entry, error = %e, "Skipping unreadable booking");
                    unreadable.push(entry);
                }
            }
        }

        tracing::debug!(
            count = bookings.len(),
            skipped = unreadable.len(),
            "Loaded bookings"
        );
        Self {
            store,
            bookings,
            unreadable,
            enforce_unique_slots: true,
        }
    }

    /// Toggle the check-on-write for already booked slots
    pub fn with_unique_slots(mut self, enforce: bool) -> Self {
        self.enforce_unique_slots = enforce;
        self
    }

    /// All bookings in insertion order
    pub fn list(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn is_booked(&self, day: Weekday, time: TimeSlot) -> bool {
        self.booking_at(day, time).is_some()
    }

    pub fn booking_at(&self, day: Weekday, time: TimeSlot) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.occupies(day, time))
    }

    pub fn find(&self, id: i64) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Book a slot and persist the full list.
    ///
    /// Nothing changes in memory when the slot is taken or the write fails.
    pub fn create(
        &mut self,
        day: Weekday,
        time: TimeSlot,
        comment: impl Into<String>,
    ) -> Result<Booking, BookingError> {
        if self.enforce_unique_slots && self.is_booked(day, time) {
            tracing::warn!(%day, %time, "Refusing to book an occupied slot");
            return Err(BookingError::SlotTaken { day, time });
        }

        let booking = Booking {
            id: self.next_id()?,
            day,
            time,
            comment: comment.into(),
        };

        let mut next = self.bookings.clone();
        next.push(booking.clone());
        self.persist(&next)?;
        self.bookings = next;

        tracing::info!(id = booking.id, %day, %time, "Booking created");
        Ok(booking)
    }

    /// Remove the booking with `id`. An unknown id is a no-op.
    pub fn remove(&mut self, id: i64) -> Result<Option<Booking>, BookingError> {
        let Some(index) = self.bookings.iter().position(|b| b.id == id) else {
            tracing::debug!(id, "No booking to remove");
            return Ok(None);
        };

        let mut next = self.bookings.clone();
        let removed = next.remove(index);
        self.persist(&next)?;
        self.bookings = next;

        tracing::info!(id, day = %removed.day, time = %removed.time, "Booking removed");
        Ok(Some(removed))
    }

    /// Number of stored entries that could not be read
    pub fn unreadable_count(&self) -> usize {
        self.unreadable.len()
    }

    /// Write `bookings` followed by the preserved unreadable entries
    fn persist(&self, bookings: &[Booking]) -> Result<(), StoreError> {
        let mut entries = bookings
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        entries.extend(self.unreadable.iter().cloned());
        save_json(self.store.as_ref(), BOOKINGS_KEY, &entries)
    }

    /// Millisecond timestamp, bumped past the largest existing id so ids
    /// stay unique within one millisecond.
    ///
    /// When the largest id is `i64::MAX` the first free id from the clock
    /// onwards is used instead.
    fn next_id(&self) -> Result<i64, BookingError> {
        let now = chrono::Utc::now().timestamp_millis();
        let Some(max) = self.bookings.iter().map(|b| b.id).max() else {
            return Ok(now);
        };
        if max < now {
            return Ok(now);
        }
        if let Some(id) = max.checked_add(1) {
            return Ok(id);
        }

        tracing::warn!("Largest booking id is i64::MAX, reusing a free id");
        (now..i64::MAX)
            .find(|id| self.find(*id).is_none())
            .ok_or(BookingError::IdsExhausted)
    }
}

impl std::fmt::Debug for BookingRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookingRepository")
            .field("bookings", &self.bookings)
            .field("unreadable", &self.unreadable.len())
            .field("enforce_unique_slots", &self.enforce_unique_slots)
            .finish_non_exhaustive()
    }
}
