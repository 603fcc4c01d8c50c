//! Data models for bookings and the user profile

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a weekday or time slot label cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotParseError {
    #[error("unknown weekday: {0}")]
    Weekday(String),
    #[error("invalid time slot: {0}")]
    Time(String),
}

/// A bookable day of the working week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All bookable days, in grid column order
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    /// Column index in the grid (Monday = 0)
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|day| day.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SlotParseError::Weekday(s.to_string()))
    }
}

/// An hourly slot on the grid, 8:00 through 22:00.
///
/// Stored as `"H:00"` without zero padding (`"8:00"`, `"10:00"`); parsing
/// also accepts a padded hour (`"08:00"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(u8);

impl TimeSlot {
    pub const FIRST_HOUR: u8 = 8;
    pub const COUNT: usize = 15;

    /// All slots, in grid row order
    pub const ALL: [TimeSlot; Self::COUNT] = {
        let mut slots = [TimeSlot(Self::FIRST_HOUR); Self::COUNT];
        let mut i = 0;
        while i < Self::COUNT {
            slots[i] = TimeSlot(Self::FIRST_HOUR + i as u8);
            i += 1;
        }
        slots
    };

    /// Slot starting at `hour`, if that hour is on the grid
    pub fn new(hour: u8) -> Option<Self> {
        let last = Self::FIRST_HOUR + Self::COUNT as u8 - 1;
        (Self::FIRST_HOUR..=last).contains(&hour).then_some(Self(hour))
    }

    pub fn hour(&self) -> u8 {
        self.0
    }

    /// Row index in the grid (8:00 = 0)
    pub fn index(&self) -> usize {
        (self.0 - Self::FIRST_HOUR) as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:00", self.0)
    }
}

impl FromStr for TimeSlot {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SlotParseError::Time(s.to_string());
        let (hour, minutes) = s.trim().split_once(':').ok_or_else(invalid)?;
        if minutes != "00" || hour.is_empty() || hour.len() > 2 {
            return Err(invalid());
        }
        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        TimeSlot::new(hour).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = SlotParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// A confirmed reservation of one slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Creation time in milliseconds since the epoch; unique within the list
    pub id: i64,
    pub day: Weekday,
    pub time: TimeSlot,
    #[serde(default)]
    pub comment: String,
}

impl Booking {
    /// Human readable slot label, e.g. "Wednesday at 10:00"
    pub fn label(&self) -> String {
        format!("{} at {}", self.day, self.time)
    }

    /// The comment, or a placeholder when none was entered
    pub fn comment_or_placeholder(&self) -> &str {
        if self.comment.is_empty() {
            "No comment"
        } else {
            &self.comment
        }
    }

    pub fn occupies(&self, day: Weekday, time: TimeSlot) -> bool {
        self.day == day && self.time == time
    }
}

/// The single user profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferences: String,
}

impl UserProfile {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Preferences => &self.preferences,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Preferences => &mut self.preferences,
        };
        *slot = value.into();
    }
}

/// Editable fields of the profile form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Preferences,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Preferences,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone",
            ProfileField::Preferences => "Booking Preferences",
        }
    }

    /// Field key as used in the persisted JSON object
    pub fn key(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::Preferences => "preferences",
        }
    }

    pub fn next(&self) -> Self {
        let idx = (*self as usize + 1) % Self::ALL.len();
        Self::ALL[idx]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        let idx = (*self as usize + len - 1) % len;
        Self::ALL[idx]
    }
}
