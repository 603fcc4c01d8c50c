//! Per-screen UI state that sits beside the navigation state machine

use crate::data::{ProfileField, TimeSlot, UserProfile, Weekday};
use crate::ui::components::{StatusMessage, TextInputState};

/// Cursor positions, form inputs and modal flags for the running app
#[derive(Debug, Clone)]
pub struct AppState {
    /// Focused cell of the calendar grid
    pub calendar_cursor: (Weekday, TimeSlot),
    /// Selected row of the bookings list
    pub bookings_selected: usize,
    /// Focused profile field
    pub profile_focus: ProfileField,
    /// One input per profile field, in [`ProfileField::ALL`] order
    pub profile_inputs: [TextInputState; 4],
    /// Comment being drafted in the booking dialog
    pub comment_input: TextInputState,
    /// Acknowledgement popup text, while shown
    pub notice: Option<String>,
    /// Footer status from the last action
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(profile: &UserProfile) -> Self {
        Self {
            calendar_cursor: (Weekday::Monday, TimeSlot::ALL[0]),
            bookings_selected: 0,
            profile_focus: ProfileField::Name,
            profile_inputs: ProfileField::ALL.map(|f| TextInputState::with_value(profile.get(f))),
            comment_input: TextInputState::new(),
            notice: None,
            status: None,
            should_quit: false,
        }
    }

    /// Move the calendar cursor, clamped to the grid
    pub fn move_calendar_cursor(&mut self, days: isize, slots: isize) {
        let (day, time) = self.calendar_cursor;
        let day_idx = (day.index() as isize + days).clamp(0, Weekday::ALL.len() as isize - 1);
        let slot_idx = (time.index() as isize + slots).clamp(0, TimeSlot::COUNT as isize - 1);
        if let (Some(day), Some(time)) = (
            Weekday::from_index(day_idx as usize),
            TimeSlot::from_index(slot_idx as usize),
        ) {
            self.calendar_cursor = (day, time);
        }
    }

    /// Move the bookings selection by `delta`, clamped to `len` rows
    pub fn move_bookings_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.bookings_selected = 0;
            return;
        }
        let next = (self.bookings_selected as isize + delta).clamp(0, len as isize - 1);
        self.bookings_selected = next as usize;
    }

    /// Keep the selection on a valid row after the list shrank
    pub fn clamp_bookings_selection(&mut self, len: usize) {
        self.bookings_selected = self.bookings_selected.min(len.saturating_sub(1));
    }

    pub fn focused_profile_input_mut(&mut self) -> &mut TextInputState {
        &mut self.profile_inputs[self.profile_focus as usize]
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::Info(message.into()));
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::Error(message.into()));
    }
}
