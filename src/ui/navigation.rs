//! Screen and dialog state machine
//!
//! The widget has three screens and one modal booking dialog. The screen and
//! the dialog are independent: switching screens leaves an open dialog open.

use crate::data::{Booking, BookingError, BookingRepository, TimeSlot, Weekday};

/// Top-level screens, in navigation bar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Calendar,
    Bookings,
    Profile,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Calendar, Screen::Bookings, Screen::Profile];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Calendar => "Calendar",
            Screen::Bookings => "My Bookings",
            Screen::Profile => "Profile",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Booking dialog state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open {
        day: Weekday,
        time: TimeSlot,
        draft_comment: String,
    },
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        matches!(self, DialogState::Open { .. })
    }
}

/// Which screen is active and whether the booking dialog is open
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    screen: Screen,
    dialog: DialogState,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_open()
    }

    pub fn select_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::debug!(from = ?self.screen, to = ?screen, "Switching screen");
        }
        self.screen = screen;
    }

    /// Open the dialog for an unbooked slot with an empty draft.
    ///
    /// Returns false, leaving the state untouched, when the slot is taken.
    pub fn open_dialog(&mut self, day: Weekday, time: TimeSlot, repo: &BookingRepository) -> bool {
        if repo.is_booked(day, time) {
            tracing::debug!(%day, %time, "Slot already booked, dialog refused");
            return false;
        }
        tracing::debug!(%day, %time, "Opening booking dialog");
        self.dialog = DialogState::Open {
            day,
            time,
            draft_comment: String::new(),
        };
        true
    }

    /// Replace the draft comment. Ignored while the dialog is closed.
    pub fn edit_draft_comment(&mut self, text: impl Into<String>) {
        if let DialogState::Open { draft_comment, .. } = &mut self.dialog {
            *draft_comment = text.into();
        }
    }

    /// Book the dialog's slot with the draft comment and close the dialog,
    /// whatever the outcome. `None` when no dialog was open.
    pub fn confirm_booking(
        &mut self,
        repo: &mut BookingRepository,
    ) -> Option<Result<Booking, BookingError>> {
        match std::mem::take(&mut self.dialog) {
            DialogState::Open {
                day,
                time,
                draft_comment,
            } => Some(repo.create(day, time, draft_comment)),
            DialogState::Closed => None,
        }
    }

    /// Close the dialog, discarding the draft
    pub fn cancel_dialog(&mut self) {
        if self.dialog.is_open() {
            tracing::debug!("Booking dialog cancelled");
        }
        self.dialog = DialogState::Closed;
    }
}
