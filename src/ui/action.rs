//! Actions that can be triggered by keybindings
//!
//! Each action represents a single, atomic operation in the UI.

use serde::{Deserialize, Serialize};

/// All mappable UI actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ========== Global Actions ==========
    /// Quit the application
    Quit,
    /// Show the calendar grid
    ShowCalendar,
    /// Show the bookings list
    ShowBookings,
    /// Show the profile form
    ShowProfile,
    /// Cycle to the next screen
    NextScreen,
    /// Cycle to the previous screen
    PrevScreen,

    // ========== Calendar / List Navigation ==========
    /// Move the cursor or selection up
    MoveUp,
    /// Move the cursor or selection down
    MoveDown,
    /// Move the calendar cursor to the previous day
    MoveLeft,
    /// Move the calendar cursor to the next day
    MoveRight,
    /// Open the booking dialog for the focused slot
    OpenDialog,

    // ========== Booking Dialog ==========
    /// Book the slot with the drafted comment
    ConfirmBooking,
    /// Close the dialog without booking
    CancelDialog,

    // ========== Bookings List ==========
    /// Cancel the selected booking
    CancelBooking,

    // ========== Profile Form ==========
    /// Focus the next profile field
    NextField,
    /// Focus the previous profile field
    PrevField,
    /// Save the profile (shows an acknowledgement)
    SaveProfile,
    /// Dismiss the acknowledgement
    DismissNotice,

    // ========== Text Editing ==========
    /// Insert a newline (multi-line fields)
    InsertNewline,
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    Delete,
    /// Delete word before cursor
    DeleteWordBack,
    /// Delete from cursor to start of line
    DeleteToStart,
    /// Delete from cursor to end of line
    DeleteToEnd,
    /// Move cursor left one character
    MoveCursorLeft,
    /// Move cursor right one character
    MoveCursorRight,
    /// Move cursor to start of line
    MoveCursorStart,
    /// Move cursor to end of line
    MoveCursorEnd,
}

impl Action {
    /// Whether this action edits the focused text input
    pub fn is_text_edit(&self) -> bool {
        matches!(
            self,
            Action::InsertNewline
                | Action::Backspace
                | Action::Delete
                | Action::DeleteWordBack
                | Action::DeleteToStart
                | Action::DeleteToEnd
                | Action::MoveCursorLeft
                | Action::MoveCursorRight
                | Action::MoveCursorStart
                | Action::MoveCursorEnd
        )
    }
}
