mod booking_dialog;
mod bookings_list;
mod calendar_grid;
mod dialog;
mod global_footer;
mod key_hints;
mod nav_bar;
mod notice_dialog;
mod profile_form;
mod text_input;
pub mod theme;

pub use booking_dialog::BookingDialog;
pub use bookings_list::BookingsList;
pub use calendar_grid::{CalendarGrid, TIME_COLUMN_WIDTH};
pub use dialog::{DialogFrame, InstructionBar};
pub use global_footer::{GlobalFooter, StatusMessage};
pub use key_hints::{key_hint_spans, render_key_hints, HintStyle, KeyHint};
pub use nav_bar::NavBar;
pub use notice_dialog::NoticeDialog;
pub use profile_form::ProfileForm;
pub use text_input::TextInputState;
