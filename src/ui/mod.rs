pub mod action;
pub mod app;
pub mod app_state;
pub mod components;
pub mod navigation;
pub mod terminal_guard;

pub use action::Action;
pub use app::{App, PROFILE_SAVED_NOTICE};
pub use app_state::AppState;
pub use navigation::{DialogState, Navigator, Screen};
pub use terminal_guard::{install_panic_hook, TerminalGuard};
