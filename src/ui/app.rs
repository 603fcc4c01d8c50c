use std::io;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Frame, Terminal,
};

use crate::config::{Config, KeyCombo, KeyContext};
use crate::data::{BookingRepository, ProfileField, ProfileRecord, SharedStore};
use crate::ui::action::Action;
use crate::ui::app_state::AppState;
use crate::ui::components::{
    BookingDialog, BookingsList, CalendarGrid, GlobalFooter, KeyHint, NavBar, NoticeDialog,
    ProfileForm, TextInputState,
};
use crate::ui::navigation::{DialogState, Navigator, Screen};
use crate::ui::terminal_guard::TerminalGuard;

/// Text of the acknowledgement shown by the profile Save action
pub const PROFILE_SAVED_NOTICE: &str = "Profile updated!";

/// Main application state
pub struct App {
    /// Application configuration
    config: Config,
    /// Bookings, mirrored to the store
    repo: BookingRepository,
    /// User profile, mirrored to the store
    profile: ProfileRecord,
    /// Active screen and booking dialog
    nav: Navigator,
    /// Cursors, inputs and modal flags
    state: AppState,
}

impl App {
    pub fn new(config: Config, store: SharedStore) -> Self {
        let repo =
            BookingRepository::load(store.clone()).with_unique_slots(config.enforce_unique_slots);
        let profile = ProfileRecord::load(store);
        let mut state = AppState::new(profile.profile());
        if repo.unreadable_count() > 0 {
            state.set_error(format!(
                "{} stored booking(s) could not be read",
                repo.unreadable_count()
            ));
        }

        Self {
            config,
            repo,
            profile,
            nav: Navigator::new(),
            state,
        }
    }

    pub fn repository(&self) -> &BookingRepository {
        &self.repo
    }

    pub fn profile(&self) -> &ProfileRecord {
        &self.profile
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit
    }

    /// Keybinding context for the current screen and modals
    pub fn key_context(&self) -> KeyContext {
        KeyContext::from_state(
            self.nav.screen(),
            self.nav.is_dialog_open(),
            self.state.notice.is_some(),
        )
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        guard.cleanup()?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut events = EventStream::new();
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        while !self.state.should_quit {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) => self.handle_key(key),
                    // Resize and focus events only need the redraw above
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
                _ = &mut shutdown => {
                    tracing::info!("Interrupted, shutting down");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Translate a key press into an action, or typed text for the focused
    /// input when the key is unbound.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        let context = self.key_context();
        let combo = KeyCombo::from_key_event(&key);
        if let Some(action) = self.config.keybindings.get_action(&combo, context) {
            self.dispatch(action);
            return;
        }

        if let KeyCode::Char(c) = key.code {
            let plain = (key.modifiers - KeyModifiers::SHIFT).is_empty();
            if plain && context.accepts_text() {
                self.type_char(c);
            }
        }
    }

    /// Apply one action to the state machine
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, context = ?self.key_context(), "Dispatching action");

        // The acknowledgement blocks everything until dismissed
        if self.state.notice.is_some() {
            match action {
                Action::DismissNotice => self.state.notice = None,
                Action::Quit => self.state.should_quit = true,
                _ => {}
            }
            return;
        }

        if self.nav.is_dialog_open() {
            self.dispatch_dialog(action);
            return;
        }

        match action {
            Action::Quit => self.state.should_quit = true,
            Action::ShowCalendar => self.nav.select_screen(Screen::Calendar),
            Action::ShowBookings => self.nav.select_screen(Screen::Bookings),
            Action::ShowProfile => self.nav.select_screen(Screen::Profile),
            Action::NextScreen => self.nav.select_screen(self.nav.screen().next()),
            Action::PrevScreen => self.nav.select_screen(self.nav.screen().prev()),

            Action::MoveUp => self.move_focus(0, -1),
            Action::MoveDown => self.move_focus(0, 1),
            Action::MoveLeft => self.move_focus(-1, 0),
            Action::MoveRight => self.move_focus(1, 0),

            Action::OpenDialog if self.nav.screen() == Screen::Calendar => self.open_dialog(),
            Action::CancelBooking if self.nav.screen() == Screen::Bookings => {
                self.cancel_selected_booking()
            }

            Action::NextField | Action::PrevField if self.nav.screen() == Screen::Profile => {
                let focus = self.state.profile_focus;
                self.state.profile_focus = if action == Action::NextField {
                    focus.next()
                } else {
                    focus.prev()
                };
            }
            Action::SaveProfile if self.nav.screen() == Screen::Profile => {
                self.profile.save();
                self.state.notice = Some(PROFILE_SAVED_NOTICE.to_string());
            }

            edit if edit.is_text_edit() && self.nav.screen() == Screen::Profile => {
                // Only the preferences field is multi-line
                if edit == Action::InsertNewline
                    && self.state.profile_focus != ProfileField::Preferences
                {
                    return;
                }
                self.edit_profile(|input| {
                    input.apply(edit);
                });
            }

            _ => {}
        }
    }

    fn dispatch_dialog(&mut self, action: Action) {
        match action {
            Action::ConfirmBooking => self.confirm_booking(),
            Action::CancelDialog => {
                self.nav.cancel_dialog();
                self.state.comment_input.clear();
            }
            Action::Quit => self.state.should_quit = true,
            edit if edit.is_text_edit() => self.edit_comment(|input| {
                input.apply(edit);
            }),
            // Screen switching and list actions wait until the dialog closes
            _ => {}
        }
    }

    fn type_char(&mut self, c: char) {
        if self.nav.is_dialog_open() {
            self.edit_comment(|input| input.insert_char(c));
        } else if self.nav.screen() == Screen::Profile {
            self.edit_profile(|input| input.insert_char(c));
        }
    }

    fn move_focus(&mut self, days: isize, slots: isize) {
        match self.nav.screen() {
            Screen::Calendar => self.state.move_calendar_cursor(days, slots),
            Screen::Bookings => self.state.move_bookings_selection(slots, self.repo.len()),
            Screen::Profile => {
                if slots > 0 {
                    self.state.profile_focus = self.state.profile_focus.next();
                } else if slots < 0 {
                    self.state.profile_focus = self.state.profile_focus.prev();
                }
            }
        }
    }

    fn open_dialog(&mut self) {
        let (day, time) = self.state.calendar_cursor;
        if self.nav.open_dialog(day, time, &self.repo) {
            self.state.comment_input.clear();
        } else {
            self.state.set_info(format!("{day} at {time} is already booked"));
        }
    }

    fn confirm_booking(&mut self) {
        match self.nav.confirm_booking(&mut self.repo) {
            Some(Ok(booking)) => self.state.set_info(format!("Booked {}", booking.label())),
            Some(Err(e)) => {
                tracing::error!(error = %e, "Booking failed");
                self.state.set_error(format!("Booking failed: {e}"));
            }
            None => {}
        }
        self.state.comment_input.clear();
    }

    fn cancel_selected_booking(&mut self) {
        let Some(id) = self
            .repo
            .list()
            .get(self.state.bookings_selected)
            .map(|b| b.id)
        else {
            return;
        };

        match self.repo.remove(id) {
            Ok(Some(removed)) => {
                self.state.set_info(format!("Cancelled {}", removed.label()));
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!(id, error = %e, "Failed to cancel booking");
                self.state.set_error(format!("Cancel failed: {e}"));
            }
        }
        self.state.clamp_bookings_selection(self.repo.len());
    }

    fn edit_comment(&mut self, edit: impl FnOnce(&mut TextInputState)) {
        edit(&mut self.state.comment_input);
        self.nav.edit_draft_comment(self.state.comment_input.value());
    }

    /// Edit the focused profile input and write the field through when its
    /// value changed.
    fn edit_profile(&mut self, edit: impl FnOnce(&mut TextInputState)) {
        let field = self.state.profile_focus;
        let input = self.state.focused_profile_input_mut();
        edit(input);

        let value = input.value();
        if value == self.profile.get(field) {
            return;
        }
        let value = value.to_string();
        if let Err(e) = self.profile.update(field, value) {
            tracing::error!(field = field.key(), error = %e, "Failed to persist profile");
            self.state.set_error(format!("Could not save profile: {e}"));
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let [nav_area, main_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let context = self.key_context();
        let modal = matches!(context, KeyContext::Dialog | KeyContext::Notice);
        let buf = frame.buffer_mut();

        NavBar::new(self.nav.screen())
            .focused(!modal)
            .render(nav_area, buf);

        match self.nav.screen() {
            Screen::Calendar => CalendarGrid::new(&self.repo, self.state.calendar_cursor)
                .focused(!modal)
                .render(main_area, buf),
            Screen::Bookings => {
                let cancel_key = self.key_label(Action::CancelBooking, KeyContext::Bookings);
                BookingsList::new(self.repo.list(), self.state.bookings_selected)
                    .cancel_key(&cancel_key)
                    .render(main_area, buf);
            }
            Screen::Profile => {
                let save_key = self.key_label(Action::SaveProfile, KeyContext::Profile);
                ProfileForm::new(&self.state.profile_inputs, self.state.profile_focus)
                    .save_key(&save_key)
                    .active(!modal)
                    .render(main_area, buf);
            }
        }

        let bindings = &self.config.keybindings;
        if let DialogState::Open { day, time, .. } = self.nav.dialog() {
            let hints = KeyHint::collect(
                bindings,
                KeyContext::Dialog,
                &[
                    (Action::ConfirmBooking, "Book"),
                    (Action::CancelDialog, "Cancel"),
                    (Action::InsertNewline, "New line"),
                ],
            );
            BookingDialog::new(*day, *time, &self.state.comment_input)
                .hints(&hints)
                .render(main_area, buf);
        }

        if let Some(message) = &self.state.notice {
            let hints =
                KeyHint::collect(bindings, KeyContext::Notice, &[(Action::DismissNotice, "OK")]);
            NoticeDialog::new(message).hints(&hints).render(main_area, buf);
        }

        GlobalFooter::for_context(context, bindings)
            .status(self.state.status.as_ref())
            .render(footer_area, buf);
    }

    fn key_label(&self, action: Action, context: KeyContext) -> String {
        self.config
            .keybindings
            .key_for(action, context)
            .map(|k| k.hint_label())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("repo", &self.repo)
            .field("profile", &self.profile)
            .field("nav", &self.nav)
            .finish_non_exhaustive()
    }
}
