use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::ui::action::Action;
use crate::util::paths::config_path;

use super::default_keys::default_keybindings;
use super::keys::{parse_key_notation, KeyCombo, KeyContext, KeybindingConfig};

/// Bundled example config, written on first run
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Keybinding configuration
    pub keybindings: KeybindingConfig,

    /// Refuse to create a booking on a slot that is already booked
    pub enforce_unique_slots: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keybindings: default_keybindings(),
            enforce_unique_slots: true,
        }
    }
}

/// TOML representation of the `[booking]` table
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlBookingConfig {
    pub enforce_unique_slots: Option<bool>,
}

/// TOML representation of keybinding configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlKeybindings {
    /// Global keybindings, `action = "key"`
    #[serde(flatten)]
    pub global: HashMap<String, toml::Value>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Booking behaviour
    pub booking: Option<TomlBookingConfig>,
    /// Keybinding configuration
    pub keys: Option<TomlKeybindings>,
}

impl TomlKeybindings {
    /// Convert TOML keybindings to KeybindingConfig.
    ///
    /// String values are global bindings; table values named after a
    /// [`KeyContext`] hold that context's bindings.
    fn to_keybinding_config(&self) -> KeybindingConfig {
        let mut config = KeybindingConfig::new();

        for (name, value) in &self.global {
            match value {
                toml::Value::String(key_str) => {
                    if let Some((combo, action)) = parse_binding(name, key_str) {
                        config.global.insert(combo, action);
                    }
                }
                toml::Value::Table(table) => {
                    let Some(context) = KeyContext::all_contexts()
                        .iter()
                        .copied()
                        .find(|ctx| ctx.table_name() == name)
                    else {
                        tracing::warn!(table = %name, "Unknown keybinding context");
                        continue;
                    };
                    let context_map = config.context.entry(context).or_default();
                    for (action_name, key_value) in table {
                        let Some(key_str) = key_value.as_str() else {
                            continue;
                        };
                        if let Some((combo, action)) = parse_binding(action_name, key_str) {
                            context_map.insert(combo, action);
                        }
                    }
                }
                _ => tracing::warn!(action = %name, "Ignoring non-string keybinding"),
            }
        }

        config
    }
}

fn parse_binding(action_name: &str, key_str: &str) -> Option<(KeyCombo, Action)> {
    match (parse_key_notation(key_str), parse_action(action_name)) {
        (Ok(combo), Some(action)) => Some((combo, action)),
        (Err(err), _) => {
            tracing::warn!(action = %action_name, key = %key_str, error = %err, "Invalid key");
            None
        }
        (_, None) => {
            tracing::warn!(action = %action_name, "Unknown action");
            None
        }
    }
}

/// Parse an action name string into an Action
pub fn parse_action(name: &str) -> Option<Action> {
    match name {
        // Global
        "quit" => Some(Action::Quit),
        "show_calendar" => Some(Action::ShowCalendar),
        "show_bookings" => Some(Action::ShowBookings),
        "show_profile" => Some(Action::ShowProfile),
        "next_screen" => Some(Action::NextScreen),
        "prev_screen" => Some(Action::PrevScreen),

        // Navigation
        "move_up" => Some(Action::MoveUp),
        "move_down" => Some(Action::MoveDown),
        "move_left" => Some(Action::MoveLeft),
        "move_right" => Some(Action::MoveRight),
        "open_dialog" => Some(Action::OpenDialog),

        // Dialog
        "confirm_booking" | "confirm" => Some(Action::ConfirmBooking),
        "cancel_dialog" => Some(Action::CancelDialog),

        // Bookings list
        "cancel_booking" => Some(Action::CancelBooking),

        // Profile
        "next_field" => Some(Action::NextField),
        "prev_field" => Some(Action::PrevField),
        "save_profile" | "save" => Some(Action::SaveProfile),
        "dismiss_notice" => Some(Action::DismissNotice),

        // Text editing
        "insert_newline" => Some(Action::InsertNewline),
        "backspace" => Some(Action::Backspace),
        "delete" => Some(Action::Delete),
        "delete_word_back" => Some(Action::DeleteWordBack),
        "delete_to_start" => Some(Action::DeleteToStart),
        "delete_to_end" => Some(Action::DeleteToEnd),
        "move_cursor_left" => Some(Action::MoveCursorLeft),
        "move_cursor_right" => Some(Action::MoveCursorRight),
        "move_cursor_start" => Some(Action::MoveCursorStart),
        "move_cursor_end" => Some(Action::MoveCursorEnd),

        _ => None,
    }
}

impl Config {
    /// Load configuration from the data directory, merging with defaults
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from `path`. A missing or malformed file yields
    /// the defaults.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Config::default();

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "No config file");
                return config;
            }
        };

        let toml_config = match toml::from_str::<TomlConfig>(&contents) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Malformed config, using defaults"
                );
                return config;
            }
        };

        if let Some(booking) = toml_config.booking {
            if let Some(enforce) = booking.enforce_unique_slots {
                config.enforce_unique_slots = enforce;
            }
        }

        // Merge user keybindings on top of defaults
        if let Some(keys) = toml_config.keys {
            config.keybindings.merge(keys.to_keybinding_config());
        }

        config
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!(error = %e, "Failed to create config directory");
                return;
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }
}
