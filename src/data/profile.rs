//! User profile record, persisted under [`PROFILE_KEY`]

use super::models::{ProfileField, UserProfile};
use super::store::{load_json_or_default, save_json, SharedStore, StoreError};

/// Store key holding the JSON profile object
pub const PROFILE_KEY: &str = "userProfile";

/// The singleton profile, written through on every field edit
pub struct ProfileRecord {
    store: SharedStore,
    profile: UserProfile,
}

impl ProfileRecord {
    /// Load the persisted profile, or the all-empty default
    pub fn load(store: SharedStore) -> Self {
        let profile = load_json_or_default(store.as_ref(), PROFILE_KEY);
        Self { store, profile }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn get(&self, field: ProfileField) -> &str {
        self.profile.get(field)
    }

    /// Set one field and persist the whole record.
    ///
    /// The in-memory value is updated even when the write fails so the form
    /// keeps what the user typed; the next successful write catches up.
    pub fn update(
        &mut self,
        field: ProfileField,
        value: impl Into<String>,
    ) -> Result<(), StoreError> {
        self.profile.set(field, value);
        save_json(self.store.as_ref(), PROFILE_KEY, &self.profile)
    }

    /// The explicit Save action. Every edit is already persisted, so this
    /// only records the acknowledgement.
    pub fn save(&self) {
        tracing::info!(
            name_set = !self.profile.name.is_empty(),
            email_set = !self.profile.email.is_empty(),
            "Profile saved"
        );
    }
}

impl std::fmt::Debug for ProfileRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileRecord")
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}
