use std::collections::HashMap;

use fit_core::entities::Profile;

/// Keyed store of user profiles, owned by whoever drives the session.
pub trait ProfileStore {
    fn get(&self, user_id: &str) -> Option<&Profile>;

    /// Insert or replace the profile stored under `user_id`.
    fn put(&mut self, user_id: &str, profile: Profile);
}

/// Process-lifetime store. Nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: HashMap<String, Profile>,
}

impl InMemoryProfileStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn get(&self, user_id: &str) -> Option<&Profile> {
        self.profiles.get(user_id)
    }

    fn put(&mut self, user_id: &str, profile: Profile) {
        self.profiles.insert(user_id.to_string(), profile);
    }
}
