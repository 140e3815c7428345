//! Signed-in user session, mirrored into durable storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is restored once at startup and rewritten on every successful
//! login or profile save. The stored record is always the serialization of
//! the in-memory user; writes go to storage first, then memory, from the same
//! serialized value.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage::KeyValueStorage;

/// Storage key holding the serialized current user.
pub const SESSION_STORAGE_KEY: &str = "user";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
}

impl SessionState {
    /// Load the stored user, discarding a record that no longer parses.
    pub fn restore(storage: &impl KeyValueStorage) -> Self {
        let Some(raw) = storage.get(SESSION_STORAGE_KEY) else {
            return Self::default();
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Self { user: Some(user) },
            Err(e) => {
                leptos::logging::warn!("discarding stored session: {e}");
                storage.remove(SESSION_STORAGE_KEY);
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Install `user` as the session user (login or profile update).
    pub fn set_user(&mut self, user: User, storage: &impl KeyValueStorage) {
        match serde_json::to_string(&user) {
            Ok(raw) => storage.set(SESSION_STORAGE_KEY, &raw),
            Err(e) => leptos::logging::warn!("session not persisted: {e}"),
        }
        self.user = Some(user);
    }

    pub fn sign_out(&mut self, storage: &impl KeyValueStorage) {
        storage.remove(SESSION_STORAGE_KEY);
        self.user = None;
    }

    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }
}
