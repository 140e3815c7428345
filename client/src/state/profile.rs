//! Profile edit buffers.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::api::ApiError;
use crate::net::task::{RequestKey, RequestTicket, RequestTracker};
use crate::net::types::{UpdateProfileRequest, User, UserEnvelope};

use super::notice::Toast;

pub const PROFILE_UPDATED: Toast = Toast::info("Profile updated!");
pub const PROFILE_UPDATE_FAILED: Toast = Toast::error("Profile update failed");

#[derive(Clone, Debug, Default)]
pub struct ProfileForm {
    pub editing: bool,
    pub name: String,
    pub location: String,
    requests: RequestTracker,
}

impl ProfileForm {
    /// Enter edit mode seeded from `user`.
    pub fn begin(&mut self, user: &User) {
        self.editing = true;
        self.name.clone_from(&user.name);
        self.location = user.location.clone().unwrap_or_default();
    }

    /// Leave edit mode, discarding buffers and any save in flight.
    pub fn cancel(&mut self) {
        self.requests.cancel_all();
        self.editing = false;
        self.name.clear();
        self.location.clear();
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.requests.is_pending(&RequestKey::UpdateProfile)
    }

    /// Start a save for `user_id`. Buffers are sent as typed; an empty name
    /// is allowed.
    pub fn begin_save(&mut self, user_id: i64) -> Option<(RequestTicket, UpdateProfileRequest)> {
        if !self.editing {
            return None;
        }
        let ticket = self.requests.begin(RequestKey::UpdateProfile)?;
        let body = UpdateProfileRequest { user_id, name: self.name.clone(), location: self.location.clone() };
        Some((ticket, body))
    }

    /// Returns the replacement session user on success.
    pub fn apply_save(
        &mut self,
        ticket: &RequestTicket,
        result: Result<UserEnvelope, ApiError>,
    ) -> (Option<User>, Option<Toast>) {
        self.requests.finish(ticket);
        if ticket.is_cancelled() {
            return (None, None);
        }
        match result {
            Ok(UserEnvelope { user: Some(user), .. }) => {
                self.editing = false;
                (Some(user), Some(PROFILE_UPDATED))
            }
            Ok(envelope) => {
                leptos::logging::warn!("profile update rejected: {:?}", envelope.error);
                (None, Some(PROFILE_UPDATE_FAILED))
            }
            Err(e) => {
                leptos::logging::warn!("profile update failed: {e}");
                (None, Some(PROFILE_UPDATE_FAILED))
            }
        }
    }
}
