//! Admin panel: gate, user verification, announcements, about text.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate is decided by the admin service. Unlocking sends the typed key
//! with a user-list read; a 401 keeps the panel locked, anything decodable
//! unlocks it and shows the returned users. The accepted key lives only in
//! this slice and is dropped on `lock` or page reload.
//!
//! Mutations go through `RequestTracker`, so a second click on "verify" or
//! "publish" while the first is in flight sends nothing.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use std::fmt;

use crate::net::api::ApiError;
use crate::net::task::{RequestKey, RequestTicket, RequestTracker};
use crate::net::types::{AdminRequest, User, UsersEnvelope};

use super::notice::Toast;

/// Category used when the post form leaves it blank.
pub const DEFAULT_CATEGORY: &str = "Announcement";

pub const ADMIN_UNLOCKED: Toast = Toast::info("Admin panel unlocked");
pub const WRONG_PASSWORD: Toast = Toast::error("Wrong password");
pub const ADMIN_UNAVAILABLE: Toast = Toast::error("Admin service unavailable");
pub const ADMIN_KEY_REJECTED: Toast = Toast::error("Admin key rejected; panel locked");
pub const USER_VERIFIED: Toast = Toast::info("User verified!");
pub const VERIFY_FAILED: Toast = Toast::error("Verification failed");
pub const ANNOUNCEMENT_POSTED: Toast = Toast::info("Announcement published!");
pub const POST_FAILED: Toast = Toast::error("Publishing failed");
pub const ABOUT_UPDATED: Toast = Toast::info("About text updated!");
pub const ABOUT_UPDATE_FAILED: Toast = Toast::error("Update failed");

/// Admin sub-panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Users,
    Post,
    Settings,
}

/// A key the admin service has accepted. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminKey(String);

impl AdminKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AdminKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminKey(***)")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AdminGate {
    #[default]
    Locked,
    Checking,
    Unlocked(AdminKey),
}

/// Announcement draft.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub category: String,
    pub content: String,
}

impl PostForm {
    /// The category to send: the typed one, or [`DEFAULT_CATEGORY`] if blank.
    #[must_use]
    pub fn effective_category(&self) -> String {
        if self.category.trim().is_empty() {
            DEFAULT_CATEGORY.to_owned()
        } else {
            self.category.clone()
        }
    }

    #[must_use]
    pub fn request(&self, idempotency_key: &str) -> AdminRequest {
        AdminRequest::PostAnnouncement {
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.effective_category(),
            idempotency_key: idempotency_key.to_owned(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// What a finished admin mutation asks the view to do next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Completion {
    pub toast: Option<Toast>,
    /// Re-fetch the affected list in full.
    pub refetch: bool,
}

#[derive(Clone, Debug, Default)]
pub struct AdminState {
    pub gate: AdminGate,
    /// Password field of the locked panel.
    pub password: String,
    pub tab: AdminTab,
    pub users: Vec<User>,
    pub post: PostForm,
    pub about_draft: String,
    /// A user-list refresh was asked for while another was in flight.
    refresh_queued: bool,
    requests: RequestTracker,
}

impl AdminState {
    #[must_use]
    pub fn is_unlocked(&self) -> bool {
        matches!(self.gate, AdminGate::Unlocked(_))
    }

    #[must_use]
    pub fn key(&self) -> Option<&AdminKey> {
        match &self.gate {
            AdminGate::Unlocked(key) => Some(key),
            AdminGate::Locked | AdminGate::Checking => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self, key: &RequestKey) -> bool {
        self.requests.is_pending(key)
    }

    /// Drop the key, all panel data, and anything in flight.
    pub fn lock(&mut self) {
        self.requests.cancel_all();
        *self = Self::default();
    }

    // =========================================================================
    // GATE
    // =========================================================================

    /// Submit the typed password for checking.
    pub fn begin_unlock(&mut self) -> Option<(RequestTicket, String)> {
        if self.gate != AdminGate::Locked {
            return None;
        }
        let ticket = self.requests.begin(RequestKey::AdminUnlock)?;
        self.gate = AdminGate::Checking;
        Some((ticket, self.password.clone()))
    }

    pub fn apply_unlock(
        &mut self,
        ticket: &RequestTicket,
        candidate: String,
        result: Result<UsersEnvelope, ApiError>,
    ) -> Option<Toast> {
        self.requests.finish(ticket);
        if ticket.is_cancelled() {
            return None;
        }
        match result {
            Ok(envelope) => {
                self.gate = AdminGate::Unlocked(AdminKey(candidate));
                self.password.clear();
                self.tab = AdminTab::Users;
                self.users = envelope.users.unwrap_or_default();
                Some(ADMIN_UNLOCKED)
            }
            Err(ApiError::Unauthorized) => {
                self.gate = AdminGate::Locked;
                Some(WRONG_PASSWORD)
            }
            Err(e) => {
                leptos::logging::warn!("admin unlock failed: {e}");
                self.gate = AdminGate::Locked;
                Some(ADMIN_UNAVAILABLE)
            }
        }
    }

    /// Lock on a rejected key; otherwise hand back `fallback`.
    fn on_error(&mut self, context: &str, error: &ApiError, fallback: Option<Toast>) -> Option<Toast> {
        if *error == ApiError::Unauthorized {
            self.lock();
            return Some(ADMIN_KEY_REJECTED);
        }
        leptos::logging::warn!("{context} failed: {error}");
        fallback
    }

    fn begin_keyed(&mut self, key: RequestKey) -> Option<(RequestTicket, String)> {
        let admin_key = self.key()?.as_str().to_owned();
        let ticket = self.requests.begin(key)?;
        Some((ticket, admin_key))
    }

    // =========================================================================
    // USERS
    // =========================================================================

    /// Start a full user-list fetch. While one is already in flight the
    /// request is queued instead, and `apply_users` asks for it to be re-run,
    /// since the running fetch may predate the change that prompted this one.
    pub fn begin_refresh_users(&mut self) -> Option<(RequestTicket, String)> {
        if self.key().is_some() && self.requests.is_pending(&RequestKey::RefreshUsers) {
            self.refresh_queued = true;
            return None;
        }
        self.begin_keyed(RequestKey::RefreshUsers)
    }

    /// Replace the user list with a full re-fetch. Failures are logged only.
    /// `refetch` is set when another refresh was queued behind this one.
    pub fn apply_users(&mut self, ticket: &RequestTicket, result: Result<UsersEnvelope, ApiError>) -> Completion {
        self.requests.finish(ticket);
        if ticket.is_cancelled() {
            return Completion::default();
        }
        let toast = match result {
            Ok(envelope) => {
                self.users = envelope.users.unwrap_or_default();
                None
            }
            Err(e) => self.on_error("fetch users", &e, None),
        };
        let refetch = std::mem::take(&mut self.refresh_queued) && self.is_unlocked();
        Completion { toast, refetch }
    }

    #[must_use]
    pub fn is_verifying(&self, user_id: i64) -> bool {
        self.requests.is_pending(&RequestKey::VerifyUser(user_id))
    }

    pub fn begin_verify_user(&mut self, user_id: i64) -> Option<(RequestTicket, String)> {
        self.begin_keyed(RequestKey::VerifyUser(user_id))
    }

    /// On success the view re-fetches users; the list is never patched here.
    pub fn apply_verify_user(&mut self, ticket: &RequestTicket, result: Result<(), ApiError>) -> Completion {
        self.requests.finish(ticket);
        if ticket.is_cancelled() {
            return Completion::default();
        }
        match result {
            Ok(()) => Completion { toast: Some(USER_VERIFIED), refetch: true },
            Err(e) => Completion { toast: self.on_error("verify user", &e, Some(VERIFY_FAILED)), refetch: false },
        }
    }

    // =========================================================================
    // ANNOUNCEMENTS
    // =========================================================================

    pub fn begin_post(&mut self) -> Option<(RequestTicket, String, AdminRequest)> {
        let (ticket, admin_key) = self.begin_keyed(RequestKey::PostAnnouncement)?;
        let body = self.post.request(&ticket.idempotency_key);
        Some((ticket, admin_key, body))
    }

    /// On success the form is cleared and the view re-fetches the feed.
    pub fn apply_post(&mut self, ticket: &RequestTicket, result: Result<(), ApiError>) -> Completion {
        self.requests.finish(ticket);
        if ticket.is_cancelled() {
            return Completion::default();
        }
        match result {
            Ok(()) => {
                self.post.clear();
                Completion { toast: Some(ANNOUNCEMENT_POSTED), refetch: true }
            }
            Err(e) => Completion { toast: self.on_error("post announcement", &e, Some(POST_FAILED)), refetch: false },
        }
    }

    // =========================================================================
    // ABOUT
    // =========================================================================

    pub fn begin_update_about(&mut self) -> Option<(RequestTicket, String, String)> {
        let (ticket, admin_key) = self.begin_keyed(RequestKey::UpdateAbout)?;
        Some((ticket, admin_key, self.about_draft.clone()))
    }

    /// Returns the text to display as the new about body on success.
    pub fn apply_update_about(
        &mut self,
        ticket: &RequestTicket,
        submitted: String,
        result: Result<(), ApiError>,
    ) -> (Option<String>, Option<Toast>) {
        self.requests.finish(ticket);
        if ticket.is_cancelled() {
            return (None, None);
        }
        match result {
            Ok(()) => (Some(submitted), Some(ABOUT_UPDATED)),
            Err(e) => (None, self.on_error("update about", &e, Some(ABOUT_UPDATE_FAILED))),
        }
    }
}
