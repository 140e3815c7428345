//! Email + one-time-code login flow.
//!
//! DESIGN
//! ======
//! `NotStarted -> CodeSent -> Authenticated`. The view asks for a ticket
//! (`begin_*`), runs the call, and hands the outcome back (`apply_*`), which
//! advances the stage and yields the toast to show. Wrong codes keep the flow
//! in `CodeSent` with no attempt limit.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::api::ApiError;
use crate::net::task::{RequestKey, RequestTicket, RequestTracker};
use crate::net::types::{MessageEnvelope, User, UserEnvelope};

use super::notice::Toast;

/// Length of the emailed one-time code.
pub const CODE_LENGTH: usize = 4;

pub const CODE_SENT: Toast = Toast::info("Code sent to your email!");
pub const CODE_SEND_FAILED: Toast = Toast::error("Failed to send code");
pub const SIGNED_IN: Toast = Toast::info("Signed in!");
pub const WRONG_CODE: Toast = Toast::error("Wrong code");
pub const SIGN_IN_FAILED: Toast = Toast::error("Sign-in failed");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginStage {
    #[default]
    NotStarted,
    CodeSent,
    Authenticated,
}

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub code: String,
    pub stage: LoginStage,
    requests: RequestTracker,
}

/// Clamp typed input to the code length; content is not restricted.
pub fn normalize_code_input(raw: &str) -> String {
    raw.chars().take(CODE_LENGTH).collect()
}

/// Whether `code` has exactly [`CODE_LENGTH`] characters.
pub fn code_complete(code: &str) -> bool {
    code.chars().count() == CODE_LENGTH
}

impl LoginForm {
    pub fn set_code(&mut self, raw: &str) {
        self.code = normalize_code_input(raw);
    }

    #[must_use]
    pub fn can_confirm(&self) -> bool {
        code_complete(&self.code)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.requests.is_pending(&RequestKey::SendCode) || self.requests.is_pending(&RequestKey::VerifyCode)
    }

    /// Start a send-code request for the current email.
    pub fn begin_send_code(&mut self) -> Option<(RequestTicket, String)> {
        if self.stage != LoginStage::NotStarted {
            return None;
        }
        let ticket = self.requests.begin(RequestKey::SendCode)?;
        Some((ticket, self.email.clone()))
    }

    pub fn apply_send_code(
        &mut self,
        ticket: &RequestTicket,
        result: Result<MessageEnvelope, ApiError>,
    ) -> Option<Toast> {
        self.requests.finish(ticket);
        if ticket.is_cancelled() {
            return None;
        }
        match result {
            Ok(envelope) if envelope.acknowledged() => {
                self.stage = LoginStage::CodeSent;
                self.code.clear();
                Some(CODE_SENT)
            }
            Ok(envelope) => {
                leptos::logging::warn!("send code rejected: {:?}", envelope.error);
                Some(CODE_SEND_FAILED)
            }
            Err(e) => {
                leptos::logging::warn!("send code failed: {e}");
                Some(CODE_SEND_FAILED)
            }
        }
    }

    /// Start a verify-code request; refused until the code is complete.
    pub fn begin_verify_code(&mut self) -> Option<(RequestTicket, String, String)> {
        if self.stage != LoginStage::CodeSent || !self.can_confirm() {
            return None;
        }
        let ticket = self.requests.begin(RequestKey::VerifyCode)?;
        Some((ticket, self.email.clone(), self.code.clone()))
    }

    /// Returns the authenticated user, if any, and the toast to show.
    pub fn apply_verify_code(
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
                self.stage = LoginStage::Authenticated;
                (Some(user), Some(SIGNED_IN))
            }
            Ok(_) => (None, Some(WRONG_CODE)),
            Err(e) => {
                leptos::logging::warn!("verify code failed: {e}");
                (None, Some(SIGN_IN_FAILED))
            }
        }
    }

    /// Go back to email entry from `CodeSent`.
    pub fn change_email(&mut self) {
        if self.stage == LoginStage::CodeSent {
            self.stage = LoginStage::NotStarted;
            self.code.clear();
        }
    }

    /// Forget the flow entirely, cancelling anything in flight.
    pub fn reset(&mut self) {
        self.requests.cancel_all();
        *self = Self::default();
    }
}
