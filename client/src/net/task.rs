//! Request tickets: in-flight de-duplication, idempotency keys, cancellation.
//!
//! DESIGN
//! ======
//! Each user-triggered call asks the owning state slice for a ticket before
//! spawning. A key already in flight yields no ticket, so a double click on
//! "verify" or "publish" sends one request. Tickets are cancelled in bulk
//! when their panel closes; the spawned task still completes but drops the
//! response instead of writing into state.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation flag between a tracker and a spawned request.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Logical identity of a user action, used for de-duplication.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RequestKey {
    SendCode,
    VerifyCode,
    UpdateProfile,
    AdminUnlock,
    RefreshUsers,
    VerifyUser(i64),
    PostAnnouncement,
    UpdateAbout,
}

/// Permission to run one request for `key`.
#[derive(Clone, Debug)]
pub struct RequestTicket {
    pub key: RequestKey,
    /// Fresh per ticket; forwarded on mutating calls.
    pub idempotency_key: String,
    pub token: CancelToken,
}

impl RequestTicket {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// Outstanding tickets keyed by action.
#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    in_flight: HashMap<RequestKey, (String, CancelToken)>,
}

impl RequestTracker {
    /// Issue a ticket for `key`, or `None` while one is already outstanding.
    pub fn begin(&mut self, key: RequestKey) -> Option<RequestTicket> {
        if self.in_flight.contains_key(&key) {
            return None;
        }
        let idempotency_key = uuid::Uuid::new_v4().to_string();
        let token = CancelToken::new();
        self.in_flight
            .insert(key.clone(), (idempotency_key.clone(), token.clone()));
        Some(RequestTicket { key, idempotency_key, token })
    }

    /// Release `ticket`'s key. A stale ticket (its key was re-issued after a
    /// cancel) leaves the newer entry alone.
    pub fn finish(&mut self, ticket: &RequestTicket) {
        let current = self
            .in_flight
            .get(&ticket.key)
            .is_some_and(|(idem, _)| *idem == ticket.idempotency_key);
        if current {
            self.in_flight.remove(&ticket.key);
        }
    }

    /// Cancel and forget every outstanding ticket.
    pub fn cancel_all(&mut self) {
        for (_, (_, token)) in self.in_flight.drain() {
            token.cancel();
        }
    }

    #[must_use]
    pub fn is_pending(&self, key: &RequestKey) -> bool {
        self.in_flight.contains_key(key)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.in_flight.len()
    }
}
