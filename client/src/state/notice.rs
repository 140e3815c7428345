//! Transient toast notices.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// How long a toast stays on screen.
pub const NOTICE_TIMEOUT_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A message produced by a state transition, not yet on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: NoticeKind,
    pub message: &'static str,
}

impl Toast {
    #[must_use]
    pub const fn info(message: &'static str) -> Self {
        Self { kind: NoticeKind::Info, message }
    }

    #[must_use]
    pub const fn error(message: &'static str) -> Self {
        Self { kind: NoticeKind::Error, message }
    }
}

/// A toast on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Show `toast`; returns its id for later dismissal.
    pub fn push(&mut self, toast: Toast) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, kind: toast.kind, message: toast.message.to_owned() });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}
