//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `nav`, `login`, `profile`, `admin`,
//! `feed`, `notice`). Each slice is a plain struct held in its own
//! `RwSignal` and provided via context, so transition logic is testable
//! without a browser and components depend only on the slices they touch.

pub mod admin;
pub mod feed;
pub mod login;
pub mod nav;
pub mod notice;
pub mod profile;
pub mod session;
