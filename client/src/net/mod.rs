//! Networking modules for the three external HTTP services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the calls, `task` guards them against double submission and
//! stale completion, and `types` defines the wire schema.

pub mod api;
pub mod task;
pub mod types;
