//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shell chrome, the tab bodies, and the dialogs while
//! reading/writing the state slices provided through Leptos context.

pub mod about_view;
pub mod admin_dialog;
pub mod admin_panels;
pub mod app_header;
pub mod bottom_nav;
pub mod login_dialog;
pub mod news_feed;
pub mod profile_view;
pub mod splash;
pub mod toast_stack;
