//! # client
//!
//! Leptos + WASM front end for News of World: splash screen, news feed,
//! about page, email-code login, profile editing, and the admin panel.
//!
//! All persistence lives behind three external HTTP services (auth, news,
//! admin). This crate holds the views, the per-concern state slices, and the
//! request helpers that reconcile service responses into those slices.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
