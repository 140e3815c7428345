//! Bottom tab bar: Home, About, Me.

use leptos::prelude::*;

use super::toast_stack::show_toast;
use crate::state::nav::{NavState, Tab, TabChange};
use crate::state::notice::{NoticeState, Toast};
use crate::state::session::SessionState;

pub const SIGN_IN_FOR_PROFILE: Toast = Toast::error("Sign in to view your profile");

#[component]
pub fn BottomNav() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let select = move |tab: Tab| {
        let signed_in = session.with_untracked(SessionState::is_signed_in);
        if nav.try_update(|n| n.select_tab(tab, signed_in)) == Some(TabChange::LoginRequired) {
            show_toast(notices, SIGN_IN_FOR_PROFILE);
        }
    };

    let tab_button = move |tab: Tab, icon: &'static str, label: &'static str| {
        view! {
            <button
                class="bottom-nav__tab"
                class:bottom-nav__tab--active=move || nav.with(|n| n.active_tab == tab)
                on:click=move |_| select(tab)
            >
                <span class="bottom-nav__icon" aria-hidden="true">{icon}</span>
                <span class="bottom-nav__label">{label}</span>
            </button>
        }
    };

    view! {
        <nav class="bottom-nav">
            {tab_button(Tab::Home, "⌂", "Home")}
            {tab_button(Tab::About, "ℹ", "About")}
            {tab_button(Tab::Profile, "👤", "Me")}
        </nav>
    }
}
