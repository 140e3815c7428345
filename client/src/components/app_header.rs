//! Sticky header with the sign-in and admin entry points.

use leptos::prelude::*;

use crate::state::nav::NavState;
use crate::state::session::SessionState;

#[component]
pub fn AppHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavState>>();

    view! {
        <header class="app-header">
            <div class="app-header__actions">
                <Show when=move || !session.with(SessionState::is_signed_in)>
                    <button class="btn btn--outline" on:click=move |_| nav.update(NavState::open_login)>
                        "Sign in"
                    </button>
                </Show>
                <button class="btn btn--outline" on:click=move |_| nav.update(NavState::open_admin)>
                    "Admin"
                </button>
            </div>
            <h1 class="app-header__title">"News of World"</h1>
        </header>
    }
}
