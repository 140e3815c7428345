//! Single-page shell: splash, header, tab body, bottom bar, dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. On mount (browser only) it restores the stored
//! session, starts the feed and about reads, and keeps the splash up for a
//! fixed delay. Everything after that is driven by the state slices.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::about_view::AboutView;
use crate::components::admin_dialog::AdminDialog;
use crate::components::app_header::AppHeader;
use crate::components::bottom_nav::BottomNav;
use crate::components::login_dialog::LoginDialog;
use crate::components::news_feed::{NewsFeed, refresh_about, refresh_news};
use crate::components::profile_view::ProfileView;
use crate::components::splash::Splash;
use crate::components::toast_stack::ToastStack;
use crate::config::ServiceConfig;
use crate::state::feed::FeedState;
use crate::state::nav::{NavState, SPLASH_DURATION_MS, Tab};
use crate::state::session::SessionState;
use crate::util::storage::LocalStorage;

/// Tab body to render. Memoized so dialog and splash toggles, which share
/// the `NavState` signal, do not rebuild the tab body.
pub(crate) fn visible_tab_memo(session: RwSignal<SessionState>, nav: RwSignal<NavState>) -> Memo<Option<Tab>> {
    let signed_in = Memo::new(move |_| session.with(SessionState::is_signed_in));
    Memo::new(move |_| nav.with(|n| n.visible_tab(signed_in.get())))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let cfg = expect_context::<StoredValue<ServiceConfig>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let feed = expect_context::<RwSignal<FeedState>>();

    // Effects only run in the browser, so SSR and the first hydrated frame
    // both render the splash without a session.
    Effect::new(move || {
        session.set(SessionState::restore(&LocalStorage));
        refresh_news(cfg, feed);
        refresh_about(cfg, feed);
        leptos::task::spawn_local(async move {
            crate::util::timer::sleep_ms(SPLASH_DURATION_MS).await;
            nav.update(NavState::dismiss_splash);
        });
    });

    let visible_tab = visible_tab_memo(session, nav);
    let body = move || match visible_tab.get() {
        Some(Tab::Home) => view! { <NewsFeed/> }.into_any(),
        Some(Tab::About) => view! { <AboutView/> }.into_any(),
        Some(Tab::Profile) => match session.with(|s| s.user.clone()) {
            Some(user) => view! { <ProfileView user/> }.into_any(),
            None => ().into_any(),
        },
        None => ().into_any(),
    };

    view! {
        <Show when=move || !nav.with(|n| n.splash_visible) fallback=|| view! { <Splash/> }>
            <div class="app">
                <AppHeader/>
                <main class="app__main">{body}</main>
                <BottomNav/>
            </div>
            <Show when=move || nav.with(|n| n.login_open)>
                <LoginDialog/>
            </Show>
            <Show when=move || nav.with(|n| n.admin_open)>
                <AdminDialog/>
            </Show>
        </Show>
        <ToastStack/>
    }
}
