//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ServiceConfig;
use crate::pages::home::HomePage;
use crate::state::{
    admin::AdminState, feed::FeedState, login::LoginForm, nav::NavState, notice::NoticeState,
    profile::ProfileForm, session::SessionState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the service configuration and every state slice, then mounts the
/// single-page shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(StoredValue::new(ServiceConfig::from_build_env()));

    provide_context(RwSignal::new(SessionState::default()));
    provide_context(RwSignal::new(NavState::default()));
    provide_context(RwSignal::new(LoginForm::default()));
    provide_context(RwSignal::new(ProfileForm::default()));
    provide_context(RwSignal::new(AdminState::default()));
    provide_context(RwSignal::new(FeedState::default()));
    provide_context(RwSignal::new(NoticeState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/newsworld.css"/>
        <Title text="News of World"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
