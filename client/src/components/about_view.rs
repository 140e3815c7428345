//! Static "about" card.

use leptos::prelude::*;

use crate::state::feed::FeedState;

#[component]
pub fn AboutView() -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();

    view! {
        <section class="card about-view">
            <h2 class="about-view__title">"About"</h2>
            <p class="about-view__body">{move || feed.with(|f| f.about.clone())}</p>
        </section>
    }
}
