//! Full-screen splash shown while the first reads are in flight.

use leptos::prelude::*;

#[component]
pub fn Splash() -> impl IntoView {
    view! {
        <div class="splash">
            <div class="splash__content">
                <div class="splash__icon" aria-hidden="true">"📰"</div>
                <h1 class="splash__title">"News of World"</h1>
                <p class="splash__subtitle">"Your source of world news"</p>
            </div>
        </div>
    }
}
