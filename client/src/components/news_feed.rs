//! News feed list and cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered for the Home tab. The feed is fetched once at startup and again
//! in full after an admin publishes; failures leave the list as it was.

use leptos::prelude::*;

use crate::config::ServiceConfig;
use crate::net::types::NewsItem;
use crate::state::feed::FeedState;
use crate::util::format::{author_label, format_timestamp};

/// Re-fetch the whole feed into `feed`.
pub fn refresh_news(cfg: StoredValue<ServiceConfig>, feed: RwSignal<FeedState>) {
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_news(&cfg.get_value()).await;
        feed.update(|f| f.apply_news(result));
    });
}

/// Fetch the about text into `feed`.
pub fn refresh_about(cfg: StoredValue<ServiceConfig>, feed: RwSignal<FeedState>) {
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_about(&cfg.get_value()).await;
        feed.update(|f| f.apply_about(result));
    });
}

#[component]
pub fn NewsFeed() -> impl IntoView {
    let feed = expect_context::<RwSignal<FeedState>>();

    view! {
        <div class="news-feed">
            {move || {
                feed.get()
                    .news
                    .into_iter()
                    .map(|item| view! { <NewsCard item/> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn NewsCard(item: NewsItem) -> impl IntoView {
    let badge_class = if item.is_admin_post { "badge badge--admin" } else { "badge badge--secondary" };
    let verified = item.is_verified.unwrap_or(false);
    let author = author_label(item.author_name.as_deref()).to_owned();
    let published = format_timestamp(&item.published_at);
    let image = item.image_url.clone().filter(|src| !src.is_empty());

    view! {
        <article class="news-card">
            {image.map(|src| view! { <img class="news-card__image" src=src alt=""/> })}
            <div class="news-card__badges">
                <span class=badge_class>{item.category}</span>
                <Show when=move || verified>
                    <span class="badge badge--verified">"✓ Verified"</span>
                </Show>
            </div>
            <h2 class="news-card__title">{item.title}</h2>
            <p class="news-card__content">{item.content}</p>
            <div class="news-card__meta">
                <span class="news-card__author">{author}</span>
                <span aria-hidden="true">"•"</span>
                <time class="news-card__time">{published}</time>
            </div>
        </article>
    }
}
