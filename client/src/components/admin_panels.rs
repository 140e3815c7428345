//! Panels shown inside an unlocked admin dialog.
//!
//! Every mutation here is keyed through `AdminState`; a follow-up list is
//! always re-fetched in full rather than patched.

use leptos::prelude::*;

use super::news_feed::refresh_news;
use super::toast_stack::show_optional_toast;
use crate::config::ServiceConfig;
use crate::net::task::RequestKey;
use crate::net::types::User;
use crate::state::admin::{AdminState, DEFAULT_CATEGORY};
use crate::state::feed::FeedState;
use crate::state::notice::NoticeState;

/// Re-fetch the user list with the accepted key. A call made while a fetch
/// is running is queued and re-run once that fetch lands.
fn refresh_users(cfg: StoredValue<ServiceConfig>, admin: RwSignal<AdminState>, notices: RwSignal<NoticeState>) {
    let Some((ticket, key)) = admin.try_update(AdminState::begin_refresh_users).flatten() else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_users(&cfg.get_value(), &key).await;
        let Some(done) = admin.try_update(|a| a.apply_users(&ticket, result)) else {
            return;
        };
        show_optional_toast(notices, done.toast);
        if done.refetch {
            refresh_users(cfg, admin, notices);
        }
    });
}

// =============================================================================
// USERS
// =============================================================================

#[component]
pub fn UsersPanel() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();

    view! {
        <div class="admin-users">
            <Show
                when=move || admin.with(|a| !a.users.is_empty())
                fallback=|| view! { <p class="admin-users__empty">"No users yet"</p> }
            >
                <ul class="admin-users__list">
                    {move || {
                        admin.with(|a| a.users.clone())
                            .into_iter()
                            .map(|user| view! { <UserRow user/> })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn UserRow(user: User) -> impl IntoView {
    let cfg = expect_context::<StoredValue<ServiceConfig>>();
    let admin = expect_context::<RwSignal<AdminState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let user_id = user.id;
    let on_verify = move |_| {
        let Some((ticket, key)) = admin.try_update(|a| a.begin_verify_user(user_id)).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result =
                crate::net::api::verify_user(&cfg.get_value(), &key, user_id, &ticket.idempotency_key).await;
            let Some(done) = admin.try_update(|a| a.apply_verify_user(&ticket, result)) else {
                return;
            };
            show_optional_toast(notices, done.toast);
            if done.refetch {
                refresh_users(cfg, admin, notices);
            }
        });
    };

    view! {
        <li class="admin-users__row">
            <div class="admin-users__identity">
                <span class="admin-users__name">{user.name}</span>
                <span class="admin-users__email">{user.email}</span>
            </div>
            {if user.is_verified {
                view! { <span class="badge badge--verified">"✓ Verified"</span> }.into_any()
            } else {
                view! {
                    <button
                        class="btn btn--primary btn--small"
                        type="button"
                        disabled=move || admin.with(|a| a.is_verifying(user_id))
                        on:click=on_verify
                    >
                        "Verify"
                    </button>
                }
                    .into_any()
            }}
        </li>
    }
}

// =============================================================================
// POST
// =============================================================================

#[component]
pub fn PostPanel() -> impl IntoView {
    let cfg = expect_context::<StoredValue<ServiceConfig>>();
    let admin = expect_context::<RwSignal<AdminState>>();
    let feed = expect_context::<RwSignal<FeedState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((ticket, key, body)) = admin.try_update(AdminState::begin_post).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::post_announcement(&cfg.get_value(), &key, &body).await;
            let Some(done) = admin.try_update(|a| a.apply_post(&ticket, result)) else {
                return;
            };
            show_optional_toast(notices, done.toast);
            if done.refetch {
                refresh_news(cfg, feed);
            }
        });
    };

    let posting = move || admin.with(|a| a.is_pending(&RequestKey::PostAnnouncement));

    view! {
        <form class="dialog__form admin-post" on:submit=on_submit>
            <label class="field">
                <span class="field__label">"Title"</span>
                <input
                    class="field__input"
                    type="text"
                    prop:value=move || admin.with(|a| a.post.title.clone())
                    on:input=move |ev| admin.update(|a| a.post.title = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">"Category"</span>
                <input
                    class="field__input"
                    type="text"
                    placeholder=DEFAULT_CATEGORY
                    prop:value=move || admin.with(|a| a.post.category.clone())
                    on:input=move |ev| admin.update(|a| a.post.category = event_target_value(&ev))
                />
            </label>
            <label class="field">
                <span class="field__label">"Content"</span>
                <textarea
                    class="field__input field__input--multiline"
                    rows="6"
                    prop:value=move || admin.with(|a| a.post.content.clone())
                    on:input=move |ev| admin.update(|a| a.post.content = event_target_value(&ev))
                ></textarea>
            </label>
            <button class="btn btn--primary btn--block" type="submit" disabled=posting>
                "Publish"
            </button>
        </form>
    }
}

// =============================================================================
// SETTINGS
// =============================================================================

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let cfg = expect_context::<StoredValue<ServiceConfig>>();
    let admin = expect_context::<RwSignal<AdminState>>();
    let feed = expect_context::<RwSignal<FeedState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((ticket, key, about)) = admin.try_update(AdminState::begin_update_about).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_about(&cfg.get_value(), &key, &about).await;
            let Some((next, toast)) = admin.try_update(|a| a.apply_update_about(&ticket, about, result)) else {
                return;
            };
            if let Some(next) = next {
                feed.update(|f| f.set_about(next));
            }
            show_optional_toast(notices, toast);
        });
    };

    let saving = move || admin.with(|a| a.is_pending(&RequestKey::UpdateAbout));

    view! {
        <form class="dialog__form admin-settings" on:submit=on_submit>
            <label class="field">
                <span class="field__label">"About text"</span>
                <textarea
                    class="field__input field__input--multiline"
                    rows="6"
                    placeholder=move || feed.with(|f| f.about.clone())
                    prop:value=move || admin.with(|a| a.about_draft.clone())
                    on:input=move |ev| admin.update(|a| a.about_draft = event_target_value(&ev))
                ></textarea>
            </label>
            <button class="btn btn--primary btn--block" type="submit" disabled=saving>
                "Save"
            </button>
        </form>
    }
}
