//! Signed-in user's profile card with inline editing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Edits live in `ProfileForm` until saved; a successful save replaces the
//! session user in memory and in local storage in one step.

use leptos::prelude::*;

use super::toast_stack::{show_optional_toast, show_toast};
use crate::config::ServiceConfig;
use crate::net::types::User;
use crate::state::login::LoginForm;
use crate::state::nav::{NavState, Tab};
use crate::state::notice::{NoticeState, Toast};
use crate::state::profile::ProfileForm;
use crate::state::session::SessionState;
use crate::util::format::{avatar_initial, format_date};
use crate::util::storage::LocalStorage;

const SIGNED_OUT: Toast = Toast::info("Signed out");

#[component]
pub fn ProfileView(user: User) -> impl IntoView {
    let cfg = expect_context::<StoredValue<ServiceConfig>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let profile = expect_context::<RwSignal<ProfileForm>>();
    let login = expect_context::<RwSignal<LoginForm>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let seed = user.clone();
    let on_edit = move |_| profile.update(|p| p.begin(&seed));
    let on_cancel = move |_| profile.update(ProfileForm::cancel);

    let on_save = move |_| {
        let Some(user_id) = session.with_untracked(SessionState::user_id) else {
            return;
        };
        let Some((ticket, body)) = profile.try_update(|p| p.begin_save(user_id)).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_profile(&cfg.get_value(), &body).await;
            let Some((next, toast)) = profile.try_update(|p| p.apply_save(&ticket, result)) else {
                return;
            };
            if let Some(next) = next {
                session.update(|s| s.set_user(next, &LocalStorage));
            }
            show_optional_toast(notices, toast);
        });
    };

    let on_sign_out = move |_| {
        profile.update(ProfileForm::cancel);
        login.update(LoginForm::reset);
        session.update(|s| s.sign_out(&LocalStorage));
        nav.update(|n| {
            n.select_tab(Tab::Home, false);
        });
        show_toast(notices, SIGNED_OUT);
    };

    let avatar = user.avatar_url.clone().filter(|src| !src.is_empty());
    let initial = avatar_initial(&user.name);
    let verified = user.is_verified;
    let location = user.location.clone().filter(|l| !l.is_empty());
    let registered = format_date(&user.created_at);

    view! {
        <section class="card profile-view">
            <div class="profile-view__header">
                <div class="avatar">
                    {match avatar {
                        Some(src) => view! { <img class="avatar__image" src=src alt=""/> }.into_any(),
                        None => view! { <span class="avatar__fallback">{initial}</span> }.into_any(),
                    }}
                </div>
                <div class="profile-view__identity">
                    <div class="profile-view__name-row">
                        <h2 class="profile-view__name">{user.name.clone()}</h2>
                        <Show when=move || verified>
                            <span class="badge badge--verified">"✓ Verified"</span>
                        </Show>
                    </div>
                    <p class="profile-view__email">{user.email.clone()}</p>
                    {location.map(|l| view! { <p class="profile-view__location">"📍 " {l}</p> })}
                    <p class="profile-view__registered">"Registered: " {registered}</p>
                </div>
            </div>

            <Show
                when=move || profile.with(|p| p.editing)
                fallback=move || {
                    view! {
                        <div class="profile-view__actions">
                            <button class="btn btn--primary" on:click=on_edit.clone()>"Edit profile"</button>
                            <button class="btn btn--outline" on:click=on_sign_out>"Sign out"</button>
                        </div>
                    }
                }
            >
                <div class="profile-view__form">
                    <label class="field">
                        <span class="field__label">"Name"</span>
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || profile.with(|p| p.name.clone())
                            on:input=move |ev| profile.update(|p| p.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Location"</span>
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || profile.with(|p| p.location.clone())
                            on:input=move |ev| profile.update(|p| p.location = event_target_value(&ev))
                        />
                    </label>
                    <div class="profile-view__actions">
                        <button
                            class="btn btn--primary"
                            disabled=move || profile.with(ProfileForm::is_saving)
                            on:click=on_save
                        >
                            "Save"
                        </button>
                        <button class="btn btn--outline" on:click=on_cancel>"Cancel"</button>
                    </div>
                </div>
            </Show>
        </section>
    }
}
