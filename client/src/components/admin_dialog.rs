//! Admin dialog: password gate, then the Users / Post / Settings panels.

use leptos::prelude::*;

use super::admin_panels::{PostPanel, SettingsPanel, UsersPanel};
use super::toast_stack::show_optional_toast;
use crate::config::ServiceConfig;
use crate::state::admin::{AdminGate, AdminState, AdminTab};
use crate::state::nav::NavState;
use crate::state::notice::NoticeState;

#[component]
pub fn AdminDialog() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let admin = expect_context::<RwSignal<AdminState>>();

    let on_close = move |_| nav.update(NavState::close_admin);

    view! {
        <div class="dialog-backdrop" on:click=on_close>
            <div class="dialog dialog--admin" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>"Admin panel"</h2>
                    <button class="btn btn--ghost" type="button" aria-label="Close" on:click=on_close>
                        "✕"
                    </button>
                </div>
                <Show when=move || admin.with(AdminState::is_unlocked) fallback=|| view! { <AdminGateForm/> }>
                    <AdminWorkspace/>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn AdminGateForm() -> impl IntoView {
    let cfg = expect_context::<StoredValue<ServiceConfig>>();
    let admin = expect_context::<RwSignal<AdminState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((ticket, candidate)) = admin.try_update(AdminState::begin_unlock).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_users(&cfg.get_value(), &candidate).await;
            let toast = admin.try_update(|a| a.apply_unlock(&ticket, candidate, result)).flatten();
            show_optional_toast(notices, toast);
        });
    };

    let checking = move || admin.with(|a| a.gate == AdminGate::Checking);

    view! {
        <form class="dialog__form" on:submit=on_submit>
            <label class="field">
                <span class="field__label">"Admin password"</span>
                <input
                    class="field__input"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || admin.with(|a| a.password.clone())
                    on:input=move |ev| admin.update(|a| a.password = event_target_value(&ev))
                />
            </label>
            <button class="btn btn--primary btn--block" type="submit" disabled=checking>
                {move || if checking() { "Checking..." } else { "Unlock" }}
            </button>
        </form>
    }
}

#[component]
fn AdminWorkspace() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();

    let tab_button = move |tab: AdminTab, label: &'static str| {
        view! {
            <button
                class="admin-tabs__tab"
                class:admin-tabs__tab--active=move || admin.with(|a| a.tab == tab)
                type="button"
                on:click=move |_| admin.update(|a| a.tab = tab)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="admin-workspace">
            <div class="admin-tabs">
                {tab_button(AdminTab::Users, "Users")}
                {tab_button(AdminTab::Post, "Post")}
                {tab_button(AdminTab::Settings, "Settings")}
                <button
                    class="btn btn--outline admin-tabs__lock"
                    type="button"
                    on:click=move |_| admin.update(AdminState::lock)
                >
                    "Lock"
                </button>
            </div>
            {move || match admin.with(|a| a.tab) {
                AdminTab::Users => view! { <UsersPanel/> }.into_any(),
                AdminTab::Post => view! { <PostPanel/> }.into_any(),
                AdminTab::Settings => view! { <SettingsPanel/> }.into_any(),
            }}
        </div>
    }
}
