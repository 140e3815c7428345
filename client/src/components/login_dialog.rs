//! Sign-in dialog: email entry, then the 4-character code.

use leptos::prelude::*;

use super::toast_stack::show_optional_toast;
use crate::config::ServiceConfig;
use crate::state::login::{CODE_LENGTH, LoginForm, LoginStage};
use crate::state::nav::NavState;
use crate::state::notice::NoticeState;
use crate::state::session::SessionState;
use crate::util::storage::LocalStorage;

#[component]
pub fn LoginDialog() -> impl IntoView {
    let cfg = expect_context::<StoredValue<ServiceConfig>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let login = expect_context::<RwSignal<LoginForm>>();
    let nav = expect_context::<RwSignal<NavState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let on_close = move |_| nav.update(NavState::close_login);

    let on_send_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((ticket, email)) = login.try_update(LoginForm::begin_send_code).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::send_code(&cfg.get_value(), &email).await;
            let toast = login.try_update(|l| l.apply_send_code(&ticket, result)).flatten();
            show_optional_toast(notices, toast);
        });
    };

    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((ticket, email, code)) = login.try_update(LoginForm::begin_verify_code).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = crate::net::api::verify_code(&cfg.get_value(), &email, &code).await;
            let Some((user, toast)) = login.try_update(|l| l.apply_verify_code(&ticket, result)) else {
                return;
            };
            if let Some(user) = user {
                session.update(|s| s.set_user(user, &LocalStorage));
                nav.update(NavState::close_login);
            }
            show_optional_toast(notices, toast);
        });
    };

    let stage = move || login.with(|l| l.stage);
    let pending = move || login.with(LoginForm::is_pending);

    view! {
        <div class="dialog-backdrop" on:click=on_close>
            <div class="dialog dialog--login" on:click=move |ev| ev.stop_propagation()>
                <h2>"Sign in / Register"</h2>
                <Show
                    when=move || stage() == LoginStage::CodeSent
                    fallback=move || {
                        view! {
                            <form class="dialog__form" on:submit=on_send_code>
                                <label class="field">
                                    <span class="field__label">"Email"</span>
                                    <input
                                        class="field__input"
                                        type="email"
                                        placeholder="your@email.com"
                                        prop:value=move || login.with(|l| l.email.clone())
                                        on:input=move |ev| login.update(|l| l.email = event_target_value(&ev))
                                    />
                                </label>
                                <button class="btn btn--primary btn--block" type="submit" disabled=pending>
                                    "Send code"
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="dialog__form" on:submit=on_verify_code>
                        <label class="field">
                            <span class="field__label">
                                {format!("Enter the {CODE_LENGTH}-character code from your email")}
                            </span>
                            <input
                                class="field__input field__input--code"
                                type="text"
                                inputmode="numeric"
                                autocomplete="one-time-code"
                                maxlength=CODE_LENGTH.to_string()
                                prop:value=move || login.with(|l| l.code.clone())
                                on:input=move |ev| login.update(|l| l.set_code(&event_target_value(&ev)))
                            />
                        </label>
                        <button
                            class="btn btn--primary btn--block"
                            type="submit"
                            disabled=move || !login.with(LoginForm::can_confirm) || pending()
                        >
                            "Confirm"
                        </button>
                        <button
                            class="btn btn--link"
                            type="button"
                            on:click=move |_| login.update(LoginForm::change_email)
                        >
                            "Use another email"
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
