//! Toast notices pinned to the top of the viewport.

use leptos::prelude::*;

use crate::state::notice::{NOTICE_TIMEOUT_MS, NoticeKind, NoticeState, Toast};

/// Show `toast` and schedule its dismissal.
pub fn show_toast(notices: RwSignal<NoticeState>, toast: Toast) {
    let Some(id) = notices.try_update(|n| n.push(toast)) else {
        return;
    };
    leptos::task::spawn_local(async move {
        crate::util::timer::sleep_ms(NOTICE_TIMEOUT_MS).await;
        notices.update(|n| n.dismiss(id));
    });
}

/// Show `toast` if there is one.
pub fn show_optional_toast(notices: RwSignal<NoticeState>, toast: Option<Toast>) {
    if let Some(toast) = toast {
        show_toast(notices, toast);
    }
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        let is_error = notice.kind == NoticeKind::Error;
                        view! {
                            <div
                                class="toast"
                                class:toast--error=is_error
                                on:click=move |_| notices.update(|n| n.dismiss(id))
                            >
                                {notice.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
