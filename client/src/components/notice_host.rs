//! Toast area for the latest notice, closed after a fixed delay.

use leptos::prelude::*;

use crate::state::notice::{NOTICE_TIMEOUT_MS, NoticeState, Severity};

/// Show `message` in the toast area, replacing any visible notice.
pub fn notify(notices: RwSignal<NoticeState>, message: impl Into<String>, severity: Severity) {
    let message = message.into();
    notices.update(|n| {
        n.show(message, severity);
    });
}

#[component]
pub fn NoticeHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    // One timer per notice; `dismiss` ignores ids that are no longer shown.
    Effect::new(move || {
        let Some(id) = notices.with(|n| n.current.as_ref().map(|notice| notice.id)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            notices.update(|n| n.dismiss(id));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, NOTICE_TIMEOUT_MS);
    });

    move || {
        notices.get().current.map(|notice| {
            let id = notice.id;
            view! {
                <div class=format!("notice {}", notice.severity.class()) role="status">
                    <span class="notice__message">{notice.message}</span>
                    <button
                        class="notice__close"
                        title="Dismiss"
                        on:click=move |_| notices.update(|n| n.dismiss(id))
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
