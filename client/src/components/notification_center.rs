//! App-bar bell with the unread badge and the notification dropdown.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted inside the signed-in layout, so polling only runs while a session
//! is live. The list is fetched on mount and then every
//! [`POLL_INTERVAL_MS`]; newly arrived unread items raise a toast.

#[cfg(test)]
#[path = "notification_center_test.rs"]
mod notification_center_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::Session;
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::state::notifications::{NotificationCenter, POLL_INTERVAL_MS, created_label, entity_path, severity};

/// Toast text for `arrived` new notifications, naming the first when alone.
#[must_use]
pub fn arrival_message(arrived: usize, first_title: &str) -> String {
    if arrived == 1 && !first_title.is_empty() {
        format!("New notification: {first_title}")
    } else {
        format!("{arrived} new notifications")
    }
}

/// One fetch into `center`. Returns `false` once the session is gone and
/// polling should stop.
#[cfg(feature = "hydrate")]
async fn poll_once(
    session: &Session,
    center: RwSignal<NotificationCenter>,
    auth: RwSignal<AuthState>,
    notices: RwSignal<NoticeState>,
    navigate: &impl Fn(&str, NavigateOptions),
) -> bool {
    match crate::net::api::fetch_notifications(session).await {
        Ok(fresh) => {
            let first = fresh.iter().find(|n| !n.is_read).map(|n| (n.title.clone(), n.level));
            let arrived = center.try_update(|c| c.replace(fresh)).unwrap_or_default();
            if let (true, Some((title, level))) = (arrived > 0, first) {
                crate::components::notice_host::notify(notices, arrival_message(arrived, &title), severity(level));
            }
            true
        }
        Err(e) => {
            log::warn!("notification poll failed: {e}");
            center.update(|c| c.loading = false);
            if e.requires_login() {
                crate::pages::end_expired_session(auth, session, notices, navigate);
                return false;
            }
            true
        }
    }
}

#[component]
pub fn NotificationBell() -> impl IntoView {
    let center = RwSignal::new(NotificationCenter { loading: true, ..NotificationCenter::default() });
    let session = expect_context::<Session>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let session_poll = session.clone();
        let navigate_poll = navigate.clone();
        leptos::task::spawn_local(async move {
            loop {
                if !poll_once(&session_poll, center, auth, notices, &navigate_poll).await {
                    break;
                }
                gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, notices, POLL_INTERVAL_MS);

    let mark_read_remote = move |id: Option<u64>| {
        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let result = match id {
                    Some(id) => crate::net::api::mark_notification_read(&session, id).await,
                    None => crate::net::api::mark_all_notifications_read(&session).await,
                };
                if let Err(e) = result {
                    log::warn!("marking notification read failed: {e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&session, id);
    };

    let unread = move || center.with(NotificationCenter::unread_count);

    let mark_all = {
        let mark_read_remote = mark_read_remote.clone();
        move |_| {
            center.update(NotificationCenter::mark_all_read);
            mark_read_remote(None);
        }
    };

    // Clicks inside the panel only record where to go; navigation happens here.
    let follow = RwSignal::new(None::<&'static str>);
    Effect::new(move || {
        if let Some(path) = follow.get() {
            follow.set(None);
            navigate(path, NavigateOptions::default());
        }
    });

    let open_item = move |id: u64, was_read: bool, target: Option<&'static str>| {
        if !was_read {
            center.update(|c| c.mark_read(id));
            mark_read_remote(Some(id));
        }
        center.update(|c| c.open = false);
        if target.is_some() {
            follow.set(target);
        }
    };

    view! {
        <div class="notifications">
            <button
                class="btn notifications__bell"
                title="Notifications"
                on:click=move |_| center.update(NotificationCenter::toggle_open)
            >
                "🔔"
                <Show when=move || { unread() > 0 }>
                    <span class="notifications__badge">{unread}</span>
                </Show>
            </button>

            <Show when=move || center.with(|c| c.open)>
                <div class="notifications__panel">
                    <div class="notifications__header">
                        <span>"Notifications"</span>
                        <button
                            class="btn notifications__mark-all"
                            disabled=move || { unread() == 0 }
                            on:click=mark_all.clone()
                        >
                            "Mark all as read"
                        </button>
                    </div>
                    {
                        let open_item = open_item.clone();
                        move || {
                            let c = center.get();
                            if c.loading {
                                return view! { <p class="notifications__status">"Loading…"</p> }.into_any();
                            }
                            if c.items.is_empty() {
                                return view! { <p class="notifications__status">"No notifications."</p> }.into_any();
                            }
                            c.items
                                .into_iter()
                                .map(|n| {
                                    let open_item = open_item.clone();
                                    let target = entity_path(n.entity_type.as_deref());
                                    let (id, was_read) = (n.id, n.is_read);
                                    view! {
                                        <button
                                            class=format!("notifications__item {}", severity(n.level).class())
                                            class:notifications__item--unread=!was_read
                                            on:click=move |_| open_item(id, was_read, target)
                                        >
                                            <span class="notifications__title">{n.title}</span>
                                            <span class="notifications__message">{n.message}</span>
                                            <span class="notifications__time">{created_label(n.created_at.as_deref())}</span>
                                        </button>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }
                </div>
            </Show>
        </div>
    }
}
