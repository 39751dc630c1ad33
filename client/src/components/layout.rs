//! Application chrome for signed-in views: app bar, navigation drawer, and
//! the routed content outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! The drawer lists only the entries the current role may see, and the app
//! bar carries the notification bell. Logging out
//! clears local storage, re-syncs the auth signal, and returns to `/login`
//! without calling the server.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::notice_host::notify;
use crate::components::notification_center::NotificationBell;
use crate::config::APP_NAME;
use crate::session::Session;
use crate::state::auth::AuthState;
use crate::state::notice::{NoticeState, Severity};
use crate::state::ui::UiState;
use crate::util::auth::{LOGIN_PATH, sign_out};
use crate::util::menu::visible_items;

#[component]
pub fn Layout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let items = move || visible_items(auth.get().user.map(|user| user.role));
    let role_label = move || auth.get().user.map(|user| user.role.label()).unwrap_or_default();

    let on_logout = move |_| {
        sign_out(auth, &session);
        notify(notices, "Signed out.", Severity::Info);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="app-shell" class:app-shell--collapsed=move || !ui.get().drawer_open>
            <header class="app-bar">
                <button
                    class="btn app-bar__menu"
                    title="Toggle navigation"
                    on:click=move |_| ui.update(UiState::toggle_drawer)
                >
                    "☰"
                </button>
                <span class="app-bar__title">{APP_NAME}</span>
                <span class="app-bar__spacer"></span>

                <NotificationBell/>

                <button
                    class="btn app-bar__dark-toggle"
                    title="Toggle dark mode"
                    on:click=move |_| {
                        let next = crate::util::dark_mode::toggle(ui.get().dark_mode);
                        ui.update(|u| u.dark_mode = next);
                    }
                >
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>

                <a href="/profile" class="app-bar__user">
                    {move || auth.get().display_name()}
                    <span class="app-bar__role">{role_label}</span>
                </a>

                <button class="btn app-bar__logout" title="Sign out" on:click=on_logout>
                    "Sign out"
                </button>
            </header>

            <nav class="drawer">
                <For each=items key=|item| item.path let:item>
                    <a
                        href=item.path
                        class="drawer__item"
                        class:drawer__item--active=move || pathname.get().starts_with(item.path)
                    >
                        <span class="drawer__icon">{item.icon}</span>
                        <span class="drawer__label">{item.label}</span>
                    </a>
                </For>
            </nav>

            <main class="app-main">
                <Outlet/>
            </main>
        </div>
    }
}
