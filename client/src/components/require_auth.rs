//! Route guard wrapping every protected view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard asks the session store on each navigation whether a live access
//! token is stored. It never refreshes; an expired token sends the browser to
//! `/login` even when a refresh token is still stored.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::session::Session;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardDecision, guard_memo};

/// Render `children` only for an authenticated session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let decision = guard_memo(auth, use_location().pathname.into(), session);

    Effect::new(move || {
        if let GuardDecision::Redirect(path) = decision.get() {
            log::debug!("route guard: redirecting to {path}");
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GuardDecision::Admit => children().into_any(),
        GuardDecision::Pending => view! { <div class="route-pending">"Loading…"</div> }.into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
    }
}
