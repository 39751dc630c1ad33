//! Public landing page at `/`.
//!
//! Reachable without a session. The call to action depends on whether a live
//! session is already stored: signed-in visitors go straight to the dashboard.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::config::APP_NAME;
use crate::state::auth::AuthState;
use crate::util::auth::{HOME_PATH, LOGIN_PATH};

/// Label and target of the landing page button.
#[must_use]
pub fn call_to_action(auth: &AuthState) -> (&'static str, &'static str) {
    if auth.user.is_some() {
        ("Open your workspace", HOME_PATH)
    } else {
        ("Sign in", LOGIN_PATH)
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let cta = move || call_to_action(&auth.get());

    view! {
        <div class="landing">
            <header class="landing__hero">
                <h1>{APP_NAME}</h1>
                <p class="landing__tagline">
                    "Clients, cases, deadlines and documents of your practice in one place."
                </p>
                <a class="btn landing__cta" href=move || cta().1>{move || cta().0}</a>
            </header>
            <ul class="landing__features">
                <li>"Case files shared across the firm"</li>
                <li>"Hearing and deadline agenda"</li>
                <li>"Client portal for their own matters"</li>
            </ul>
        </div>
    }
}
