//! Landing page after sign-in.
//!
//! Staff see counts and recent entries across the firm's registries; a
//! `CLIENT` account sees only its own cases and documents.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use super::registry::{PREVIEW_ROWS, RegistryRows, load_registry};
use crate::net::api::Registry;
use crate::session::Role;
use crate::state::auth::AuthState;
use crate::state::load::Load;

static STAFF_CARDS: [Registry; 4] = [Registry::Clients, Registry::Cases, Registry::Documents, Registry::Deadlines];
static CLIENT_CARDS: [Registry; 2] = [Registry::Cases, Registry::Documents];

/// Registries summarized on the dashboard for `role`.
#[must_use]
pub fn dashboard_cards(role: Option<Role>) -> &'static [Registry] {
    if role == Some(Role::Client) { &CLIENT_CARDS[..] } else { &STAFF_CARDS[..] }
}

#[must_use]
pub fn greeting(state: &AuthState) -> String {
    match state.user.as_ref().map(|u| u.role) {
        Some(Role::Client) => format!("Welcome, {}. Here is where your matters stand.", state.display_name()),
        _ => format!("Welcome back, {}.", state.display_name()),
    }
}

fn registry_path(registry: Registry) -> &'static str {
    match registry {
        Registry::Clients => "/clients",
        Registry::Cases => "/cases",
        Registry::Documents => "/documents",
        Registry::Deadlines => "/agenda",
        Registry::Tasks => "/tasks",
        Registry::Decisions => "/decisions",
        Registry::Tags => "/tags",
        Registry::Users => "/users",
        Registry::Audit => "/audit",
    }
}

#[component]
fn SummaryCard(registry: Registry, rows: RwSignal<Load<RegistryRows>>) -> impl IntoView {
    view! {
        <a class="summary-card" href=registry_path(registry)>
            <span class="summary-card__title">{registry.title()}</span>
            <span class="summary-card__count">
                {move || match rows.get() {
                    Load::Ready(r) => r.total.to_string(),
                    Load::Loading => "…".to_owned(),
                    Load::Failed(_) => "–".to_owned(),
                }}
            </span>
            <ul class="summary-card__recent">
                {move || match rows.get() {
                    Load::Ready(r) => r
                        .preview(PREVIEW_ROWS)
                        .iter()
                        .map(|label| view! { <li>{label.clone()}</li> })
                        .collect_view()
                        .into_any(),
                    Load::Failed(msg) => view! { <li class="summary-card__error">{msg}</li> }.into_any(),
                    Load::Loading => ().into_any(),
                }}
            </ul>
        </a>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let cards = move || {
        let role = auth.with(|a| a.user.as_ref().map(|u| u.role));
        dashboard_cards(role)
            .iter()
            .map(|&registry| {
                let rows = RwSignal::new(Load::Loading);
                load_registry(registry, rows);
                view! { <SummaryCard registry=registry rows=rows/> }
            })
            .collect_view()
    };

    view! {
        <section class="dashboard">
            <header class="dashboard__header">
                <h1>"Dashboard"</h1>
                <p class="dashboard__greeting">{move || auth.with(greeting)}</p>
            </header>
            <div class="dashboard__cards">{cards}</div>
        </section>
    }
}
