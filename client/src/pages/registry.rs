//! Generic list page for one registry (clients, cases, documents, ...).
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside the route guard. Data comes through the authenticated API
//! helper; a listing that ends in `SessionExpired` or 401 sends the user back
//! to `/login`.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use leptos::prelude::*;

use crate::net::api::Registry;
use crate::net::types::{Listing, row_label};
use crate::state::load::Load;

/// How many rows of a listing a dashboard card previews.
pub const PREVIEW_ROWS: usize = 5;

/// Display-ready rows of a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryRows {
    pub total: u64,
    pub labels: Vec<String>,
}

impl From<Listing> for RegistryRows {
    fn from(listing: Listing) -> Self {
        let total = listing.total();
        let labels = listing.into_rows().iter().map(row_label).collect();
        Self { total, labels }
    }
}

impl RegistryRows {
    /// The first `n` labels.
    #[must_use]
    pub fn preview(&self, n: usize) -> &[String] {
        &self.labels[..self.labels.len().min(n)]
    }
}

/// Fetch `registry` into `target`, ending the session if the API demands it.
pub(crate) fn load_registry(registry: Registry, target: RwSignal<Load<RegistryRows>>) {
    target.set(Load::Loading);
    #[cfg(feature = "hydrate")]
    {
        let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
        let notices = expect_context::<RwSignal<crate::state::notice::NoticeState>>();
        let session = expect_context::<crate::session::Session>();
        let navigate = leptos_router::hooks::use_navigate();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_listing(&session, registry).await;
            if let Err(e) = &result {
                log::warn!("{} listing failed: {e}", registry.title());
                if e.requires_login() {
                    super::end_expired_session(auth, &session, notices, &navigate);
                }
            }
            target.set(Load::from_result(result.map(RegistryRows::from)));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = registry;
}

#[component]
pub fn RegistryPage(registry: Registry) -> impl IntoView {
    let rows = RwSignal::new(Load::<RegistryRows>::Loading);
    let reload = RwSignal::new(0_u32);

    Effect::new(move || {
        reload.track();
        load_registry(registry, rows);
    });

    view! {
        <section class="registry">
            <header class="registry__header">
                <h1>{registry.title()}</h1>
                <span class="registry__count">
                    {move || match rows.get() {
                        Load::Ready(r) => format!("{} total", r.total),
                        _ => String::new(),
                    }}
                </span>
                <button
                    class="btn registry__reload"
                    title="Reload"
                    disabled=move || rows.with(Load::is_loading)
                    on:click=move |_| reload.update(|n| *n += 1)
                >
                    "↻"
                </button>
            </header>
            {move || match rows.get() {
                Load::Loading => view! { <p class="registry__status">"Loading…"</p> }.into_any(),
                Load::Failed(msg) => view! { <p class="registry__status registry__status--error">{msg}</p> }.into_any(),
                Load::Ready(r) if r.labels.is_empty() => {
                    view! { <p class="registry__status">"No entries yet."</p> }.into_any()
                }
                Load::Ready(r) => view! {
                    <ul class="registry__list">
                        {r.labels.into_iter().map(|label| view! { <li class="registry__row">{label}</li> }).collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </section>
    }
}
