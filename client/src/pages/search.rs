//! Full-text document search.
//!
//! Rendered inside the route guard. Nothing is requested until the user
//! submits a non-blank query; a search answered with `SessionExpired` or 401
//! ends the session like any other authenticated call.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use leptos::prelude::*;

use super::registry::RegistryRows;
use crate::state::load::Load;

/// Line shown above the results of `query`.
#[must_use]
pub fn results_summary(total: u64, query: &str) -> String {
    match total {
        0 => format!("No documents match \"{query}\"."),
        1 => format!("1 document matches \"{query}\"."),
        n => format!("{n} documents match \"{query}\"."),
    }
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    // Query the current results belong to; `None` until the first search.
    let searched = RwSignal::new(None::<String>);
    let results = RwSignal::new(Load::<RegistryRows>::Loading);

    #[cfg(feature = "hydrate")]
    let (auth, notices, session, navigate) = (
        expect_context::<RwSignal<crate::state::auth::AuthState>>(),
        expect_context::<RwSignal<crate::state::notice::NoticeState>>(),
        expect_context::<crate::session::Session>(),
        leptos_router::hooks::use_navigate(),
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = query.get().trim().to_owned();
        if text.is_empty() || (searched.get().is_some() && results.with(Load::is_loading)) {
            return;
        }
        searched.set(Some(text.clone()));
        results.set(Load::Loading);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::search_documents(&session, &text).await;
                if let Err(e) = &result {
                    log::warn!("document search failed: {e}");
                    if e.requires_login() {
                        super::end_expired_session(auth, &session, notices, &navigate);
                    }
                }
                results.set(Load::from_result(result.map(RegistryRows::from)));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = text;
    };

    view! {
        <section class="registry search">
            <header class="registry__header">
                <h1>"Search"</h1>
            </header>
            <form class="search__form" on:submit=on_submit>
                <input
                    class="search__input"
                    type="search"
                    placeholder="Search documents by name or content"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn search__submit" type="submit" disabled=move || query.with(|q| q.trim().is_empty())>
                    "Search"
                </button>
            </form>
            {move || {
                let Some(text) = searched.get() else {
                    return view! { <p class="registry__status">"Type a few words to search your documents."</p> }
                        .into_any();
                };
                match results.get() {
                    Load::Loading => view! { <p class="registry__status">"Searching…"</p> }.into_any(),
                    Load::Failed(msg) => {
                        view! { <p class="registry__status registry__status--error">{msg}</p> }.into_any()
                    }
                    Load::Ready(rows) => view! {
                        <p class="registry__status">{results_summary(rows.total, &text)}</p>
                        <ul class="registry__list">
                            {rows
                                .labels
                                .into_iter()
                                .map(|label| view! { <li class="registry__row">{label}</li> })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                }
            }}
        </section>
    }
}
