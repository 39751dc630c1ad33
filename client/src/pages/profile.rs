//! Profile page: the signed-in user's claims and server-side account record.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::state::auth::AuthState;
use crate::state::load::Load;

const HIDDEN_FIELDS: [&str; 3] = ["password", "otp_secret", "id"];

/// Scalar fields of the `/users/me/` record as display pairs.
#[must_use]
pub fn profile_fields(record: &Value) -> Vec<(String, String)> {
    let Some(map) = record.as_object() else {
        return Vec::new();
    };
    map.iter()
        .filter(|(key, _)| !HIDDEN_FIELDS.contains(&key.as_str()))
        .filter_map(|(key, value)| {
            let text = match value {
                Value::String(s) if !s.is_empty() => s.clone(),
                Value::Bool(b) => if *b { "yes" } else { "no" }.to_owned(),
                Value::Number(n) => n.to_string(),
                _ => return None,
            };
            Some((key.replace('_', " "), text))
        })
        .collect()
}

/// Remaining lifetime of the access token, for display.
#[must_use]
pub fn expiry_label(exp: Option<i64>, now_secs: i64) -> String {
    match exp {
        None => "unknown".to_owned(),
        Some(exp) if exp <= now_secs => "expired".to_owned(),
        Some(exp) => {
            let minutes = (exp - now_secs + 59) / 60;
            format!("in {minutes} min")
        }
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let record = RwSignal::new(Load::<Value>::Loading);

    #[cfg(feature = "hydrate")]
    {
        let notices = expect_context::<RwSignal<crate::state::notice::NoticeState>>();
        let session = expect_context::<crate::session::Session>();
        let navigate = leptos_router::hooks::use_navigate();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_me(&session).await;
            if let Err(e) = &result {
                if e.requires_login() {
                    super::end_expired_session(auth, &session, notices, &navigate);
                }
            }
            record.set(Load::from_result(result));
        });
    }

    let claims = move || {
        auth.get().user.map(|user| {
            let expires = expiry_label(user.exp, crate::session::claims::now_epoch_secs());
            view! {
                <dl class="profile__claims">
                    <dt>"Username"</dt>
                    <dd>{user.username}</dd>
                    <dt>"Email"</dt>
                    <dd>{user.email.unwrap_or_default()}</dd>
                    <dt>"Role"</dt>
                    <dd>{user.role.label()}</dd>
                    <dt>"Session expires"</dt>
                    <dd>{expires}</dd>
                </dl>
            }
        })
    };

    view! {
        <section class="profile">
            <h1>"Profile"</h1>
            {claims}
            <h2>"Account"</h2>
            {move || match record.get() {
                Load::Loading => view! { <p class="profile__status">"Loading…"</p> }.into_any(),
                Load::Failed(msg) => view! { <p class="profile__status profile__status--error">{msg}</p> }.into_any(),
                Load::Ready(value) => view! {
                    <dl class="profile__account">
                        {profile_fields(&value)
                            .into_iter()
                            .map(|(key, text)| view! { <dt>{key}</dt><dd>{text}</dd> })
                            .collect_view()}
                    </dl>
                }
                .into_any(),
            }}
        </section>
    }
}
