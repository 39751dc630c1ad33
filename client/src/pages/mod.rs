//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its data loading and delegates chrome to `components`.
//! Every page except `landing` and `login` renders inside the route guard.

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod profile;
pub mod registry;
pub mod search;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

/// Drop the local session after the API refused it and return to `/login`.
#[cfg(feature = "hydrate")]
pub(crate) fn end_expired_session(
    auth: RwSignal<crate::state::auth::AuthState>,
    session: &crate::session::Session,
    notices: RwSignal<crate::state::notice::NoticeState>,
    navigate: &impl Fn(&str, leptos_router::NavigateOptions),
) {
    crate::util::auth::sign_out(auth, session);
    crate::components::notice_host::notify(
        notices,
        "Your session has expired. Sign in again.",
        crate::state::notice::Severity::Warning,
    );
    navigate(crate::util::auth::LOGIN_PATH, leptos_router::NavigateOptions::default());
}
