//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::{layout::Layout, notice_host::NoticeHost, require_auth::RequireAuth};
use crate::config::APP_NAME;
use crate::net::api::Registry;
use crate::pages::{
    dashboard::DashboardPage, landing::LandingPage, login::LoginPage, profile::ProfilePage, registry::RegistryPage,
    search::SearchPage,
};
use crate::session::browser_session;
use crate::state::{auth::AuthState, notice::NoticeState, ui::UiState};
use crate::util::auth::{HOME_PATH, sync_auth};
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and shared state signals, then sets up routing.
/// The session is read once the app is live in the browser; until then every
/// protected route renders its loading placeholder.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = browser_session();
    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let notices = RwSignal::new(NoticeState::default());

    provide_context(session.clone());
    provide_context(auth);
    provide_context(ui);
    provide_context(notices);

    Effect::new(move || {
        sync_auth(auth, &session);
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/lexdesk.css"/>
        <Title text=APP_NAME/>

        <Router>
            <NoticeHost/>
            <Routes fallback=|| view! { <Redirect path=HOME_PATH/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedShell>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("agenda") view=|| view! { <RegistryPage registry=Registry::Deadlines/> }/>
                    <Route path=StaticSegment("tasks") view=|| view! { <RegistryPage registry=Registry::Tasks/> }/>
                    <Route path=StaticSegment("decisions") view=|| view! { <RegistryPage registry=Registry::Decisions/> }/>
                    <Route path=StaticSegment("clients") view=|| view! { <RegistryPage registry=Registry::Clients/> }/>
                    <Route path=StaticSegment("cases") view=|| view! { <RegistryPage registry=Registry::Cases/> }/>
                    <Route path=StaticSegment("documents") view=|| view! { <RegistryPage registry=Registry::Documents/> }/>
                    <Route path=StaticSegment("tags") view=|| view! { <RegistryPage registry=Registry::Tags/> }/>
                    <Route path=StaticSegment("search") view=SearchPage/>
                    <Route path=StaticSegment("users") view=|| view! { <RegistryPage registry=Registry::Users/> }/>
                    <Route path=StaticSegment("audit") view=|| view! { <RegistryPage registry=Registry::Audit/> }/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Guarded chrome around every protected route.
#[component]
fn ProtectedShell() -> impl IntoView {
    view! {
        <RequireAuth>
            <Layout/>
        </RequireAuth>
    }
}
