//! Login page: username/password, then a one-time code when the account
//! has two-factor authentication enabled.
//!
//! SYSTEM CONTEXT
//! ==============
//! The first submit calls `SessionStore::login`. A response without an access
//! token but with `two_factor_required` switches the form to the code step,
//! which calls `verify_otp` with the same credentials. Either call that stores
//! a session re-syncs the auth signal and lands on the dashboard.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::config::APP_NAME;
use crate::net::types::LoginPayload;
use crate::session::SessionError;

pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";
pub const ACCESS_DENIED: &str = "Access denied.";
pub const INVALID_OTP: &str = "Invalid security code.";
pub const GENERIC_FAILURE: &str = "Sign-in failed. Please try again.";

/// Which form the page currently shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginStep {
    #[default]
    Credentials,
    Otp,
}

/// What a successful login/verify response means for the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    SignedIn,
    SecondFactor,
    /// Neither a token nor a second-factor prompt.
    Incomplete,
}

#[must_use]
pub fn login_outcome(payload: &LoginPayload) -> LoginOutcome {
    if payload.access.is_some() {
        LoginOutcome::SignedIn
    } else if payload.two_factor_required {
        LoginOutcome::SecondFactor
    } else {
        LoginOutcome::Incomplete
    }
}

/// Reject empty input before a request is made.
///
/// # Errors
///
/// Returns the message to show next to the form.
pub fn validate(step: LoginStep, username: &str, password: &str, otp_code: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() || password.is_empty() {
        return Err("Enter your username and password.");
    }
    if step == LoginStep::Otp && otp_code.trim().is_empty() {
        return Err("Enter the security code.");
    }
    Ok(())
}

/// User-facing message for a failed login or code check.
#[must_use]
pub fn login_error_message(error: &SessionError) -> String {
    let Some(api) = error.api() else {
        return GENERIC_FAILURE.to_owned();
    };
    match api.status() {
        Some(401) => INVALID_CREDENTIALS.to_owned(),
        Some(403) => ACCESS_DENIED.to_owned(),
        _ => {
            if let Some(detail) = api.detail() {
                detail
            } else if api.has_field_error("otp_code") {
                INVALID_OTP.to_owned()
            } else {
                GENERIC_FAILURE.to_owned()
            }
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
    let notices = expect_context::<RwSignal<crate::state::notice::NoticeState>>();
    let session = expect_context::<crate::session::Session>();
    let navigate = leptos_router::hooks::use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let otp_code = RwSignal::new(String::new());
    let step = RwSignal::new(LoginStep::Credentials);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current_step = step.get();
        let user_value = username.get().trim().to_owned();
        let pass_value = password.get();
        let code_value = otp_code.get().trim().to_owned();
        if let Err(msg) = validate(current_step, &user_value, &pass_value, &code_value) {
            error.set(msg.to_owned());
            return;
        }
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::components::notice_host::notify;
            use crate::state::notice::Severity;

            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = match current_step {
                    LoginStep::Credentials => session.login(&user_value, &pass_value).await,
                    LoginStep::Otp => session.verify_otp(&user_value, &pass_value, &code_value).await,
                };
                match result.as_ref().map(login_outcome) {
                    Ok(LoginOutcome::SignedIn) => {
                        crate::util::auth::sync_auth(auth, &session);
                        notify(notices, "Signed in. Welcome back.", Severity::Success);
                        navigate(crate::util::auth::HOME_PATH, leptos_router::NavigateOptions::default());
                    }
                    Ok(LoginOutcome::SecondFactor) => {
                        step.set(LoginStep::Otp);
                        notify(notices, "Two-factor authentication required.", Severity::Info);
                    }
                    Ok(LoginOutcome::Incomplete) => {
                        notify(notices, GENERIC_FAILURE, Severity::Error);
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        notify(notices, login_error_message(e), Severity::Error);
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, notices, &session, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{APP_NAME}</h1>
                <p class="login-card__subtitle">
                    {move || match step.get() {
                        LoginStep::Credentials => "Sign in to your workspace",
                        LoginStep::Otp => "Enter the code sent to you",
                    }}
                </p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        disabled=move || step.get() == LoginStep::Otp
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        disabled=move || step.get() == LoginStep::Otp
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || step.get() == LoginStep::Otp>
                        <input
                            class="login-input login-input--code"
                            type="text"
                            inputmode="numeric"
                            maxlength="6"
                            placeholder="123456"
                            prop:value=move || otp_code.get()
                            on:input=move |ev| otp_code.set(event_target_value(&ev))
                        />
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || match (busy.get(), step.get()) {
                            (true, _) => "Signing in…",
                            (false, LoginStep::Credentials) => "Sign in",
                            (false, LoginStep::Otp) => "Verify code",
                        }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
