//! Login page: username + password against the profile API.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::BrowserApi;
use crate::net::error::ApiError;
use crate::net::types::Credentials;
use crate::routes::AppRoute;
use crate::state::auth::use_auth;
use crate::state::session::sign_in;
use crate::util::auth::install_pending_redirect;

/// Shown when the server rejects the login without a message of its own.
const LOGIN_FAILED_MESSAGE: &str = "Invalid username or password";
const MISSING_FIELDS_MESSAGE: &str = "Enter both username and password.";
const SIGN_IN_UNAVAILABLE_MESSAGE: &str = "Sign in failed. Please try again.";

/// Credential rejections get the login fallback; other failures get a
/// retry message.
fn login_error_message(err: &ApiError) -> String {
    match err.status() {
        Some(400 | 401 | 403) => err.user_message(LOGIN_FAILED_MESSAGE),
        _ => err.user_message(SIGN_IN_UNAVAILABLE_MESSAGE),
    }
}

fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

fn submit_label(busy: bool) -> &'static str {
    if busy { "Signing in..." } else { "Sign in" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let api = expect_context::<BrowserApi>();
    let redirect = install_pending_redirect(use_navigate());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        let credentials = match validate_login_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match sign_in(&api, auth, &credentials).await {
                Ok(profile) => {
                    log::info!("signed in as {}", profile.username);
                    redirect.set(Some(AppRoute::Home.path().to_owned()));
                }
                Err(e) => error.set(Some(login_error_message(&e))),
            }
            busy.set(false);
        });
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Sign in to your account"</h1>
                <p class="auth-card__subtitle">
                    "Or "
                    <a href=AppRoute::Signup.path()>"create a new account"</a>
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <label for="login-username">"Username"</label>
                    <input
                        id="login-username"
                        class="auth-input"
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="auth-input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="form-error" role="alert">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || submit_label(busy.get())}
                    </button>
                </form>
            </div>
        </main>
    }
}
