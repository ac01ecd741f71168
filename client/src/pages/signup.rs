//! Registration page.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::BrowserApi;
use crate::net::types::SignupRequest;
use crate::routes::AppRoute;
use crate::util::auth::install_pending_redirect;

const SIGNUP_FAILED_MESSAGE: &str = "Registration failed. Please try again.";
const MIN_PASSWORD_LEN: usize = 8;

/// Raw signup form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SignupForm {
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    password: String,
    confirm_password: String,
}

/// Check the form and build the request body. Returns the first problem.
fn validate_signup(form: &SignupForm) -> Result<SignupRequest, &'static str> {
    let username = form.username.trim();
    let email = form.email.trim();
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();

    if [username, email, first_name, last_name].iter().any(|v| v.is_empty()) || form.password.is_empty() {
        return Err("All fields are required.");
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address.");
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match.");
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters long.");
    }

    Ok(SignupRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = expect_context::<BrowserApi>();
    let redirect = install_pending_redirect(use_navigate());

    let form = RwSignal::new(SignupForm::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        let request = match validate_signup(&form.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.signup(&request).await {
                Ok(()) => {
                    log::info!("registered {}", request.username);
                    redirect.set(Some(AppRoute::Login.path().to_owned()));
                }
                Err(e) => {
                    log::warn!("signup failed: {e}");
                    error.set(Some(e.user_message(SIGNUP_FAILED_MESSAGE)));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <p class="auth-card__subtitle">
                    "Already registered? "
                    <a href=AppRoute::Login.path()>"Sign in"</a>
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-form__row">
                        <SignupField
                            id="signup-first-name"
                            label="First name"
                            kind="text"
                            value=Signal::derive(move || form.with(|f| f.first_name.clone()))
                            on_input=Callback::new(move |v: String| form.update(|f| f.first_name = v))
                        />
                        <SignupField
                            id="signup-last-name"
                            label="Last name"
                            kind="text"
                            value=Signal::derive(move || form.with(|f| f.last_name.clone()))
                            on_input=Callback::new(move |v: String| form.update(|f| f.last_name = v))
                        />
                    </div>
                    <SignupField
                        id="signup-username"
                        label="Username"
                        kind="text"
                        value=Signal::derive(move || form.with(|f| f.username.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.username = v))
                    />
                    <SignupField
                        id="signup-email"
                        label="Email address"
                        kind="email"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
                    />
                    <SignupField
                        id="signup-password"
                        label="Password"
                        kind="password"
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.password = v))
                    />
                    <SignupField
                        id="signup-confirm-password"
                        label="Confirm password"
                        kind="password"
                        value=Signal::derive(move || form.with(|f| f.confirm_password.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.confirm_password = v))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="form-error" role="alert">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
            </div>
        </main>
    }
}

#[component]
fn SignupField(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label for=id>{label}</label>
        <input
            id=id
            class="auth-input"
            type=kind
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
        />
    }
}
