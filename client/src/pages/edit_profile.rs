//! Edit-profile page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. The form is prefilled once the profile arrives and
//! submissions run through `actions::edit`, whose outcome decides between
//! navigating away and showing inline errors.

#[cfg(test)]
#[path = "edit_profile_test.rs"]
mod edit_profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::actions::edit::{
    ActionOutcome, FIELD_EMAIL, FIELD_FIRST_NAME, FIELD_LAST_NAME, FIELD_LOCATION, FIELD_USERNAME, FormSubmission,
    ProfileEditHandler, edit_route_action,
};
use crate::net::api::BrowserApi;
use crate::net::error::FieldErrors;
use crate::routes::AppRoute;
use crate::state::auth::use_auth;
use crate::util::auth::{install_pending_redirect, install_unauth_redirect};

/// Fields rendered with their own inline error slot.
const INLINE_FIELDS: [&str; 5] = [FIELD_USERNAME, FIELD_EMAIL, FIELD_FIRST_NAME, FIELD_LAST_NAME, FIELD_LOCATION];

/// All messages for one field, joined for inline display.
fn field_error_text(errors: &FieldErrors, field: &str) -> Option<String> {
    errors.get(field).filter(|msgs| !msgs.is_empty()).map(|msgs| msgs.join(" "))
}

/// Messages for fields the form has no slot for, shown as the general error.
fn unplaced_error_text(errors: &FieldErrors) -> Option<String> {
    let messages: Vec<String> = errors
        .iter()
        .filter(|(field, _)| !INLINE_FIELDS.contains(&field.as_str()))
        .flat_map(|(field, msgs)| msgs.iter().map(move |msg| format!("{field}: {msg}")))
        .collect();
    (!messages.is_empty()).then(|| messages.join(" "))
}

#[component]
pub fn EditProfilePage() -> impl IntoView {
    let auth = use_auth();
    let api = expect_context::<BrowserApi>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());
    let redirect = install_pending_redirect(navigate);

    let username = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let prefilled = RwSignal::new(false);

    let field_errors = RwSignal::new(FieldErrors::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Prefill once; later profile refreshes must not clobber edits in progress.
    Effect::new(move || {
        if prefilled.get_untracked() {
            return;
        }
        if let Some(user) = auth.user() {
            username.set(user.username);
            first_name.set(user.first_name.unwrap_or_default());
            last_name.set(user.last_name.unwrap_or_default());
            location.set(user.location.unwrap_or_default());
            prefilled.set(true);
        }
    });

    let email = move || auth.user().map(|u| u.email).unwrap_or_default();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        field_errors.set(FieldErrors::new());
        error.set(None);
        busy.set(true);

        let submission = FormSubmission::from_pairs([
            (FIELD_USERNAME, username.get_untracked()),
            (FIELD_EMAIL, auth.user_untracked().map(|u| u.email).unwrap_or_default()),
            (FIELD_FIRST_NAME, first_name.get_untracked()),
            (FIELD_LAST_NAME, last_name.get_untracked()),
            (FIELD_LOCATION, location.get_untracked()),
        ]);
        let handler = ProfileEditHandler::new(api.clone(), auth);
        leptos::task::spawn_local(async move {
            match edit_route_action(&handler, submission).await {
                ActionOutcome::Redirect(path) => redirect.set(Some(path)),
                ActionOutcome::Invalid(errors) => {
                    error.set(unplaced_error_text(&errors));
                    field_errors.set(errors);
                }
                ActionOutcome::Failed(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
    };

    let on_cancel = move |_| redirect.set(Some(AppRoute::Home.path().to_owned()));

    let error_for = move |field: &'static str| move || field_errors.with(|errs| field_error_text(errs, field));

    view! {
        <main class="edit-page">
            <Show
                when=move || auth.user().is_some()
                fallback=|| view! { <p class="edit-page__loading">"Loading..."</p> }
            >
                <div class="edit-card">
                    <h1>"Edit Profile"</h1>
                    <form class="edit-form" on:submit=on_submit.clone()>
                        <label for="edit-username">"Username"</label>
                        <input
                            id="edit-username"
                            class="edit-input"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <FieldError message=Signal::derive(error_for(FIELD_USERNAME))/>

                        <label for="edit-email">"Email"</label>
                        <input id="edit-email" class="edit-input" type="email" readonly=true prop:value=email/>
                        <p class="edit-form__hint">"Email cannot be changed."</p>
                        <FieldError message=Signal::derive(error_for(FIELD_EMAIL))/>

                        <label for="edit-first-name">"First name"</label>
                        <input
                            id="edit-first-name"
                            class="edit-input"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                        <FieldError message=Signal::derive(error_for(FIELD_FIRST_NAME))/>

                        <label for="edit-last-name">"Last name"</label>
                        <input
                            id="edit-last-name"
                            class="edit-input"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                        <FieldError message=Signal::derive(error_for(FIELD_LAST_NAME))/>

                        <label for="edit-location">"Location"</label>
                        <input
                            id="edit-location"
                            class="edit-input"
                            type="text"
                            prop:value=move || location.get()
                            on:input=move |ev| location.set(event_target_value(&ev))
                        />
                        <FieldError message=Signal::derive(error_for(FIELD_LOCATION))/>

                        <Show when=move || error.get().is_some()>
                            <p class="form-error" role="alert">{move || error.get().unwrap_or_default()}</p>
                        </Show>
                        <div class="edit-form__actions">
                            <button class="button" type="button" on:click=on_cancel>
                                "Cancel"
                            </button>
                            <button class="button button--primary" type="submit" disabled=move || busy.get()>
                                {move || if busy.get() { "Saving..." } else { "Save Changes" }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </main>
    }
}

#[component]
fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <p class="field-error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
