//! Edit-profile route action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting the `/edit` form hands the raw field values to
//! [`edit_route_action`], which delegates to an [`EditHandler`] and returns
//! the handler's outcome unchanged. The page turns that outcome into
//! navigation (redirect) or inline errors.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use std::collections::BTreeMap;

use crate::net::api::ApiClient;
use crate::net::error::FieldErrors;
use crate::net::transport::Transport;
use crate::net::types::{ProfileUpdate, UserProfile};
use crate::routes::AppRoute;
use crate::state::auth::AuthContext;

pub const FIELD_USERNAME: &str = "username";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_FIRST_NAME: &str = "first_name";
pub const FIELD_LAST_NAME: &str = "last_name";
pub const FIELD_LOCATION: &str = "location";

pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update profile";

/// Raw form submission: field name to submitted value, untrimmed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSubmission {
    fields: BTreeMap<String, String>,
}

impl FormSubmission {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { fields: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    /// Raw submitted value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Trimmed value, empty when the field was not submitted.
    pub fn trimmed(&self, name: &str) -> &str {
        self.get(name).map_or("", str::trim)
    }
}

/// Navigation result of a route action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Navigate to the given path.
    Redirect(String),
    /// Stay on the form and show per-field messages.
    Invalid(FieldErrors),
    /// Stay on the form and show a general message.
    Failed(String),
}

/// Processes an edit-profile submission.
pub trait EditHandler {
    fn handle(&self, submission: FormSubmission) -> impl Future<Output = ActionOutcome>;
}

/// Action bound to the `/edit` route.
pub async fn edit_route_action<H: EditHandler>(handler: &H, submission: FormSubmission) -> ActionOutcome {
    handler.handle(submission).await
}

/// Production handler: validates, submits the full profile, stores the
/// result in the session and redirects home.
pub struct ProfileEditHandler<T> {
    api: ApiClient<T>,
    auth: AuthContext,
}

impl<T: Transport> ProfileEditHandler<T> {
    pub fn new(api: ApiClient<T>, auth: AuthContext) -> Self {
        Self { api, auth }
    }
}

impl<T: Transport> EditHandler for ProfileEditHandler<T> {
    async fn handle(&self, submission: FormSubmission) -> ActionOutcome {
        let current = self.auth.user_untracked();
        let update = match parse_profile_update(&submission, current.as_ref()) {
            Ok(update) => update,
            Err(errors) => return ActionOutcome::Invalid(errors),
        };
        match self.api.update_profile(&update).await {
            Ok(profile) => {
                self.auth.set_user(Some(profile));
                ActionOutcome::Redirect(AppRoute::Home.path().to_owned())
            }
            Err(e) => {
                log::warn!("profile update failed: {e}");
                let fields = e.field_errors();
                if fields.is_empty() {
                    ActionOutcome::Failed(e.user_message(UPDATE_FAILED_MESSAGE))
                } else {
                    ActionOutcome::Invalid(fields)
                }
            }
        }
    }
}

/// Build the full-replace payload from a submission.
///
/// The email comes from the loaded profile when there is one; a submitted
/// email can never change it.
///
/// # Errors
///
/// Returns per-field messages when the username is blank or no email is known.
pub fn parse_profile_update(
    submission: &FormSubmission,
    current: Option<&UserProfile>,
) -> Result<ProfileUpdate, FieldErrors> {
    let mut errors = FieldErrors::new();

    let username = submission.trimmed(FIELD_USERNAME);
    if username.is_empty() {
        errors.insert(FIELD_USERNAME.to_owned(), vec!["Username is required.".to_owned()]);
    }

    let email = current.map_or_else(|| submission.trimmed(FIELD_EMAIL).to_owned(), |user| user.email.clone());
    if email.is_empty() {
        errors.insert(FIELD_EMAIL.to_owned(), vec!["Email is required.".to_owned()]);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let location = submission.trimmed(FIELD_LOCATION);
    Ok(ProfileUpdate {
        username: username.to_owned(),
        email,
        first_name: submission.trimmed(FIELD_FIRST_NAME).to_owned(),
        last_name: submission.trimmed(FIELD_LAST_NAME).to_owned(),
        location: (!location.is_empty()).then(|| location.to_owned()),
    })
}
