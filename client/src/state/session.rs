//! Session lifecycle: restore, establish, load, end.
//!
//! The auth context setters have no side effects; these helpers
//! pair them with durable storage and the profile fetch so pages do not
//! repeat the sequence.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::auth::{AuthContext, AuthState};
use super::storage::TokenStore;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{Credentials, UserProfile};

/// Initial session at app start: the persisted token, no profile yet.
pub fn restore_session(store: &dyn TokenStore) -> AuthState {
    AuthState::with_token(store.load())
}

/// Persist `token` and make it the in-memory session token.
///
/// Persisting first means the next API request already carries it.
pub fn establish_session(auth: AuthContext, store: &dyn TokenStore, token: String) {
    store.save(&token);
    auth.set_token(Some(token));
}

/// Log out: forget the durable token, the in-memory token and the profile.
pub fn end_session(auth: AuthContext, store: &dyn TokenStore) {
    store.clear();
    auth.set_token(None);
    auth.set_user(None);
}

/// Fetch the profile for the current token and store it in the context.
///
/// # Errors
///
/// Returns the API error unchanged; the context is left as it was.
pub async fn load_profile<T: Transport>(api: &ApiClient<T>, auth: AuthContext) -> Result<UserProfile, ApiError> {
    let profile = api.fetch_profile().await?;
    auth.set_user(Some(profile.clone()));
    Ok(profile)
}

/// Log in: exchange credentials, persist the token, then load the profile.
///
/// # Errors
///
/// Returns the first API error. Either failure leaves the session
/// anonymous: a token whose profile could not be loaded is discarded.
pub async fn sign_in<T: Transport>(
    api: &ApiClient<T>,
    auth: AuthContext,
    credentials: &Credentials,
) -> Result<UserProfile, ApiError> {
    let login = api.login(credentials).await?;
    establish_session(auth, &**api.tokens(), login.token);
    match load_profile(api, auth).await {
        Ok(profile) => Ok(profile),
        Err(e) => {
            log::warn!("profile load after login failed: {e}");
            end_session(auth, &**api.tokens());
            Err(e)
        }
    }
}
