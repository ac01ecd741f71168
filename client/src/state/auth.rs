//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is the session store: the bearer token and the fetched
//! profile, each possibly absent. It lives in one `RwSignal` provided at the
//! application root; `AuthContext` is the handle components read and write it
//! through. Setting the token neither persists it nor fetches the profile;
//! see `state::session` for those side effects.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::UserProfile;

/// Message raised when the context is read outside its provider.
pub const MISSING_PROVIDER_MESSAGE: &str = "use_auth must be used within an AuthProvider";

/// Current session token and user profile.
///
/// `restored` flips once durable storage has been consulted in the browser.
/// Server rendering and the first hydrated frame both see `false`, so route
/// guards wait for it before treating a missing token as logged out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
    pub restored: bool,
}

impl AuthState {
    /// Session restored from a persisted token; the profile is fetched later.
    pub fn with_token(token: Option<String>) -> Self {
        Self { token, user: None, restored: true }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The user, but only while a token is held. A profile left behind after
    /// the token is cleared is never exposed.
    pub fn current_user(&self) -> Option<&UserProfile> {
        self.token.as_ref().and(self.user.as_ref())
    }
}

/// Reactive handle over the session store.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
}

impl AuthContext {
    pub fn new(initial: AuthState) -> Self {
        Self { state: RwSignal::new(initial) }
    }

    /// Tracked snapshot of the whole session.
    pub fn state(&self) -> AuthState {
        self.state.get()
    }

    pub fn token(&self) -> Option<String> {
        self.state.with(|s| s.token.clone())
    }

    pub fn token_untracked(&self) -> Option<String> {
        self.state.with_untracked(|s| s.token.clone())
    }

    /// Replace the in-memory token. Does not persist and does not fetch.
    pub fn set_token(&self, token: Option<String>) {
        self.state.update(|s| s.token = token);
    }

    /// Tracked user, absent whenever no token is held.
    pub fn user(&self) -> Option<UserProfile> {
        self.state.with(|s| s.current_user().cloned())
    }

    pub fn user_untracked(&self) -> Option<UserProfile> {
        self.state.with_untracked(|s| s.current_user().cloned())
    }

    /// Replace the stored profile wholesale.
    pub fn set_user(&self, user: Option<UserProfile>) {
        self.state.update(|s| s.user = user);
    }

    /// Replace the whole session, e.g. with the one restored at startup.
    pub fn replace(&self, state: AuthState) {
        self.state.set(state);
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }
}

/// Create the session store and provide it to descendants of the current owner.
pub fn provide_auth(initial: AuthState) -> AuthContext {
    let auth = AuthContext::new(initial);
    provide_context(auth);
    auth
}

/// Read the auth context if a provider is mounted above the caller.
pub fn try_use_auth() -> Option<AuthContext> {
    use_context::<AuthContext>()
}

/// Read the auth context.
///
/// # Panics
///
/// Panics when called outside an [`AuthProvider`]; that is a component
/// placement bug, not a recoverable condition.
pub fn use_auth() -> AuthContext {
    try_use_auth().unwrap_or_else(|| panic!("{MISSING_PROVIDER_MESSAGE}"))
}

/// Provides an [`AuthContext`] to its children.
#[component]
pub fn AuthProvider(
    /// Starting session, usually from [`crate::state::session::restore_session`].
    #[prop(optional)]
    initial: AuthState,
    children: Children,
) -> impl IntoView {
    provide_auth(initial);
    children()
}
