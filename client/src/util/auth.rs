//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::AppRoute;
use crate::state::auth::{AuthContext, AuthState};

/// Whether a protected page should send the visitor to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.restored && !state.is_authenticated()
}

/// Redirect to `/login` whenever the restored session has no token.
pub fn install_unauth_redirect<F>(auth: AuthContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.state()) {
            navigate(AppRoute::Login.path(), NavigateOptions::default());
        }
    });
}

/// Navigation requested from event handlers and async tasks.
///
/// Writing `Some(path)` to the returned signal navigates there once and
/// resets it, so the router's navigate closure only lives inside the effect.
pub fn install_pending_redirect<F>(navigate: F) -> RwSignal<Option<String>>
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let pending = RwSignal::new(None::<String>);
    Effect::new(move || {
        if let Some(path) = pending.get() {
            pending.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
    pending
}
