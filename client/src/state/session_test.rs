use std::sync::Arc;

use futures::executor::block_on;
use leptos::prelude::Owner;

use super::*;
use crate::net::testing::RecordingTransport;
use crate::state::auth::provide_auth;
use crate::state::storage::MemoryTokenStore;

fn api_with(store: Arc<MemoryTokenStore>) -> (ApiClient<RecordingTransport>, RecordingTransport) {
    let transport = RecordingTransport::new();
    (ApiClient::new("http://api.test/api/", store, transport.clone()), transport)
}

#[test]
fn restore_session_reads_persisted_token() {
    let store = MemoryTokenStore::with_token("abc123");
    let state = restore_session(&store);
    assert_eq!(state.token.as_deref(), Some("abc123"));
    assert!(state.user.is_none());
    assert!(state.restored);
}

#[test]
fn restore_session_without_token_is_anonymous() {
    assert!(!restore_session(&MemoryTokenStore::new()).is_authenticated());
}

#[test]
fn establish_session_persists_and_sets_token() {
    let owner = Owner::new();
    owner.with(|| {
        let store = MemoryTokenStore::new();
        let auth = provide_auth(AuthState::default());

        establish_session(auth, &store, "abc123".to_owned());

        assert_eq!(store.load().as_deref(), Some("abc123"));
        assert_eq!(auth.token_untracked().as_deref(), Some("abc123"));
    });
}

#[test]
fn end_session_clears_storage_token_and_user() {
    let owner = Owner::new();
    owner.with(|| {
        let store = MemoryTokenStore::with_token("abc123");
        let auth = provide_auth(AuthState {
            token: Some("abc123".to_owned()),
            user: Some(UserProfile { username: "u".to_owned(), ..UserProfile::default() }),
            restored: true,
        });

        end_session(auth, &store);

        assert!(store.load().is_none());
        assert!(auth.token_untracked().is_none());
        assert!(auth.state().user.is_none());
    });
}

#[test]
fn load_profile_uses_token_established_just_before() {
    let owner = Owner::new();
    owner.with(|| {
        let store = Arc::new(MemoryTokenStore::new());
        let (api, transport) = api_with(Arc::clone(&store));
        transport.reply(200, r#"{"username": "johndoe", "email": "john@example.com"}"#);
        let auth = provide_auth(AuthState::default());

        establish_session(auth, &**api.tokens(), "abc123".to_owned());
        let profile = block_on(load_profile(&api, auth)).unwrap();

        assert_eq!(profile.username, "johndoe");
        assert_eq!(auth.user_untracked().map(|u| u.email), Some("john@example.com".to_owned()));
        assert_eq!(transport.last().header("Authorization"), Some("Bearer abc123"));
        assert_eq!(store.load().as_deref(), Some("abc123"));
    });
}

#[test]
fn load_profile_failure_leaves_context_unchanged() {
    let owner = Owner::new();
    owner.with(|| {
        let (api, transport) = api_with(Arc::new(MemoryTokenStore::with_token("stale")));
        transport.reply(401, r#"{"detail": "Invalid token."}"#);
        let auth = provide_auth(AuthState::with_token(Some("stale".to_owned())));

        let err = block_on(load_profile(&api, auth)).unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert_eq!(auth.token_untracked().as_deref(), Some("stale"));
        assert!(auth.user_untracked().is_none());
    });
}

#[test]
fn sign_in_persists_token_then_fetches_profile_with_it() {
    let owner = Owner::new();
    owner.with(|| {
        let store = Arc::new(MemoryTokenStore::new());
        let (api, transport) = api_with(Arc::clone(&store));
        transport
            .reply(200, r#"{"token": "abc123"}"#)
            .reply(200, r#"{"username": "testuser", "email": "t@example.com"}"#);
        let auth = provide_auth(AuthState::with_token(None));
        let credentials = Credentials { username: "testuser".to_owned(), password: "password123".to_owned() };

        let profile = block_on(sign_in(&api, auth, &credentials)).unwrap();

        assert_eq!(profile.username, "testuser");
        assert_eq!(store.load().as_deref(), Some("abc123"));
        assert_eq!(auth.token_untracked().as_deref(), Some("abc123"));
        assert!(auth.user_untracked().is_some());
        let sent = transport.sent();
        assert_eq!(sent.len(), 2);
        assert!(sent[0].header("Authorization").is_none());
        assert_eq!(sent[1].header("Authorization"), Some("Bearer abc123"));
    });
}

#[test]
fn sign_in_rejected_leaves_session_anonymous() {
    let owner = Owner::new();
    owner.with(|| {
        let store = Arc::new(MemoryTokenStore::new());
        let (api, transport) = api_with(Arc::clone(&store));
        transport.reply(400, r#"{"message": "Invalid username or password"}"#);
        let auth = provide_auth(AuthState::with_token(None));
        let credentials = Credentials { username: "testuser".to_owned(), password: "wrong".to_owned() };

        let err = block_on(sign_in(&api, auth, &credentials)).unwrap_err();

        assert_eq!(err.user_message("fallback"), "Invalid username or password");
        assert!(store.load().is_none());
        assert!(auth.token_untracked().is_none());
        assert_eq!(transport.sent().len(), 1);
    });
}

#[test]
fn sign_in_profile_failure_discards_new_token() {
    let owner = Owner::new();
    owner.with(|| {
        let store = Arc::new(MemoryTokenStore::new());
        let (api, transport) = api_with(Arc::clone(&store));
        transport.reply(200, r#"{"token": "abc123"}"#).reply(500, "{}");
        let auth = provide_auth(AuthState::with_token(None));
        let credentials = Credentials { username: "testuser".to_owned(), password: "password123".to_owned() };

        let err = block_on(sign_in(&api, auth, &credentials)).unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert!(store.load().is_none());
        assert!(auth.token_untracked().is_none());
        assert!(!auth.state().is_authenticated());
        assert_eq!(transport.sent().len(), 2);
    });
}
