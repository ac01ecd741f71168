use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::net::testing::RecordingTransport;
use crate::state::storage::MemoryTokenStore;

const BASE: &str = "http://api.test:8000/api/";

fn client_with(store: Arc<MemoryTokenStore>) -> (ApiClient<RecordingTransport>, RecordingTransport) {
    let transport = RecordingTransport::new();
    (ApiClient::new(BASE, store, transport.clone()), transport)
}

fn profile_json() -> &'static str {
    r#"{"username": "johndoe", "email": "john@example.com", "first_name": "John", "last_name": "Doe"}"#
}

// =============================================================
// URL resolution
// =============================================================

#[test]
fn resolve_url_joins_relative_path() {
    assert_eq!(resolve_url(BASE, "profile/"), "http://api.test:8000/api/profile/");
}

#[test]
fn resolve_url_ignores_leading_slash() {
    assert_eq!(resolve_url(BASE, "/login/"), "http://api.test:8000/api/login/");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc123"), "Bearer abc123");
}

// =============================================================
// Bearer attachment
// =============================================================

#[test]
fn profile_fetch_carries_bearer_token_from_storage() {
    let (api, transport) = client_with(Arc::new(MemoryTokenStore::with_token("abc123")));
    transport.reply(200, profile_json());

    block_on(api.fetch_profile()).unwrap();

    let sent = transport.last();
    assert_eq!(sent.method, Method::Get);
    assert_eq!(sent.url, "http://api.test:8000/api/profile/");
    assert_eq!(sent.header("Authorization"), Some("Bearer abc123"));
}

#[test]
fn profile_fetch_without_token_is_sent_unauthenticated() {
    let (api, transport) = client_with(Arc::new(MemoryTokenStore::new()));
    transport.reply(200, profile_json());

    let result = block_on(api.fetch_profile());

    assert!(result.is_ok());
    assert_eq!(transport.sent().len(), 1);
    assert!(transport.last().header("Authorization").is_none());
}

#[test]
fn exactly_one_authorization_header_is_attached() {
    let (api, _) = client_with(Arc::new(MemoryTokenStore::with_token("t")));
    let request = api.request(Method::Get, PROFILE_PATH);
    let count = request
        .headers
        .iter()
        .filter(|(name, _)| name.eq_ignore_ascii_case("authorization"))
        .count();
    assert_eq!(count, 1);
}

#[test]
fn token_is_read_per_request_not_cached() {
    let store = Arc::new(MemoryTokenStore::new());
    let (api, transport) = client_with(Arc::clone(&store));

    block_on(api.send(api.request(Method::Get, PROFILE_PATH))).unwrap();
    store.save("fresh");
    block_on(api.send(api.request(Method::Get, PROFILE_PATH))).unwrap();
    store.clear();
    block_on(api.send(api.request(Method::Get, PROFILE_PATH))).unwrap();

    let sent = transport.sent();
    assert!(sent[0].header("Authorization").is_none());
    assert_eq!(sent[1].header("Authorization"), Some("Bearer fresh"));
    assert!(sent[2].header("Authorization").is_none());
}

#[test]
fn every_operation_carries_the_token() {
    let (api, transport) = client_with(Arc::new(MemoryTokenStore::with_token("abc123")));
    transport.reply(200, r#"{"token": "n"}"#).reply(201, "{}").reply(200, profile_json()).reply(200, profile_json());

    let credentials = Credentials { username: "u".to_owned(), password: "p".to_owned() };
    block_on(api.login(&credentials)).unwrap();
    let signup = SignupRequest {
        username: "u".to_owned(),
        email: "u@x.io".to_owned(),
        password: "password1".to_owned(),
        first_name: String::new(),
        last_name: String::new(),
    };
    block_on(api.signup(&signup)).unwrap();
    block_on(api.fetch_profile()).unwrap();
    let update = ProfileUpdate {
        username: "u".to_owned(),
        email: "u@x.io".to_owned(),
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        location: None,
    };
    block_on(api.update_profile(&update)).unwrap();

    for request in transport.sent() {
        assert_eq!(request.header("authorization"), Some("Bearer abc123"), "{}", request.url);
    }
}

// =============================================================
// Operations
// =============================================================

#[test]
fn login_posts_credentials_as_json() {
    let (api, transport) = client_with(Arc::new(MemoryTokenStore::new()));
    transport.reply(200, r#"{"token": "abc123"}"#);

    let credentials = Credentials { username: "testuser".to_owned(), password: "password123".to_owned() };
    let resp = block_on(api.login(&credentials)).unwrap();

    assert_eq!(resp.token, "abc123");
    let sent = transport.last();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, "http://api.test:8000/api/login/");
    assert_eq!(sent.header("Content-Type"), Some("application/json"));
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({"username": "testuser", "password": "password123"}));
}

#[test]
fn login_does_not_persist_the_token() {
    let store = Arc::new(MemoryTokenStore::new());
    let (api, transport) = client_with(Arc::clone(&store));
    transport.reply(200, r#"{"token": "abc123"}"#);

    let credentials = Credentials { username: "u".to_owned(), password: "p".to_owned() };
    block_on(api.login(&credentials)).unwrap();

    assert!(store.load().is_none());
}

#[test]
fn update_profile_puts_full_object() {
    let (api, transport) = client_with(Arc::new(MemoryTokenStore::with_token("abc123")));
    transport.reply(200, profile_json());

    let update = ProfileUpdate {
        username: "johndoe".to_owned(),
        email: "john@example.com".to_owned(),
        first_name: "John".to_owned(),
        last_name: "Doe".to_owned(),
        location: Some("Berlin".to_owned()),
    };
    let profile = block_on(api.update_profile(&update)).unwrap();

    assert_eq!(profile.username, "johndoe");
    let sent = transport.last();
    assert_eq!(sent.method, Method::Put);
    assert_eq!(sent.url, "http://api.test:8000/api/profile/");
    let body: ProfileUpdate = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, update);
}

#[test]
fn bodiless_requests_have_no_content_type() {
    let (api, _) = client_with(Arc::new(MemoryTokenStore::new()));
    let request = api.request(Method::Get, PROFILE_PATH);
    assert!(request.body.is_none());
    assert!(request.header("Content-Type").is_none());
    assert_eq!(request.header("Accept"), Some("application/json"));
}

// =============================================================
// Error pass-through
// =============================================================

#[test]
fn non_success_status_is_returned_unmodified() {
    let (api, transport) = client_with(Arc::new(MemoryTokenStore::with_token("stale")));
    transport.reply(401, r#"{"detail": "Invalid token."}"#);

    let err = block_on(api.fetch_profile()).unwrap_err();

    assert_eq!(err, ApiError::Status { status: 401, body: r#"{"detail": "Invalid token."}"#.to_owned() });
}

#[test]
fn unauthorized_response_does_not_clear_the_token() {
    let store = Arc::new(MemoryTokenStore::with_token("stale"));
    let (api, transport) = client_with(Arc::clone(&store));
    transport.reply(401, "{}");

    let _ = block_on(api.fetch_profile());

    assert_eq!(store.load().as_deref(), Some("stale"));
}

#[test]
fn transport_failure_is_passed_through_without_retry() {
    let (api, transport) = client_with(Arc::new(MemoryTokenStore::new()));
    transport.fail(ApiError::Transport("connection refused".to_owned()));

    let err = block_on(api.fetch_profile()).unwrap_err();

    assert_eq!(err, ApiError::Transport("connection refused".to_owned()));
    assert_eq!(transport.sent().len(), 1);
}

#[test]
fn malformed_success_body_is_a_decode_error() {
    let (api, transport) = client_with(Arc::new(MemoryTokenStore::new()));
    transport.reply(200, "not json");

    let err = block_on(api.fetch_profile()).unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_transport_is_unavailable_outside_browser() {
    let api = ApiClient::browser(&crate::config::ClientConfig::default());
    assert_eq!(api.base_url(), "http://localhost:8000/api/");
    let err = block_on(api.fetch_profile()).unwrap_err();
    assert_eq!(err, ApiError::Unavailable);
}
