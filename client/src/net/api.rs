//! REST API client for the remote profile service.
//!
//! SYSTEM CONTEXT
//! ==============
//! One client is built at app start, bound to the configured base URL, and
//! shared through Leptos context. Every request consults the token store at
//! send time and attaches `Authorization: Bearer <token>` when a token is
//! present; without a token the request goes out unauthenticated.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses come back as [`ApiError::Status`] with the untouched
//! body. There is no retry and no special handling of `401`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, FetchTransport, Method, Transport};
use super::types::{Credentials, LoginResponse, ProfileUpdate, SignupRequest, UserProfile};
use crate::config::ClientConfig;
use crate::state::storage::{LocalTokenStore, TokenStore};

pub const LOGIN_PATH: &str = "login/";
pub const SIGNUP_PATH: &str = "signup/";
pub const PROFILE_PATH: &str = "profile/";

/// Client used by the browser bundle.
pub type BrowserApi = ApiClient<FetchTransport>;

pub struct ApiClient<T = FetchTransport> {
    base_url: String,
    tokens: Arc<dyn TokenStore>,
    transport: T,
}

impl<T: Clone> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            tokens: Arc::clone(&self.tokens),
            transport: self.transport.clone(),
        }
    }
}

impl BrowserApi {
    /// Client backed by `localStorage` and `fetch`.
    pub fn browser(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone(), Arc::new(LocalTokenStore), FetchTransport)
    }
}

impl<T: Transport> ApiClient<T> {
    /// `base_url` is expected to end with `/` (see [`crate::config::normalize_base_url`]).
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>, transport: T) -> Self {
        Self { base_url: base_url.into(), tokens, transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The durable token store this client reads credentials from.
    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Prepare a bodiless request for `path`, relative to the base URL.
    pub fn request(&self, method: Method, path: &str) -> ApiRequest {
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        if let Some(token) = self.tokens.load() {
            headers.push(("Authorization".to_owned(), bearer_header(&token)));
        }
        ApiRequest { method, url: resolve_url(&self.base_url, path), headers, body: None }
    }

    /// Prepare a request carrying `body` as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if `body` cannot be serialized.
    pub fn json_request<B: Serialize>(&self, method: Method, path: &str, body: &B) -> Result<ApiRequest, ApiError> {
        let encoded = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let mut request = self.request(method, path);
        request.headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        request.body = Some(encoded);
        Ok(request)
    }

    /// Send a prepared request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for non-2xx responses and whatever the
    /// transport reports when no response arrives.
    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        log::debug!("{} {}", request.method.as_str(), request.url);
        let resp = self.transport.send(request).await?;
        if !resp.is_success() {
            log::debug!("request failed with status {}", resp.status);
            return Err(ApiError::Status { status: resp.status, body: resp.body });
        }
        Ok(resp)
    }

    /// Exchange credentials for a bearer token via `POST login/`.
    ///
    /// Does not touch the session; callers persist the token.
    ///
    /// # Errors
    ///
    /// Returns the remote or transport error unchanged.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let request = self.json_request(Method::Post, LOGIN_PATH, credentials)?;
        self.send(request).await?.json()
    }

    /// Create an account via `POST signup/`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns the remote or transport error unchanged.
    pub async fn signup(&self, signup: &SignupRequest) -> Result<(), ApiError> {
        let request = self.json_request(Method::Post, SIGNUP_PATH, signup)?;
        self.send(request).await?;
        Ok(())
    }

    /// Fetch the authenticated user's profile via `GET profile/`.
    ///
    /// # Errors
    ///
    /// Returns the remote or transport error unchanged.
    pub async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        let request = self.request(Method::Get, PROFILE_PATH);
        self.send(request).await?.json()
    }

    /// Replace the authenticated user's profile via `PUT profile/`.
    ///
    /// # Errors
    ///
    /// Returns the remote or transport error unchanged.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        let request = self.json_request(Method::Put, PROFILE_PATH, update)?;
        self.send(request).await?.json()
    }
}

fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

fn resolve_url(base_url: &str, path: &str) -> String {
    format!("{base_url}{}", path.trim_start_matches('/'))
}
