//! HTTP transport seam.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): [`FetchTransport`] answers [`ApiError::Unavailable`]
//! since the API is only called from the browser.

#![allow(clippy::unused_async)]

use super::error::ApiError;

/// HTTP methods the profile API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// A fully prepared outgoing request: absolute URL, headers and body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// First value of header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of a completed exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the body does not match `T`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Sends prepared requests. Implementations report only transport failures;
/// status interpretation belongs to the API client.
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// Browser `fetch` transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
                Method::Put => Request::put(&request.url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let sent = match request.body {
                Some(body) => {
                    builder
                        .body(body)
                        .map_err(|e| ApiError::Transport(e.to_string()))?
                        .send()
                        .await
                }
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}
