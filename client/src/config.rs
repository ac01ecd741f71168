//! Client build-time configuration.
//!
//! The API base URL is baked into the WASM bundle at compile time through the
//! `PROFILE_API_BASE_URL` environment variable; there is no runtime lookup in
//! the browser.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `PROFILE_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/";

/// Errors produced while validating client configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The base URL was empty after trimming.
    #[error("API base URL is empty")]
    EmptyBaseUrl,

    /// The base URL did not use an `http` or `https` scheme.
    #[error("API base URL must start with http:// or https://, got '{0}'")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root that every API path is resolved against. Always ends with `/`.
    pub api_base_url: String,
}

impl ClientConfig {
    /// Build the configuration compiled into this binary.
    ///
    /// Falls back to [`DEFAULT_API_BASE_URL`] when the build-time value is
    /// missing or invalid, logging the reason.
    pub fn from_build_env() -> Self {
        match Self::from_raw(option_env!("PROFILE_API_BASE_URL")) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("invalid PROFILE_API_BASE_URL ({e}); using {DEFAULT_API_BASE_URL}");
                Self { api_base_url: DEFAULT_API_BASE_URL.to_owned() }
            }
        }
    }

    /// Build configuration from an optional raw base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the value is blank or not an http(s) URL.
    pub fn from_raw(raw: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = normalize_base_url(raw.unwrap_or(DEFAULT_API_BASE_URL))?;
        Ok(Self { api_base_url })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

/// Trim the URL and guarantee a single trailing slash so relative API paths
/// resolve underneath it.
///
/// # Errors
///
/// Returns [`ConfigError`] when the value is blank or not an http(s) URL.
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::UnsupportedScheme(trimmed.to_owned()));
    }
    Ok(format!("{}/", trimmed.trim_end_matches('/')))
}
