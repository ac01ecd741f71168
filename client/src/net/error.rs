//! API error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! The API client never rewrites remote failures: a non-2xx response keeps
//! its status and raw body. Pages decide how to present them using the
//! extraction helpers below.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

/// Per-field validation messages keyed by form field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Body keys that carry a general message rather than a field error.
const MESSAGE_KEYS: [&str; 3] = ["message", "detail", "non_field_errors"];

/// Errors produced by API client operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("network request failed: {0}")]
    Transport(String),

    /// The remote service answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    /// A success body could not be decoded into the expected type.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// A request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// No HTTP transport exists in this build (server-side rendering).
    #[error("HTTP transport not available in this build")]
    Unavailable,
}

impl ApiError {
    /// HTTP status for remote failures, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Best human-readable message carried by a remote error body.
    ///
    /// Looks at `message`, then `detail`, then the first entry of
    /// `non_field_errors`, and returns `fallback` when none is present.
    pub fn user_message(&self, fallback: &str) -> String {
        let Self::Status { body, .. } = self else {
            return fallback.to_owned();
        };
        let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) else {
            return fallback.to_owned();
        };
        MESSAGE_KEYS
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(first_message)
            .unwrap_or_else(|| fallback.to_owned())
    }

    /// Field-level validation errors from a `400` body shaped as
    /// `{"field": ["msg", ...]}` or `{"field": "msg"}`.
    ///
    /// General-message keys are skipped. Returns an empty map for any other
    /// error or body shape.
    pub fn field_errors(&self) -> FieldErrors {
        let Self::Status { status: 400, body } = self else {
            return FieldErrors::new();
        };
        let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) else {
            return FieldErrors::new();
        };
        map.into_iter()
            .filter(|(key, _)| !MESSAGE_KEYS.contains(&key.as_str()))
            .filter_map(|(key, value)| {
                let messages = all_messages(&value);
                (!messages.is_empty()).then_some((key, messages))
            })
            .collect()
    }
}

fn first_message(value: &serde_json::Value) -> Option<String> {
    all_messages(value).into_iter().next()
}

fn all_messages(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => vec![s.clone()],
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().filter(|s| !s.is_empty()).map(str::to_owned))
            .collect(),
        _ => Vec::new(),
    }
}
