//! Wire DTOs for the remote profile API.
//!
//! DESIGN
//! ======
//! Payload shapes belong to the remote service; these types accept the
//! tolerant forms it has been seen to send (`null` names, alternate token
//! field names) and always submit full objects.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// The signed-in user's profile as returned by `GET profile/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Login name.
    pub username: String,
    /// Account email. Fixed at signup; the edit form shows it read-only.
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub email: String,
    /// Given name, if provided.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name, if provided.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Free-form location, if provided.
    #[serde(default)]
    pub location: Option<String>,
}

/// Full-object payload for `PUT profile/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub location: Option<String>,
}

/// Username/password pair for `POST login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Account creation payload for `POST signup/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Successful login body. The bearer token may arrive as `token`, `access`
/// (JWT-style backends) or `key` (token-auth backends).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access", alias = "key")]
    pub token: String,
}

fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
