use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable user identity minted by the account service at registration.
///
/// Never mutated locally; the account service owns this record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Authenticated session returned by sign-in and sign-up.
///
/// All fields are required: a session is either fully present or absent
/// (`Option<Session>` at rest), never partially populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp (seconds) at which the access token expires.
    pub expires_at: i64,
    pub user: UserIdentity,
}

/// Sign-in / sign-up request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Password change request body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordChange {
    pub password: String,
}

/// Mutable user-facing profile attributes, keyed upstream by identity id.
///
/// `username` is not guaranteed unique by this layer, and `avatar_url` is a
/// storage path, not image bytes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub avatar_url: String,
}

/// Profile upsert row sent to the account service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub avatar_url: String,
    pub updated_at: DateTime<Utc>,
}

/// Error body returned by the account service on non-2xx responses.
///
/// The service is inconsistent about the field name across endpoints, so
/// all known spellings are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    #[serde(alias = "msg", alias = "error_description", alias = "error")]
    pub message: String,
}
