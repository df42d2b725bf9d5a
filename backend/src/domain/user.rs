//! User entity and credential handling.
//!
//! Passwords are stored in plaintext and tokens are derived deterministically
//! from the user id. Both are acknowledged stubs for this mock service; a
//! production build would swap in salted hashes and signed, expiring tokens.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user.
///
/// `id` is unique; `username` uniqueness is deliberately not enforced, so a
/// credential lookup must match both username and password.
///
/// The type does not implement `Serialize`: the plaintext password must never
/// reach the wire. Adapters build their own response payloads from the public
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Opaque unique identifier (UUID v4, stringified).
    pub id: String,
    /// Display/login name, not unique.
    pub username: String,
    /// Contact address; shape is not validated beyond being a string.
    pub email: String,
    password: String,
    /// Creation instant, informational only.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user with a fresh unique id.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username: username.into(),
            email: email.into(),
            password: password.into(),
            created_at: Utc::now(),
        }
    }

    /// Exact string-equality password check.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Deterministic bearer token for this user.
    pub fn access_token(&self) -> String {
        format!("token_{}", self.id)
    }
}
