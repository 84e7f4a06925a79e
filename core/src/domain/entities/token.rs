//! Token entities for session-based authentication.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Session token lifetime in seconds (7 days)
pub const TOKEN_TTL_SECONDS: u64 = 7 * 24 * 60 * 60;

/// Session token lifetime applied on activation
pub const TOKEN_TTL: Duration = Duration::from_secs(TOKEN_TTL_SECONDS);

/// Claims structure for the JWT payload
///
/// Carries the subject's identity plus a per-issuance uniqueness marker.
/// No registered timestamp claims are embedded; token lifetime is enforced
/// by the store TTL, not by the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject's numeric identifier
    pub id: i64,

    /// Subject's username
    pub username: String,

    /// Subject's email address
    pub email: String,

    /// JWT ID: random marker making every issued token distinct
    pub jti: String,
}

impl Claims {
    /// Creates claims for a new session token
    ///
    /// # Arguments
    ///
    /// * `id` - The subject's numeric identifier
    /// * `username` - The subject's username
    /// * `email` - The subject's email address
    ///
    /// # Returns
    ///
    /// A new `Claims` instance with a freshly generated uniqueness marker,
    /// so two calls with identical arguments produce different claim sets
    pub fn new(id: i64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Gets the verified identity carried by these claims
    ///
    /// # Returns
    ///
    /// A `TokenSubject` with the identity fields; the uniqueness marker is
    /// internal and not part of the subject
    pub fn subject(&self) -> TokenSubject {
        TokenSubject {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

/// Verified identity extracted from a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSubject {
    /// Subject's numeric identifier
    pub id: i64,

    /// Subject's username
    pub username: String,

    /// Subject's email address
    pub email: String,
}
