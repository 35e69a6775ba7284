//! Auth types

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// The one username/password pair accepted by `/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Accepted username
    pub username: String,
    /// Accepted password
    pub password: String,
}

impl Credentials {
    /// Create a credential pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check a login attempt; unknown user and wrong password are indistinguishable
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new("admin", "password")
    }
}

/// JWT claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued to
    pub sub: String,
    /// Issued-at, unix seconds
    pub iat: i64,
    /// Expiry, unix seconds
    pub exp: i64,
}

impl Claims {
    /// Is the token still valid at `now` (unix seconds)?
    pub fn is_live_at(&self, now: i64) -> bool {
        now < self.exp
    }
}

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Encoded JWT
    pub token: String,
    /// Claims that were signed
    pub claims: Claims,
}

impl IssuedToken {
    /// Absolute expiry time
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.claims.exp, 0).single()
    }
}

/// `POST /login` body; missing fields simply fail the credential check
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    /// Submitted username
    #[serde(default)]
    pub username: Option<String>,
    /// Submitted password
    #[serde(default)]
    pub password: Option<String>,
}

/// `POST /login` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed session token
    pub token: String,
}
