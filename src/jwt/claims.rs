//! Claims set carried by app authentication tokens.

use serde::{Deserialize, Serialize};

/// Claims set for app authentication.
///
/// Field order is the serialized order: `iat`, `exp`, `iss`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppClaims {
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
    /// Application identifier, copied verbatim from the caller
    pub iss: String,
}

impl AppClaims {
    /// Build claims issued at `now` and valid for `ttl_seconds`.
    pub fn new(issuer: impl Into<String>, now: i64, ttl_seconds: i64) -> Self {
        AppClaims {
            iat: now,
            exp: now.saturating_add(ttl_seconds),
            iss: issuer.into(),
        }
    }

    /// Seconds between issue and expiry.
    pub fn lifetime(&self) -> i64 {
        self.exp.saturating_sub(self.iat)
    }
}
