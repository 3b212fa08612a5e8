//! Issuer configuration.
//!
//! The command-line contract takes no flags, so the token lifetime and
//! algorithm are typed defaults here. Library callers may override them
//! through the builder methods.

use crate::error::{Result, TokenError};
use jsonwebtoken::Algorithm;

/// Lifetime of an issued token in seconds (10 minutes).
pub const DEFAULT_TTL_SECONDS: i64 = 600;

/// Token issuer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuerConfig {
    /// Seconds between `iat` and `exp`
    pub ttl_seconds: i64,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_TTL_SECONDS,
            algorithm: Algorithm::RS256,
        }
    }
}

impl IssuerConfig {
    /// Override the token lifetime.
    #[must_use]
    pub const fn with_ttl_seconds(mut self, ttl: i64) -> Self {
        self.ttl_seconds = ttl;
        self
    }

    /// Override the signing algorithm.
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Check that the configuration can produce RSA-signed tokens.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Config`] for a non-positive lifetime or a
    /// non-RSA algorithm.
    pub fn validate(&self) -> Result<()> {
        if self.ttl_seconds <= 0 {
            return Err(TokenError::config(format!(
                "ttl_seconds must be positive, got {}",
                self.ttl_seconds
            )));
        }

        match self.algorithm {
            Algorithm::RS256
            | Algorithm::RS384
            | Algorithm::RS512
            | Algorithm::PS256
            | Algorithm::PS384
            | Algorithm::PS512 => Ok(()),
            other => Err(TokenError::config(format!(
                "Unsupported algorithm for RSA keys: {other:?}"
            ))),
        }
    }
}
