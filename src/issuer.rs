//! Token issuance.
//!
//! A token is issued in one linear pass: read the key, stamp the claims,
//! sign. Nothing is cached between calls.

use crate::config::IssuerConfig;
use crate::error::Result;
use crate::jwt::{AppClaims, JwtSerializer, KeySigner};
use std::path::Path;
use tracing::{debug, warn};

/// Issues signed app authentication tokens.
pub struct TokenIssuer {
    config: IssuerConfig,
    serializer: JwtSerializer,
}

impl Default for TokenIssuer {
    fn default() -> Self {
        let config = IssuerConfig::default();
        let serializer = JwtSerializer::new(config.algorithm);
        Self { config, serializer }
    }
}

impl TokenIssuer {
    /// Create an issuer with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TokenError::Config`] if the configuration is invalid.
    pub fn new(config: IssuerConfig) -> Result<Self> {
        config.validate()?;
        let serializer = JwtSerializer::new(config.algorithm);
        Ok(Self { config, serializer })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &IssuerConfig {
        &self.config
    }

    /// Issue a token stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TokenError::Signing`] if the key cannot sign.
    pub fn issue(&self, app_id: &str, signer: &KeySigner) -> Result<String> {
        self.issue_at(app_id, signer, chrono::Utc::now().timestamp())
    }

    /// Issue a token stamped with `now` (Unix seconds).
    ///
    /// Output is a pure function of the inputs: RS256 signatures are
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TokenError::Signing`] if the key cannot sign.
    pub fn issue_at(&self, app_id: &str, signer: &KeySigner, now: i64) -> Result<String> {
        let claims = AppClaims::new(app_id, now, self.config.ttl_seconds);

        let token = self
            .serializer
            .serialize(&claims, signer.encoding_key())
            .inspect_err(|e| warn!(code = e.code(), error = %e, "Token signing failed"))?;

        debug!(iss = %claims.iss, iat = claims.iat, exp = claims.exp, "Issued token");
        Ok(token)
    }

    /// Read the key at `key_path` and issue a token with it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TokenError::FileAccess`] if the key file cannot be
    /// read, or [`crate::TokenError::Signing`] if it is not a usable RSA
    /// private key.
    pub fn issue_from_file(&self, app_id: &str, key_path: impl AsRef<Path>) -> Result<String> {
        let signer = KeySigner::from_pem_file(key_path)
            .inspect_err(|e| warn!(code = e.code(), error = %e, "Key load failed"))?;
        self.issue(app_id, &signer)
    }
}

/// Issue a 10-minute RS256 token for `app_id` signed with the key at `key_path`.
///
/// # Errors
///
/// Returns [`crate::TokenError::FileAccess`] if the key file cannot be read,
/// or [`crate::TokenError::Signing`] if its contents cannot sign RS256.
pub fn issue_token(app_id: &str, key_path: impl AsRef<Path>) -> Result<String> {
    TokenIssuer::default().issue_from_file(app_id, key_path)
}
