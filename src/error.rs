//! Error types for token issuance.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TokenError>;

/// Errors raised while loading a key or issuing a token.
#[derive(Error, Debug)]
pub enum TokenError {
    /// The private key file could not be opened or read.
    #[error("Cannot read key file {}: {source}", path.display())]
    FileAccess {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The key is not a usable RSA private key, or signing failed.
    #[error("Signing error: {0}")]
    Signing(String),

    /// A token could not be decoded or failed verification.
    #[error("JWT decoding error: {0}")]
    JwtDecoding(String),

    /// Issuer configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TokenError {
    /// Create a file access error for the given path.
    #[must_use]
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Create a signing error.
    #[must_use]
    pub fn signing(msg: impl Into<String>) -> Self {
        Self::Signing(msg.into())
    }

    /// Create a decoding error.
    #[must_use]
    pub fn jwt_decoding(msg: impl Into<String>) -> Self {
        Self::JwtDecoding(msg.into())
    }

    /// Create a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Short code for the error class, used in log events.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::FileAccess { .. } => TOKEN_FILE_ACCESS,
            Self::Signing(_) => TOKEN_SIGNING,
            Self::JwtDecoding(_) => TOKEN_DECODING,
            Self::Config(_) => TOKEN_CONFIG,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        TokenError::Signing(err.to_string())
    }
}

/// Key file could not be read.
pub const TOKEN_FILE_ACCESS: &str = "TOKEN_FILE_ACCESS";
/// Key rejected or signing failed.
pub const TOKEN_SIGNING: &str = "TOKEN_SIGNING";
/// Token could not be decoded or verified.
pub const TOKEN_DECODING: &str = "TOKEN_DECODING";
/// Invalid issuer configuration.
pub const TOKEN_CONFIG: &str = "TOKEN_CONFIG";
