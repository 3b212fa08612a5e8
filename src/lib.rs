//! App JWT library.
//!
//! Issues short-lived RS256 tokens that authenticate a GitHub App (or any
//! service using the same `iat`/`exp`/`iss` scheme) from its application
//! identifier and PEM private key.
//!
//! ```no_run
//! let token = app_jwt::issue_token("123456", "app.private-key.pem")?;
//! println!("JWT={token}");
//! # Ok::<(), app_jwt::TokenError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod issuer;
pub mod jwt;
pub mod tracing_config;

// Re-exports for convenience
pub use config::IssuerConfig;
pub use error::TokenError;
pub use issuer::{issue_token, TokenIssuer};
pub use jwt::{verify_token, AppClaims};
