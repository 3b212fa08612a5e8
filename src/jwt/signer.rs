//! RSA signing key loading.
//!
//! Key file bytes are held in a [`Zeroizing`] buffer and wiped as soon as
//! the [`EncodingKey`] has been built from them.

use crate::error::{Result, TokenError};
use jsonwebtoken::EncodingKey;
use std::fmt;
use std::path::Path;
use tracing::debug;
use zeroize::Zeroizing;

/// RSA private key ready for JWT signing.
#[derive(Clone)]
pub struct KeySigner {
    key: EncodingKey,
}

impl KeySigner {
    /// Parse a PEM-encoded RSA private key.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Signing`] if the text is not PEM or not an RSA key.
    pub fn from_pem(pem: &str) -> Result<Self> {
        Self::from_pem_bytes(pem.as_bytes())
    }

    /// Parse PEM-encoded RSA private key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Signing`] if the bytes are not PEM or not an RSA key.
    pub fn from_pem_bytes(pem: &[u8]) -> Result<Self> {
        let key = EncodingKey::from_rsa_pem(pem)
            .map_err(|e| TokenError::signing(format!("Invalid RSA private key: {e}")))?;
        Ok(Self { key })
    }

    /// Read and parse a PEM-encoded RSA private key file.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::FileAccess`] if the file cannot be read, or
    /// [`TokenError::Signing`] if its contents are not an RSA private key.
    pub fn from_pem_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let pem = Zeroizing::new(std::fs::read(path).map_err(|e| TokenError::file_access(path, e))?);
        debug!(path = %path.display(), bytes = pem.len(), "Read private key file");

        Self::from_pem_bytes(&pem)
    }

    /// Get the encoding key for JWT serialization.
    #[must_use]
    pub const fn encoding_key(&self) -> &EncodingKey {
        &self.key
    }
}

impl fmt::Debug for KeySigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySigner").finish_non_exhaustive()
    }
}
