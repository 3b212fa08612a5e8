//! Compact RS256 encoding and decoding of [`AppClaims`].

use crate::error::{Result, TokenError};
use crate::jwt::claims::AppClaims;
use base64::Engine as _;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Compact JWT encoding and decoding for [`AppClaims`].
pub struct JwtSerializer {
    algorithm: Algorithm,
}

impl Default for JwtSerializer {
    fn default() -> Self {
        Self::new(Algorithm::RS256)
    }
}

impl JwtSerializer {
    /// Create a serializer for the given algorithm.
    pub const fn new(algorithm: Algorithm) -> Self {
        JwtSerializer { algorithm }
    }

    /// Algorithm written to the token header.
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Sign `claims` and return the three-segment compact token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Signing`] if the key cannot sign with the
    /// configured algorithm.
    pub fn serialize(&self, claims: &AppClaims, key: &EncodingKey) -> Result<String> {
        let header = Header::new(self.algorithm);

        Ok(encode(&header, claims, key)?)
    }

    /// Verify the signature and expiry, then return the claims.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::JwtDecoding`] if the signature does not match,
    /// the token has expired, or a required claim is missing.
    pub fn deserialize(&self, token: &str, key: &DecodingKey) -> Result<AppClaims> {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "iat", "iss"]);

        let token_data = decode::<AppClaims>(token, key, &validation)
            .map_err(|e| TokenError::jwt_decoding(e.to_string()))?;

        Ok(token_data.claims)
    }

    /// Decode the payload without checking the signature.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::JwtDecoding`] if the token is not three
    /// segments or the payload is not base64url-encoded claims JSON.
    pub fn deserialize_unverified(&self, token: &str) -> Result<AppClaims> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return Err(TokenError::jwt_decoding("Invalid token format"));
        }

        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(parts[1])
            .map_err(|e| TokenError::jwt_decoding(e.to_string()))?;

        serde_json::from_slice(&payload).map_err(|e| TokenError::jwt_decoding(e.to_string()))
    }
}

/// Verify `token` against a PEM-encoded RSA public key.
///
/// # Errors
///
/// Returns [`TokenError::JwtDecoding`] if the key cannot be parsed, the
/// signature does not match, or the token has expired.
pub fn verify_token(token: &str, public_key_pem: &str) -> Result<AppClaims> {
    let key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes())
        .map_err(|e| TokenError::jwt_decoding(format!("Invalid RSA public key: {e}")))?;

    JwtSerializer::default().deserialize(token, &key)
}
