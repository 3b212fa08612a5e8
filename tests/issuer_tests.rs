//! Integration tests for token issuance against fixture keys.
//!
//! Fixtures were generated with `openssl genrsa -traditional 2048`.

use app_jwt::jwt::{JwtSerializer, KeySigner};
use app_jwt::{issue_token, verify_token, TokenError, TokenIssuer};
use std::path::PathBuf;

const APP_PUB: &str = include_str!("fixtures/app_key.pub.pem");
const OTHER_PUB: &str = include_str!("fixtures/other_key.pub.pem");

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn payload_json(token: &str) -> serde_json::Value {
    use base64::Engine as _;

    let payload = token.split('.').nth(1).unwrap();
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn test_token_has_three_segments() {
    let token = issue_token("Iv1.abc123", fixture("app_key.pem")).unwrap();

    assert_eq!(token.matches('.').count(), 2);
    assert!(token.split('.').all(|segment| !segment.is_empty()));
}

#[test]
fn test_end_to_end_payload() {
    let before = chrono::Utc::now().timestamp();
    let token = issue_token("Iv1.abc123", fixture("app_key.pem")).unwrap();
    let after = chrono::Utc::now().timestamp();

    let payload = payload_json(&token);
    let object = payload.as_object().unwrap();
    assert_eq!(object.len(), 3, "only iat, exp and iss are present");

    let iat = payload["iat"].as_i64().unwrap();
    let exp = payload["exp"].as_i64().unwrap();
    assert!(iat >= before && iat <= after);
    assert_eq!(exp - iat, 600);
    assert_eq!(payload["iss"], "Iv1.abc123");
}

#[test]
fn test_signature_verifies_with_matching_public_key() {
    let token = issue_token("123456", fixture("app_key.pem")).unwrap();

    let claims = verify_token(&token, APP_PUB).unwrap();
    assert_eq!(claims.iss, "123456");
    assert_eq!(claims.exp - claims.iat, 600);
}

#[test]
fn test_signature_fails_with_other_public_key() {
    let token = issue_token("123456", fixture("app_key.pem")).unwrap();

    let result = verify_token(&token, OTHER_PUB);
    assert!(matches!(result, Err(TokenError::JwtDecoding(_))));
}

#[test]
fn test_same_instant_is_deterministic() {
    let issuer = TokenIssuer::default();
    let signer = KeySigner::from_pem_file(fixture("app_key.pem")).unwrap();
    let now = chrono::Utc::now().timestamp();

    let first = issuer.issue_at("Iv1.abc123", &signer, now).unwrap();
    let second = issuer.issue_at("Iv1.abc123", &signer, now).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_different_instant_changes_signature() {
    let issuer = TokenIssuer::default();
    let signer = KeySigner::from_pem_file(fixture("app_key.pem")).unwrap();
    let now = chrono::Utc::now().timestamp();

    let first = issuer.issue_at("Iv1.abc123", &signer, now).unwrap();
    let second = issuer.issue_at("Iv1.abc123", &signer, now + 1).unwrap();

    let sig = |token: &str| token.rsplit('.').next().unwrap().to_string();
    assert_ne!(sig(&first), sig(&second));
}

#[test]
fn test_issuer_copied_verbatim() {
    let serializer = JwtSerializer::default();

    for app_id in ["", " padded ", "Iv1.abc123", "应用-42", "a\"quote"] {
        let token = issue_token(app_id, fixture("app_key.pem")).unwrap();
        let claims = serializer.deserialize_unverified(&token).unwrap();
        assert_eq!(claims.iss, app_id);
    }
}

#[test]
fn test_missing_key_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.pem");

    match issue_token("42", &missing) {
        Err(TokenError::FileAccess { path, source }) => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected FileAccess, got {other:?}"),
    }
}

#[test]
fn test_directory_as_key_path() {
    let dir = tempfile::tempdir().unwrap();

    let result = issue_token("42", dir.path());
    assert!(matches!(result, Err(TokenError::FileAccess { .. })));
}

#[test]
fn test_non_key_text_is_signing_error() {
    let result = issue_token("42", fixture("not_a_key.txt"));
    assert!(matches!(result, Err(TokenError::Signing(_))));
}

#[test]
fn test_public_key_is_signing_error() {
    let result = issue_token("42", fixture("app_key.pub.pem"));
    assert!(matches!(result, Err(TokenError::Signing(_))));
}

#[test]
fn test_encrypted_key_is_signing_error() {
    let result = issue_token("42", fixture("encrypted_key.pem"));
    assert!(matches!(result, Err(TokenError::Signing(_))));
}

#[test]
fn test_each_key_verifies_only_its_own_tokens() {
    let token = issue_token("123456", fixture("other_key.pem")).unwrap();

    assert!(verify_token(&token, OTHER_PUB).is_ok());
    assert!(verify_token(&token, APP_PUB).is_err());
}

#[test]
fn test_non_utf8_key_file_is_signing_error() {
    let result = issue_token("42", fixture("binary_key.bin"));
    assert!(matches!(result, Err(TokenError::Signing(_))));
}
