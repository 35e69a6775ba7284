//! Tests for the auth module

use super::*;
use crate::config::AuthSettings;
use crate::error::Error;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use test_case::test_case;

const NOW: i64 = 1_700_000_000;

fn issuer() -> TokenIssuer {
    TokenIssuer::new(&AuthSettings {
        username: "admin".to_string(),
        password: "password".to_string(),
        secret: "test-secret".to_string(),
        token_lifetime_seconds: 300,
    })
}

// ============================================================================
// Issue Tests
// ============================================================================

#[test]
fn test_issue_with_valid_credentials() {
    let issued = issuer().issue_at("admin", "password", NOW).unwrap();
    assert_eq!(issued.claims.sub, "admin");
    assert_eq!(issued.claims.iat, NOW);
    assert_eq!(issued.claims.exp, NOW + 300);
    assert_eq!(issued.expires_at().unwrap().timestamp(), NOW + 300);
    assert_eq!(issued.token.split('.').count(), 3);
}

#[test_case("admin", "wrong" ; "wrong password")]
#[test_case("root", "password" ; "unknown user")]
#[test_case("", "" ; "empty")]
fn test_issue_rejects_bad_credentials(username: &str, password: &str) {
    let err = issuer().issue_at(username, password, NOW).unwrap_err();
    assert!(matches!(err, Error::Unauthorized { .. }));
}

#[test]
fn test_reissue_gives_independent_tokens() {
    let issuer = issuer();
    let first = issuer.issue_at("admin", "password", NOW).unwrap();
    let second = issuer.issue_at("admin", "password", NOW + 10).unwrap();
    assert_ne!(first.token, second.token);

    assert!(issuer.verify_at(&first.token, NOW + 20).is_ok());
    assert!(issuer.verify_at(&second.token, NOW + 20).is_ok());
}

// ============================================================================
// Verify Tests
// ============================================================================

#[test]
fn test_verify_bare_and_prefixed_token() {
    let issuer = issuer();
    let token = issuer.issue_at("admin", "password", NOW).unwrap().token;

    assert_eq!(issuer.verify_at(&token, NOW).unwrap().sub, "admin");
    assert!(issuer.verify_at(&format!("Bearer {token}"), NOW).is_ok());
    assert!(issuer.verify_at(&format!("bearer {token}"), NOW).is_ok());
    assert!(issuer.verify_at(&format!("BEARER {token}"), NOW).is_ok());
}

#[test]
fn test_verify_expiry_boundary() {
    let issuer = issuer();
    let token = issuer.issue_at("admin", "password", NOW).unwrap().token;

    assert!(issuer.verify_at(&token, NOW + 299).is_ok());
    assert!(issuer.verify_at(&token, NOW + 300).is_err());
    assert!(issuer.verify_at(&token, NOW + 3600).is_err());
}

#[test]
fn test_verify_with_wall_clock() {
    let issuer = issuer();
    let token = issuer.issue("admin", "password").unwrap().token;
    assert!(issuer.verify(Some(&token)).is_ok());

    let stale = issuer.sign("admin", NOW).unwrap().token;
    assert!(issuer.verify(Some(&stale)).is_err());
}

#[test]
fn test_verify_missing_header() {
    let err = issuer().verify(None).unwrap_err();
    assert!(matches!(err, Error::Unauthorized { .. }));
}

#[test_case("" ; "empty")]
#[test_case("Bearer " ; "prefix only")]
#[test_case("garbage" ; "garbage")]
#[test_case("Bearer a.b.c" ; "malformed jwt")]
fn test_verify_rejects_garbage(header: &str) {
    let err = issuer().verify_at(header, NOW).unwrap_err();
    assert!(matches!(err, Error::Unauthorized { .. }));
}

#[test]
fn test_verify_rejects_foreign_secret() {
    let other = TokenIssuer::new(&AuthSettings {
        secret: "another-secret".to_string(),
        ..AuthSettings::default()
    });
    let token = other.issue_at("admin", "password", NOW).unwrap().token;
    assert!(issuer().verify_at(&token, NOW).is_err());
}

#[test]
fn test_verify_rejects_tampered_payload() {
    let issuer = issuer();
    let token = issuer.issue_at("admin", "password", NOW).unwrap().token;
    let parts: Vec<&str> = token.split('.').collect();

    let forged_claims = serde_json::json!({"sub": "admin", "iat": NOW, "exp": NOW + 999_999});
    let forged_payload = URL_SAFE_NO_PAD.encode(forged_claims.to_string());
    let forged = format!("{}.{}.{}", parts[0], forged_payload, parts[2]);

    assert!(issuer.verify_at(&forged, NOW).is_err());
}

// ============================================================================
// Helper Tests
// ============================================================================

#[test_case("Bearer abc", "abc" ; "canonical")]
#[test_case("bEaReR abc", "abc" ; "mixed case")]
#[test_case("abc", "abc" ; "bare")]
#[test_case("Bearerabc", "Bearerabc" ; "no space")]
#[test_case("Basic abc", "Basic abc" ; "other scheme")]
fn test_strip_bearer(input: &str, expected: &str) {
    assert_eq!(strip_bearer(input), expected);
}

#[test]
fn test_credentials_match() {
    let creds = Credentials::default();
    assert!(creds.matches("admin", "password"));
    assert!(!creds.matches("admin", "Password"));
}
