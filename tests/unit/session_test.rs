//! Tests for admin authentication and session lifetime

use blogo::core::models::Session;
use blogo::core::services::{AdminCredentials, AuthError, hash_password};
use chrono::{Duration, Utc};

use crate::common::{ADMIN_EMAIL, ADMIN_PASSWORD, authenticator, credentials};

// =============================================================================
// CREDENTIALS
// =============================================================================

#[test]
fn test_hash_is_salted_hex() {
    let a = hash_password("salt-a", "secret");
    let b = hash_password("salt-b", "secret");
    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, b);
    assert_eq!(a, hash_password("salt-a", "secret"));
}

#[test]
fn test_credentials_never_hold_plaintext() {
    let creds = credentials();
    assert_ne!(creds.password_hash, ADMIN_PASSWORD);
    assert!(!creds.salt.is_empty());
    assert!(creds.verify(ADMIN_EMAIL, ADMIN_PASSWORD));
    assert!(!creds.verify(ADMIN_EMAIL, "wrong"));
    assert!(!creds.verify("someone@else.com", ADMIN_PASSWORD));
}

#[test]
fn test_unconfigured_credentials_reject_everything() {
    let creds = AdminCredentials {
        email: String::new(),
        password_hash: String::new(),
        salt: String::new(),
    };
    assert!(!creds.is_configured());
    assert!(!creds.verify("", ""));
}

// =============================================================================
// SESSIONS
// =============================================================================

#[test]
fn test_session_expiry_boundary() {
    let now = Utc::now();
    let session = Session::new("t".to_string(), now, Duration::seconds(60));
    assert!(!session.is_expired_at(now + Duration::seconds(59)));
    assert!(session.is_expired_at(now + Duration::seconds(60)));
    assert_eq!(session.remaining_secs(now), 60);
}

#[test]
fn test_huge_ttl_saturates_instead_of_overflowing() {
    let now = Utc::now();
    let session = Session::new("t".to_string(), now, Duration::MAX);
    assert!(session.expires_at > now);
    assert!(!session.is_expired_at(now));
}

#[test]
fn test_login_issues_valid_session() {
    let auth = authenticator(Duration::hours(1));
    let now = Utc::now();

    let session = auth.login(ADMIN_EMAIL, ADMIN_PASSWORD, now).unwrap();
    assert_eq!(session.expires_at - session.created_at, Duration::hours(1));
    assert!(auth.is_admin(Some(&session.token), now));
    assert_eq!(auth.validate(Some(&session.token), now).unwrap(), session);
}

#[test]
fn test_wrong_password_is_rejected() {
    let auth = authenticator(Duration::hours(1));
    let err = auth.login(ADMIN_EMAIL, "guess", Utc::now()).unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[test]
fn test_expired_session_does_not_validate() {
    let auth = authenticator(Duration::minutes(5));
    let now = Utc::now();
    let session = auth.login(ADMIN_EMAIL, ADMIN_PASSWORD, now).unwrap();

    let later = now + Duration::minutes(6);
    let err = auth.validate(Some(&session.token), later).unwrap_err();
    assert!(matches!(err, AuthError::SessionExpired));

    // Removed once seen expired
    let err = auth.validate(Some(&session.token), now).unwrap_err();
    assert!(matches!(err, AuthError::MissingSession));
}

#[test]
fn test_missing_and_unknown_tokens() {
    let auth = authenticator(Duration::hours(1));
    let now = Utc::now();
    assert!(matches!(auth.validate(None, now), Err(AuthError::MissingSession)));
    assert!(matches!(auth.validate(Some(""), now), Err(AuthError::MissingSession)));
    assert!(matches!(auth.validate(Some("nope"), now), Err(AuthError::MissingSession)));
}

#[test]
fn test_logout_revokes_only_that_session() {
    let auth = authenticator(Duration::hours(1));
    let now = Utc::now();
    let a = auth.login(ADMIN_EMAIL, ADMIN_PASSWORD, now).unwrap();
    let b = auth.login(ADMIN_EMAIL, ADMIN_PASSWORD, now).unwrap();

    assert!(auth.logout(Some(&a.token)).unwrap());
    assert!(!auth.logout(Some(&a.token)).unwrap());
    assert!(!auth.is_admin(Some(&a.token), now));
    assert!(auth.is_admin(Some(&b.token), now));
}

#[test]
fn test_login_purges_expired_sessions() {
    let auth = authenticator(Duration::minutes(1));
    let start = Utc::now();
    let old = auth.login(ADMIN_EMAIL, ADMIN_PASSWORD, start).unwrap();

    let later = start + Duration::minutes(2);
    let fresh = auth.login(ADMIN_EMAIL, ADMIN_PASSWORD, later).unwrap();

    // The old session was purged, not just expired
    assert!(matches!(auth.validate(Some(&old.token), start), Err(AuthError::MissingSession)));
    assert!(auth.is_admin(Some(&fresh.token), later));
}
