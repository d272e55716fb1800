//! Authentication service
//!
//! One admin, identified by an email and a salted SHA-256 password hash.
//! Every successful login gets its own random session token; logging out
//! revokes that token only.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::core::models::Session;
use crate::core::ports::SessionStore;

/// Bytes of randomness in a session token (hex-encoded to twice as many chars)
const TOKEN_BYTES: usize = 32;

/// Bytes of randomness in a password salt
const SALT_BYTES: usize = 16;

/// Authentication failures
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password did not match
    #[error("invalid credentials")]
    InvalidCredentials,
    /// No token, or a token the store does not know
    #[error("no active session")]
    MissingSession,
    /// Token known but past its expiry
    #[error("session expired")]
    SessionExpired,
    /// The session store failed
    #[error("session store error: {0}")]
    Store(#[from] anyhow::Error),
}

/// The admin credential pair as stored in configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    /// Admin email (compared case-insensitively)
    pub email: String,
    /// Hex SHA-256 of `salt + password`
    pub password_hash: String,
    /// Random salt, hex
    pub salt: String,
}

impl AdminCredentials {
    /// Build credentials from a plaintext password with a fresh salt
    #[must_use]
    pub fn from_password(email: &str, password: &str) -> Self {
        let salt = generate_salt();
        let password_hash = hash_password(&salt, password);
        Self {
            email: email.trim().to_string(),
            password_hash,
            salt,
        }
    }

    /// Whether a password hash has been configured at all
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.email.is_empty() && !self.password_hash.is_empty()
    }

    /// Check an email/password pair
    #[must_use]
    pub fn verify(&self, email: &str, password: &str) -> bool {
        if !self.is_configured() {
            return false;
        }
        let email_ok = self.email.trim().eq_ignore_ascii_case(email.trim());
        let hash_ok = constant_time_eq(
            hash_password(&self.salt, password).as_bytes(),
            self.password_hash.to_ascii_lowercase().as_bytes(),
        );
        email_ok && hash_ok
    }
}

/// Issues, validates and revokes admin sessions
pub struct Authenticator {
    credentials: AdminCredentials,
    sessions: Box<dyn SessionStore>,
    ttl: Duration,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("email", &self.credentials.email)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl Authenticator {
    /// Create an authenticator
    #[must_use]
    pub fn new(credentials: AdminCredentials, sessions: Box<dyn SessionStore>, ttl: Duration) -> Self {
        Self {
            credentials,
            sessions,
            ttl,
        }
    }

    /// Session lifetime
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Verify credentials and issue a new session
    pub fn login(&self, email: &str, password: &str, now: DateTime<Utc>) -> Result<Session, AuthError> {
        if !self.credentials.is_configured() {
            log::warn!("login attempted but no admin credentials are configured");
            return Err(AuthError::InvalidCredentials);
        }
        if !self.credentials.verify(email, password) {
            log::info!("rejected login for {email}");
            return Err(AuthError::InvalidCredentials);
        }

        let purged = self.sessions.purge_expired(now)?;
        if purged > 0 {
            log::debug!("purged {purged} expired session(s)");
        }

        let session = Session::new(generate_token(), now, self.ttl);
        self.sessions.insert(session.clone())?;
        log::info!("admin logged in");
        Ok(session)
    }

    /// Resolve a cookie token to a live session
    pub fn validate(&self, token: Option<&str>, now: DateTime<Utc>) -> Result<Session, AuthError> {
        let token = token.filter(|t| !t.is_empty()).ok_or(AuthError::MissingSession)?;
        let session = self.sessions.get(token)?.ok_or(AuthError::MissingSession)?;

        if session.is_expired_at(now) {
            self.sessions.remove(token)?;
            log::debug!("dropped expired session");
            return Err(AuthError::SessionExpired);
        }
        Ok(session)
    }

    /// Whether the token belongs to a live admin session
    #[must_use]
    pub fn is_admin(&self, token: Option<&str>, now: DateTime<Utc>) -> bool {
        match self.validate(token, now) {
            Ok(_) => true,
            Err(AuthError::Store(e)) => {
                log::error!("session lookup failed: {e:#}");
                false
            },
            Err(_) => false,
        }
    }

    /// Revoke a session; returns whether a session was removed
    pub fn logout(&self, token: Option<&str>) -> Result<bool, AuthError> {
        match token.filter(|t| !t.is_empty()) {
            Some(token) => Ok(self.sessions.remove(token)?),
            None => Ok(false),
        }
    }
}

/// Hex SHA-256 of `salt` followed by `password`
#[must_use]
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    to_hex(&hasher.finalize())
}

/// Fresh random salt, hex-encoded
#[must_use]
pub fn generate_salt() -> String {
    let bytes: [u8; SALT_BYTES] = rand::thread_rng().r#gen();
    to_hex(&bytes)
}

/// Fresh random session token, hex-encoded
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; TOKEN_BYTES] = rand::thread_rng().r#gen();
    to_hex(&bytes)
}

fn to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write as _;
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
        let _ = write!(out, "{b:02x}");
        out
    })
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
