//! Session store port
//!
//! Defines the interface for keeping issued admin sessions.

use chrono::{DateTime, Utc};

use super::super::models::Session;

/// Storage backend for admin sessions
pub trait SessionStore: Send + Sync {
    /// Remember a newly issued session
    fn insert(&self, session: Session) -> anyhow::Result<()>;

    /// Look up a session by token
    fn get(&self, token: &str) -> anyhow::Result<Option<Session>>;

    /// Forget a session; returns whether it existed
    fn remove(&self, token: &str) -> anyhow::Result<bool>;

    /// Drop every session expired at `now`; returns how many were dropped
    fn purge_expired(&self, now: DateTime<Utc>) -> anyhow::Result<usize>;
}
