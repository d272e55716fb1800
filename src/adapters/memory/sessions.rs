//! In-memory session store

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use crate::core::models::Session;
use crate::core::ports::SessionStore;

/// Session store keyed by token
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl MemorySessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions currently held, expired or not
    pub fn len(&self) -> anyhow::Result<usize> {
        Ok(self.lock()?.len())
    }

    /// Whether no sessions are held
    pub fn is_empty(&self) -> anyhow::Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> anyhow::Result<MutexGuard<'_, HashMap<String, Session>>> {
        self.sessions.lock().map_err(|_| anyhow::anyhow!("session store lock poisoned"))
    }
}

impl SessionStore for MemorySessionStore {
    fn insert(&self, session: Session) -> anyhow::Result<()> {
        self.lock()?.insert(session.token.clone(), session);
        Ok(())
    }

    fn get(&self, token: &str) -> anyhow::Result<Option<Session>> {
        Ok(self.lock()?.get(token).cloned())
    }

    fn remove(&self, token: &str) -> anyhow::Result<bool> {
        Ok(self.lock()?.remove(token).is_some())
    }

    fn purge_expired(&self, now: DateTime<Utc>) -> anyhow::Result<usize> {
        let mut sessions = self.lock()?;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired_at(now));
        Ok(before - sessions.len())
    }
}
