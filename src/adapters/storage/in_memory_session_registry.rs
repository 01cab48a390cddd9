//! In-Memory Session Registry Adapter
//!
//! Holds open sessions in a process-local map. Sessions are transient by
//! nature, so this is the production adapter as well as the test one.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::Timestamp;
use crate::ports::{ExpiringSession, RegistryError, SessionRegistry, SharedSession};

/// In-memory registry of open sessions.
#[derive(Debug)]
pub struct InMemorySessionRegistry<K, S> {
    sessions: Arc<RwLock<HashMap<K, SharedSession<S>>>>,
    max_sessions: Option<usize>,
}

impl<K, S> InMemorySessionRegistry<K, S> {
    /// Create an unbounded registry
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions: None,
        }
    }

    /// Create a registry that refuses new sessions past `limit`
    pub fn with_limit(limit: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions: Some(limit),
        }
    }
}

impl<K, S> Default for InMemorySessionRegistry<K, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> Clone for InMemorySessionRegistry<K, S> {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            max_sessions: self.max_sessions,
        }
    }
}

/// Removes every entry `expired` selects, discarding it first.
///
/// Entries whose lock is held by an in-flight action are kept.
fn evict_where<K, S, F>(sessions: &mut HashMap<K, SharedSession<S>>, expired: F) -> usize
where
    K: Display,
    S: ExpiringSession,
    F: Fn(&S) -> bool,
{
    let before = sessions.len();
    sessions.retain(|id, shared| match shared.try_lock() {
        Ok(mut session) if expired(&*session) => {
            session.discard();
            tracing::debug!(session_id = %id, "Session evicted");
            false
        }
        _ => true,
    });
    before - sessions.len()
}

#[async_trait]
impl<K, S> SessionRegistry<K, S> for InMemorySessionRegistry<K, S>
where
    K: Eq + Hash + Clone + Display + Send + Sync + 'static,
    S: ExpiringSession,
{
    async fn insert(&self, id: K, session: S) -> Result<SharedSession<S>, RegistryError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&id) {
            return Err(RegistryError::Duplicate(id.to_string()));
        }
        if let Some(limit) = self.max_sessions {
            if sessions.len() >= limit {
                evict_where(&mut *sessions, S::is_finished);
            }
            if sessions.len() >= limit {
                return Err(RegistryError::CapacityReached { limit });
            }
        }

        let shared = Arc::new(Mutex::new(session));
        sessions.insert(id, Arc::clone(&shared));
        Ok(shared)
    }

    async fn get(&self, id: &K) -> Option<SharedSession<S>> {
        self.sessions.read().await.get(id).cloned()
    }

    async fn remove(&self, id: &K) -> Option<SharedSession<S>> {
        self.sessions.write().await.remove(id)
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    async fn evict_idle(&self, max_idle: Duration) -> usize {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;
        evict_where(&mut *sessions, |session| session.is_idle(&now, max_idle))
    }
}
