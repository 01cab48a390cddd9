//! SessionRegistry port - Where open conversations live between requests.
//!
//! Each session sits behind its own async mutex. A handler holds that lock
//! for one whole action (validate, mutate, append), so actions against the
//! same session never interleave. Different sessions never share state.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::assistant::{ChatError, ChatSession};
use crate::domain::foundation::{ChatSessionId, Timestamp, WizardSessionId};
use crate::domain::wizard::{WizardError, WizardSession};

/// A registered session, locked per action.
pub type SharedSession<S> = Arc<Mutex<S>>;

/// Errors that can occur in session registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The id is already taken.
    #[error("Session already registered: {0}")]
    Duplicate(String),

    /// The registry refuses to hold more sessions.
    #[error("Too many open sessions (limit {limit})")]
    CapacityReached { limit: usize },
}

impl From<RegistryError> for WizardError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::CapacityReached { limit } => WizardError::CapacityReached { limit },
            RegistryError::Duplicate(_) => WizardError::infrastructure(err.to_string()),
        }
    }
}

impl From<RegistryError> for ChatError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::CapacityReached { limit } => ChatError::CapacityReached { limit },
            RegistryError::Duplicate(_) => ChatError::infrastructure(err.to_string()),
        }
    }
}

/// What a registry needs to know to let a session go on its own.
pub trait ExpiringSession: Send + 'static {
    /// When the visitor last acted.
    fn last_active(&self) -> &Timestamp;

    /// True once nothing more can happen; the slot may be reclaimed.
    fn is_finished(&self) -> bool {
        false
    }

    /// Marks the session dead so late callbacks become no-ops.
    fn discard(&mut self);

    /// True when no activity has been seen for at least `max_idle`.
    fn is_idle(&self, now: &Timestamp, max_idle: Duration) -> bool {
        now.duration_since(self.last_active())
            .to_std()
            .map_or(false, |idle| idle >= max_idle)
    }
}

impl ExpiringSession for WizardSession {
    fn last_active(&self) -> &Timestamp {
        WizardSession::last_active(self)
    }

    fn is_finished(&self) -> bool {
        WizardSession::is_finished(self)
    }

    fn discard(&mut self) {
        WizardSession::discard(self)
    }
}

impl ExpiringSession for ChatSession {
    fn last_active(&self) -> &Timestamp {
        ChatSession::last_active(self)
    }

    fn discard(&mut self) {
        ChatSession::discard(self)
    }
}

/// Port for holding open sessions keyed by id.
///
/// Removing a session only unregisters it; holders of the
/// [`SharedSession`] keep a valid handle, which is why sessions carry
/// their own discarded flag.
///
/// Finished sessions still count against the limit until a new session
/// needs their slot.
#[async_trait]
pub trait SessionRegistry<K, S>: Send + Sync
where
    K: Send + Sync + 'static,
    S: ExpiringSession,
{
    /// Registers a new session and returns its shared handle.
    async fn insert(&self, id: K, session: S) -> Result<SharedSession<S>, RegistryError>;

    /// Looks up an open session.
    async fn get(&self, id: &K) -> Option<SharedSession<S>>;

    /// Unregisters a session, returning its handle if it was open.
    async fn remove(&self, id: &K) -> Option<SharedSession<S>>;

    /// Number of open sessions.
    async fn len(&self) -> usize;

    /// Unregisters and discards every session idle for at least
    /// `max_idle`. Sessions locked by an in-flight action are skipped.
    ///
    /// Returns how many sessions were evicted.
    async fn evict_idle(&self, max_idle: Duration) -> usize;
}

/// Registry of open application wizards.
pub type WizardRegistry = dyn SessionRegistry<WizardSessionId, WizardSession>;

/// Registry of open assistant chats.
pub type ChatRegistry = dyn SessionRegistry<ChatSessionId, ChatSession>;
