//! Idle Sweeper - periodically evicts abandoned sessions.
//!
//! Visitors often leave without closing the wizard or the chat, so the
//! server never hears about it. The sweeper drops any session that has
//! seen no activity for `max_idle`, discarding it so that pending pauses
//! and hand-offs for it become no-ops.
//!
//! # Configuration
//!
//! | Field | Default | Description |
//! |-------|---------|-------------|
//! | `max_idle` | 30 min | Inactivity before a session is evicted |
//! | `interval` | 60 s | How often to sweep |

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use crate::ports::{ExpiringSession, SessionRegistry};

/// Sweep timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdleSweeperConfig {
    pub max_idle: Duration,
    pub interval: Duration,
}

impl Default for IdleSweeperConfig {
    fn default() -> Self {
        Self {
            max_idle: Duration::from_secs(30 * 60),
            interval: Duration::from_secs(60),
        }
    }
}

impl IdleSweeperConfig {
    pub fn new(max_idle: Duration) -> Self {
        Self {
            max_idle,
            ..Self::default()
        }
    }
}

/// Background task that evicts idle sessions from one registry.
pub struct IdleSweeper<K, S>
where
    K: Send + Sync + 'static,
    S: ExpiringSession,
{
    registry: Arc<dyn SessionRegistry<K, S>>,
    config: IdleSweeperConfig,
    kind: &'static str,
}

impl<K, S> IdleSweeper<K, S>
where
    K: Send + Sync + 'static,
    S: ExpiringSession,
{
    /// `kind` labels log lines ("wizard", "chat").
    pub fn new(
        registry: Arc<dyn SessionRegistry<K, S>>,
        config: IdleSweeperConfig,
        kind: &'static str,
    ) -> Self {
        Self {
            registry,
            config,
            kind,
        }
    }

    /// Sweeps on every tick until shutdown is signalled.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = time::interval(self.config.interval);

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        return;
                    }
                }
                _ = interval.tick() => {
                    self.sweep().await;
                }
            }
        }
    }

    /// Runs a single sweep and returns how many sessions were evicted.
    pub async fn sweep(&self) -> usize {
        let evicted = self.registry.evict_idle(self.config.max_idle).await;
        if evicted > 0 {
            tracing::info!(kind = self.kind, evicted, "Evicted idle sessions");
        }
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionRegistry;
    use crate::domain::assistant::{ChatSession, Language};
    use crate::domain::foundation::ChatSessionId;

    type Registry = InMemorySessionRegistry<ChatSessionId, ChatSession>;

    fn registry() -> Arc<Registry> {
        Arc::new(InMemorySessionRegistry::new())
    }

    fn sweeper(
        registry: &Arc<Registry>,
        config: IdleSweeperConfig,
    ) -> IdleSweeper<ChatSessionId, ChatSession> {
        IdleSweeper::new(registry.clone(), config, "chat")
    }

    #[test]
    fn default_config_sweeps_every_minute() {
        let config = IdleSweeperConfig::new(Duration::from_secs(120));
        assert_eq!(config.max_idle, Duration::from_secs(120));
        assert_eq!(config.interval, Duration::from_secs(60));
    }

    #[tokio::test]
    async fn sweep_evicts_and_discards_abandoned_chats() {
        let registry = registry();
        let id = ChatSessionId::new();
        let shared = registry
            .insert(id, ChatSession::start(id, Language::En))
            .await
            .unwrap();
        let sweeper = sweeper(&registry, IdleSweeperConfig::new(Duration::ZERO));

        assert_eq!(sweeper.sweep().await, 1);
        assert!(registry.get(&id).await.is_none());
        assert!(shared.lock().await.is_discarded());
    }

    #[tokio::test]
    async fn recent_chats_survive_a_sweep() {
        let registry = registry();
        let id = ChatSessionId::new();
        registry
            .insert(id, ChatSession::start(id, Language::En))
            .await
            .unwrap();
        let sweeper = sweeper(&registry, IdleSweeperConfig::new(Duration::from_secs(600)));

        assert_eq!(sweeper.sweep().await, 0);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn run_stops_on_shutdown() {
        let sweeper = sweeper(
            &registry(),
            IdleSweeperConfig {
                interval: Duration::from_millis(5),
                ..IdleSweeperConfig::default()
            },
        );
        let (tx, rx) = watch::channel(false);
        let task = tokio::spawn(async move { sweeper.run(rx).await });

        tx.send(true).unwrap();

        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .unwrap()
            .unwrap();
    }
}
