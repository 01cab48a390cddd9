//! Instant Pacer - no delays, records what was asked for.
//!
//! Used in tests so handler flows run without waiting on the clock.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::ports::{Pause, ResponsePacer};

#[derive(Debug, Clone, Default)]
pub struct InstantPacer {
    pauses: Arc<Mutex<Vec<Pause>>>,
}

impl InstantPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pauses requested so far, in order.
    pub async fn pauses(&self) -> Vec<Pause> {
        self.pauses.lock().await.clone()
    }
}

#[async_trait]
impl ResponsePacer for InstantPacer {
    async fn pause(&self, pause: Pause) {
        self.pauses.lock().await.push(pause);
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_pauses_in_order() {
        let pacer = InstantPacer::new();
        pacer.pause(Pause::Greeting).await;
        pacer.pause(Pause::Typing).await;
        assert_eq!(pacer.pauses().await, vec![Pause::Greeting, Pause::Typing]);
    }
}
