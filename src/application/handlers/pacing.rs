//! Pause-then-settle step shared by wizard and assistant handlers.

use std::sync::Arc;

use crate::ports::{Pause, ResponsePacer, SharedSession};

/// Waits out `pause`, then runs `settle` under the session lock.
///
/// The wait runs on its own task so a dropped request cannot leave the
/// typing latch set. Returns whatever `settle` returns, or false if the
/// task was cancelled.
pub(crate) async fn settle_after<S, F>(
    session: SharedSession<S>,
    pacer: Arc<dyn ResponsePacer>,
    pause: Pause,
    settle: F,
) -> bool
where
    S: Send + 'static,
    F: FnOnce(&mut S) -> bool + Send + 'static,
{
    let task = tokio::spawn(async move {
        pacer.pause(pause).await;
        let mut guard = session.lock().await;
        settle(&mut guard)
    });
    task.await.unwrap_or(false)
}
