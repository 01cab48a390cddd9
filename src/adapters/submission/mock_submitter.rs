//! Mock Submitter for testing.
//!
//! # Features
//!
//! - Queued failures, consumed in order
//! - Simulated latency
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let submitter = MockSubmitter::new()
//!     .with_failure(SubmissionError::Timeout)
//!     .with_delay(Duration::from_millis(50));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::ports::{ApplicationSnapshot, ApplicationSubmitter, SubmissionError, SubmissionReceipt};

/// Mock submitter that succeeds unless a failure is queued.
#[derive(Debug, Clone, Default)]
pub struct MockSubmitter {
    failures: Arc<Mutex<VecDeque<SubmissionError>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<ApplicationSnapshot>>>,
}

impl MockSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one failure for the next call.
    pub fn with_failure(self, error: SubmissionError) -> Self {
        if let Ok(mut failures) = self.failures.try_lock() {
            failures.push_back(error);
        }
        self
    }

    /// Sets simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made.
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    /// Returns all recorded snapshots.
    pub async fn calls(&self) -> Vec<ApplicationSnapshot> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl ApplicationSubmitter for MockSubmitter {
    async fn submit(
        &self,
        snapshot: &ApplicationSnapshot,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        self.calls.lock().await.push(snapshot.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.failures.lock().await.pop_front() {
            Some(error) => Err(error),
            None => Ok(SubmissionReceipt::new(format!("mock-{}", snapshot.attempt))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Timestamp, WizardSessionId};
    use crate::domain::wizard::AnswerStore;

    fn snapshot(attempt: u32) -> ApplicationSnapshot {
        ApplicationSnapshot {
            session_id: WizardSessionId::new(),
            attempt,
            answers: AnswerStore::new(),
            submitted_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn queued_failures_come_first() {
        let submitter = MockSubmitter::new().with_failure(SubmissionError::Timeout);

        assert_eq!(submitter.submit(&snapshot(1)).await, Err(SubmissionError::Timeout));
        let receipt = submitter.submit(&snapshot(2)).await.unwrap();
        assert_eq!(receipt.reference, "mock-2");
        assert_eq!(submitter.call_count().await, 2);
    }
}
