//! Logging Submitter - records applications in the service log.
//!
//! Default when no intake endpoint is configured. Always succeeds.

use async_trait::async_trait;

use crate::ports::{ApplicationSnapshot, ApplicationSubmitter, SubmissionError, SubmissionReceipt};

#[derive(Debug, Clone, Default)]
pub struct LoggingSubmitter;

impl LoggingSubmitter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ApplicationSubmitter for LoggingSubmitter {
    async fn submit(
        &self,
        snapshot: &ApplicationSnapshot,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let answers = serde_json::to_string(&snapshot.answers)
            .map_err(|e| SubmissionError::Serialization(e.to_string()))?;

        tracing::info!(
            session_id = %snapshot.session_id,
            attempt = snapshot.attempt,
            fields = snapshot.answers.len(),
            answers = %answers,
            "Application received"
        );

        Ok(SubmissionReceipt::new(snapshot.session_id.to_string()))
    }
}
