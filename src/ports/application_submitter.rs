//! ApplicationSubmitter port - Hands a confirmed application to the outside world.
//!
//! The wizard only cares whether the call resolved; the receipt is logged
//! and otherwise ignored.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::foundation::{Timestamp, WizardSessionId};
use crate::domain::wizard::{AnswerStore, SubmissionTicket};

/// The payload handed off on confirm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationSnapshot {
    pub session_id: WizardSessionId,
    pub attempt: u32,
    pub answers: AnswerStore,
    pub submitted_at: Timestamp,
}

impl From<SubmissionTicket> for ApplicationSnapshot {
    fn from(ticket: SubmissionTicket) -> Self {
        Self {
            session_id: ticket.session_id,
            attempt: ticket.attempt,
            answers: ticket.answers,
            submitted_at: Timestamp::now(),
        }
    }
}

/// Acknowledgement from the collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub reference: String,
    pub accepted_at: Timestamp,
}

impl SubmissionReceipt {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            accepted_at: Timestamp::now(),
        }
    }
}

/// Errors that can occur when handing off an application.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Submission rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Submission endpoint unavailable: {0}")]
    Unavailable(String),

    #[error("Submission timed out")]
    Timeout,

    #[error("Failed to encode application: {0}")]
    Serialization(String),
}

/// Port for handing off confirmed applications.
#[async_trait]
pub trait ApplicationSubmitter: Send + Sync {
    /// Delivers one application snapshot.
    ///
    /// # Errors
    ///
    /// Any `SubmissionError` moves the wizard to its failed state.
    async fn submit(
        &self,
        snapshot: &ApplicationSnapshot,
    ) -> Result<SubmissionReceipt, SubmissionError>;
}
