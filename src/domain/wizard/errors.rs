//! Wizard-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, WizardSessionId};

use super::script::ScriptError;
use super::submission::SubmissionState;

/// Reasons a wizard action is refused.
///
/// A refused action never mutates the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Wizard not found: {0}")]
    NotFound(WizardSessionId),

    #[error("Wizard has been closed")]
    Discarded,

    #[error("The assistant is still typing")]
    Busy,

    #[error("Answers are complete; use the confirm action to submit")]
    AwaitingConfirmation,

    #[error("Confirm is not available while {0}")]
    ConfirmUnavailable(SubmissionState),

    #[error("Application already completed")]
    Completed,

    #[error("Application is being submitted")]
    SubmissionInFlight,

    #[error("Submission attempt {0} is no longer current")]
    StaleSubmission(u32),

    #[error("Too many open wizards (limit {limit})")]
    CapacityReached { limit: usize },

    #[error("Invalid wizard script: {0}")]
    InvalidScript(#[from] ScriptError),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl WizardError {
    pub fn not_found(id: WizardSessionId) -> Self {
        WizardError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        WizardError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::NotFound(_) => ErrorCode::WizardNotFound,
            WizardError::Discarded => ErrorCode::SessionDiscarded,
            WizardError::Busy | WizardError::SubmissionInFlight => ErrorCode::SessionBusy,
            WizardError::AwaitingConfirmation => ErrorCode::AwaitingConfirmation,
            WizardError::ConfirmUnavailable(_) => ErrorCode::ConfirmUnavailable,
            WizardError::Completed => ErrorCode::ApplicationCompleted,
            WizardError::StaleSubmission(_) => ErrorCode::InvalidStateTransition,
            WizardError::CapacityReached { .. } => ErrorCode::CapacityReached,
            WizardError::InvalidScript(_) => ErrorCode::InvalidScript,
            WizardError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<WizardError> for DomainError {
    fn from(err: WizardError) -> Self {
        let code = err.code();
        let message = err.to_string();
        match err {
            WizardError::NotFound(id) => {
                DomainError::new(code, message).with_detail("session_id", id.to_string())
            }
            WizardError::ConfirmUnavailable(state) => {
                DomainError::new(code, message).with_detail("state", state.to_string())
            }
            _ => DomainError::new(code, message),
        }
    }
}
