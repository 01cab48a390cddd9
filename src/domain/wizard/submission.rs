//! SubmissionState - lifecycle of an application from first answer to hand-off.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where the wizard stands with respect to submitting the application.
///
/// Valid transitions:
/// - Collecting -> Confirming
/// - Confirming -> Submitting
/// - Submitting -> Completed | Failed
/// - Failed -> Submitting (retry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Collecting,
    Confirming,
    Submitting,
    Completed,
    Failed,
}

impl SubmissionState {
    /// Returns true while the confirm action is accepted.
    pub fn accepts_confirm(&self) -> bool {
        matches!(self, SubmissionState::Confirming | SubmissionState::Failed)
    }

    /// Returns true while free-text answers are accepted.
    pub fn accepts_answers(&self) -> bool {
        matches!(self, SubmissionState::Collecting)
    }
}

impl StateMachine for SubmissionState {
    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionState::*;
        match self {
            Collecting => vec![Confirming],
            Confirming => vec![Submitting],
            Submitting => vec![Completed, Failed],
            Failed => vec![Submitting],
            Completed => vec![],
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SubmissionState::Collecting => "collecting",
            SubmissionState::Confirming => "confirming",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Completed => "completed",
            SubmissionState::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}
