//! WizardView - read model for whatever renders the wizard.
//!
//! Rebuilt after every mutation; it never feeds back into the session.

use serde::Serialize;

use crate::domain::conversation::TranscriptEntry;
use crate::domain::foundation::WizardSessionId;

use super::answers::AnswerStore;
use super::messages;
use super::review::{review_rows, ReviewRow};
use super::session::WizardSession;
use super::step::InputKind;
use super::submission::SubmissionState;

/// Which input control the renderer should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputControl {
    TextInput {
        kind: InputKind,
        multiline: bool,
        optional: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    ConfirmButton,
    RetryButton,
    /// Input disabled while the hand-off runs.
    Submitting,
    CompletedNotice {
        text: String,
    },
}

/// The active step as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    pub id: String,
    pub prompt: String,
    pub input_kind: InputKind,
    pub optional: bool,
}

/// Snapshot of a wizard for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardView {
    pub session_id: WizardSessionId,
    pub state: SubmissionState,
    pub current_index: usize,
    pub current_step: Option<StepView>,
    pub progress_label: String,
    pub input: InputControl,
    /// False while the bot is "typing" or the input is otherwise locked.
    pub input_enabled: bool,
    pub typing: bool,
    pub transcript: Vec<TranscriptEntry>,
    pub answers: AnswerStore,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub review: Vec<ReviewRow>,
}

impl From<&WizardSession> for WizardView {
    fn from(session: &WizardSession) -> Self {
        let state = session.state();
        let current_step = session.current_step().map(|s| StepView {
            id: s.id.clone(),
            prompt: s.prompt.clone(),
            input_kind: s.input_kind,
            optional: s.optional,
        });

        let progress_label = match (state, session.question_number()) {
            (SubmissionState::Collecting, Some(n)) => {
                format!("Step {}/{}", n, session.script().answerable_count())
            }
            _ => "Review".to_string(),
        };

        let input = match state {
            SubmissionState::Collecting => match session.current_step() {
                Some(step) => InputControl::TextInput {
                    kind: step.input_kind,
                    multiline: step.input_kind.is_multiline(),
                    optional: step.optional,
                    placeholder: step.placeholder.clone(),
                },
                None => InputControl::ConfirmButton,
            },
            SubmissionState::Confirming => InputControl::ConfirmButton,
            SubmissionState::Failed => InputControl::RetryButton,
            SubmissionState::Submitting => InputControl::Submitting,
            SubmissionState::Completed => InputControl::CompletedNotice {
                text: messages::COMPLETED_NOTICE.to_string(),
            },
        };

        let input_enabled = !session.is_typing()
            && matches!(
                state,
                SubmissionState::Collecting | SubmissionState::Confirming | SubmissionState::Failed
            );

        let review = match state {
            SubmissionState::Confirming | SubmissionState::Submitting | SubmissionState::Failed => {
                review_rows(session.script(), session.answers())
            }
            SubmissionState::Collecting | SubmissionState::Completed => Vec::new(),
        };

        Self {
            session_id: *session.id(),
            state,
            current_index: session.current_index(),
            current_step,
            progress_label,
            input,
            input_enabled,
            typing: session.is_typing(),
            transcript: session.transcript().entries().to_vec(),
            answers: session.answers().clone(),
            review,
        }
    }
}
