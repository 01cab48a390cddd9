//! SubmitAnswerHandler - Command handler for free-text wizard input.

use std::sync::Arc;

use crate::domain::foundation::WizardSessionId;
use crate::domain::wizard::{SubmitOutcome, WizardError, WizardSession, WizardView};
use crate::ports::{Pause, ResponsePacer, WizardRegistry};

use super::super::pacing::settle_after;

/// Command to answer the active step.
#[derive(Debug, Clone)]
pub struct SubmitAnswerCommand {
    pub session_id: WizardSessionId,
    pub text: String,
}

/// Result of an answer submission.
#[derive(Debug, Clone)]
pub struct SubmitAnswerResult {
    pub outcome: SubmitOutcome,
    pub view: WizardView,
}

/// Handler for answer submissions.
pub struct SubmitAnswerHandler {
    registry: Arc<WizardRegistry>,
    pacer: Arc<dyn ResponsePacer>,
}

impl SubmitAnswerHandler {
    pub fn new(registry: Arc<WizardRegistry>, pacer: Arc<dyn ResponsePacer>) -> Self {
        Self { registry, pacer }
    }

    pub async fn handle(&self, cmd: SubmitAnswerCommand) -> Result<SubmitAnswerResult, WizardError> {
        let shared = self
            .registry
            .get(&cmd.session_id)
            .await
            .ok_or_else(|| WizardError::not_found(cmd.session_id))?;

        let outcome = shared.lock().await.submit(&cmd.text)?;
        tracing::debug!(session_id = %cmd.session_id, outcome = ?outcome, "Answer handled");

        // A rejection re-prompts immediately; only accepted answers "type".
        if outcome.is_accepted()
            && !settle_after(
                Arc::clone(&shared),
                Arc::clone(&self.pacer),
                Pause::Typing,
                WizardSession::settle,
            )
            .await
        {
            return Err(WizardError::Discarded);
        }

        let session = shared.lock().await;
        if outcome == SubmitOutcome::ReadyForReview {
            tracing::info!(session_id = %cmd.session_id, state = %session.state(), "Wizard ready for review");
        }
        Ok(SubmitAnswerResult {
            outcome,
            view: WizardView::from(&*session),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::Speaker;
    use crate::domain::wizard::{messages, SubmissionState};

    use super::super::test_support::Harness;

    fn answer(id: WizardSessionId, text: &str) -> SubmitAnswerCommand {
        SubmitAnswerCommand {
            session_id: id,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn accepted_answer_advances_and_pauses() {
        let harness = Harness::new();
        let id = harness.open().await;

        let result = harness.submit.handle(answer(id, "Asha")).await.unwrap();

        assert_eq!(result.outcome, SubmitOutcome::Advanced);
        assert_eq!(result.view.current_index, 2);
        assert_eq!(result.view.answers.get("name").and_then(|a| a.as_str()), Some("Asha"));
        assert!(!result.view.typing);
        assert!(harness.pacer.pauses().await.contains(&Pause::Typing));
    }

    #[tokio::test]
    async fn blank_required_answer_reprompts_without_pause() {
        let harness = Harness::new();
        let id = harness.open().await;

        let result = harness.submit.handle(answer(id, "   ")).await.unwrap();

        assert_eq!(result.outcome, SubmitOutcome::Rejected);
        assert_eq!(result.view.current_index, 1);
        let last = result.view.transcript.last().unwrap();
        assert_eq!(last.speaker(), Speaker::Bot);
        assert_eq!(last.text(), messages::RESPONSE_REQUIRED);
        assert!(!harness.pacer.pauses().await.contains(&Pause::Typing));
    }

    #[tokio::test]
    async fn last_answer_moves_to_review() {
        let harness = Harness::new();
        let id = harness.open().await;

        harness.submit.handle(answer(id, "Asha")).await.unwrap();
        let result = harness.submit.handle(answer(id, "")).await.unwrap();

        assert_eq!(result.outcome, SubmitOutcome::ReadyForReview);
        assert_eq!(result.view.state, SubmissionState::Confirming);
        assert_eq!(result.view.progress_label, "Review");
    }

    #[tokio::test]
    async fn free_text_during_review_is_refused() {
        let harness = Harness::new();
        let id = harness.open().await;
        harness.submit.handle(answer(id, "Asha")).await.unwrap();
        harness.submit.handle(answer(id, "")).await.unwrap();

        let result = harness.submit.handle(answer(id, "yes")).await;

        assert_eq!(result.err(), Some(WizardError::AwaitingConfirmation));
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let harness = Harness::new();
        let id = WizardSessionId::new();

        let result = harness.submit.handle(answer(id, "Asha")).await;

        assert_eq!(result.err(), Some(WizardError::NotFound(id)));
    }
}
