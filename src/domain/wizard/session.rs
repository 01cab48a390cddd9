//! WizardSession - the full in-memory record of one open application wizard.
//!
//! One owned value holds everything the wizard knows: position, answers,
//! transcript, submission state and the typing latch. Every action either
//! applies completely or is refused without touching the session.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::conversation::Transcript;
use crate::domain::foundation::{StateMachine, Timestamp, WizardSessionId};

use super::answers::AnswerStore;
use super::errors::WizardError;
use super::messages;
use super::script::WizardScript;
use super::sequencer::StepSequencer;
use super::step::StepDefinition;
use super::submission::SubmissionState;

/// What happened to a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Blank input on a required step; the step is asked again.
    Rejected,
    /// Answer stored; the next question is active.
    Advanced,
    /// Answer stored; all questions are answered and review is active.
    ReadyForReview,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, SubmitOutcome::Rejected)
    }
}

/// Everything the submission collaborator needs for one attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionTicket {
    pub session_id: WizardSessionId,
    pub attempt: u32,
    pub answers: AnswerStore,
}

/// State of one open wizard.
///
/// # Invariants
///
/// - `current_index` only ever moves forward by one per accepted answer
/// - the transcript is append-only
/// - once `Completed`, nothing is mutated again
/// - once discarded, nothing is mutated again
#[derive(Debug, Clone)]
pub struct WizardSession {
    id: WizardSessionId,
    sequencer: StepSequencer,
    answers: AnswerStore,
    transcript: Transcript,
    state: SubmissionState,
    typing: bool,
    discarded: bool,
    attempts: u32,
    last_active: Timestamp,
}

impl WizardSession {
    /// Opens a fresh wizard and seeds the transcript with the intro and the
    /// first question.
    ///
    /// The typing latch starts set; the caller settles it once the opening
    /// pause has elapsed.
    pub fn open(id: WizardSessionId, script: Arc<WizardScript>) -> Self {
        let sequencer = StepSequencer::new(script);
        let mut transcript = Transcript::new();
        for step in sequencer.intro() {
            transcript.bot(step.prompt.clone());
        }

        let mut session = Self {
            id,
            sequencer,
            answers: AnswerStore::new(),
            transcript,
            state: SubmissionState::Collecting,
            typing: true,
            discarded: false,
            attempts: 0,
            last_active: Timestamp::now(),
        };

        let first_prompt = session
            .sequencer
            .current_step()
            .filter(|s| s.is_answerable())
            .map(|s| s.prompt.clone());
        match first_prompt {
            Some(prompt) => {
                session.transcript.bot(prompt);
            }
            None => session.enter_review(),
        }
        session
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &WizardSessionId {
        &self.id
    }

    pub fn script(&self) -> &WizardScript {
        self.sequencer.script()
    }

    pub fn current_index(&self) -> usize {
        self.sequencer.current_index()
    }

    /// The active step, or `None` once the sequence is exhausted.
    pub fn current_step(&self) -> Option<&StepDefinition> {
        self.sequencer.current_step()
    }

    /// 1-based number of the active question, if one is active.
    pub fn question_number(&self) -> Option<usize> {
        self.sequencer.question_number()
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn is_discarded(&self) -> bool {
        self.discarded
    }

    /// When the visitor last acted, or a hand-off last resolved.
    pub fn last_active(&self) -> &Timestamp {
        &self.last_active
    }

    /// Returns true once the application has been handed off.
    pub fn is_finished(&self) -> bool {
        self.state == SubmissionState::Completed
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────────

    /// Submits free text against the active step.
    ///
    /// Blank input on a required step appends the re-prompt and nothing
    /// else. Accepted input echoes the user's text, stores the answer,
    /// advances one step and queues the next prompt. The typing latch is
    /// set on acceptance.
    ///
    /// # Errors
    ///
    /// - `Discarded`, `Completed`, `SubmissionInFlight` for a closed or finished wizard
    /// - `AwaitingConfirmation` once all questions are answered
    /// - `Busy` while the typing latch is set
    pub fn submit(&mut self, raw: &str) -> Result<SubmitOutcome, WizardError> {
        self.ensure_live()?;
        if !self.state.accepts_answers() {
            return Err(match self.state {
                SubmissionState::Submitting => WizardError::SubmissionInFlight,
                SubmissionState::Completed => WizardError::Completed,
                _ => WizardError::AwaitingConfirmation,
            });
        }
        if self.typing {
            return Err(WizardError::Busy);
        }

        let Some(step) = self
            .sequencer
            .current_step()
            .filter(|s| s.is_answerable())
            .cloned()
        else {
            return Err(WizardError::AwaitingConfirmation);
        };

        self.last_active = Timestamp::now();
        let trimmed = raw.trim();
        if trimmed.is_empty() && !step.optional {
            self.transcript.bot(messages::RESPONSE_REQUIRED);
            return Ok(SubmitOutcome::Rejected);
        }

        if trimmed.is_empty() {
            self.transcript.user(messages::SKIPPED_ECHO);
        } else {
            self.transcript.user(raw);
        }

        if let Some(key) = step.field_key.as_deref() {
            if trimmed.is_empty() {
                self.answers.skip(key);
            } else {
                self.answers.record(key, trimmed);
            }
        }

        self.typing = true;
        let next_prompt = self
            .sequencer
            .advance()
            .filter(|s| s.is_answerable())
            .map(|s| s.prompt.clone());

        match next_prompt {
            Some(prompt) => {
                self.transcript.bot(prompt);
                Ok(SubmitOutcome::Advanced)
            }
            None => {
                self.enter_review();
                Ok(SubmitOutcome::ReadyForReview)
            }
        }
    }

    /// Clears the typing latch after the pacing delay.
    ///
    /// Returns false if the session was discarded in the meantime.
    pub fn settle(&mut self) -> bool {
        if self.discarded {
            return false;
        }
        self.typing = false;
        true
    }

    /// Handles the dedicated confirm action.
    ///
    /// Valid while reviewing, and again after a failed attempt. Appends the
    /// confirmation echo, enters `Submitting` and returns the answers
    /// snapshot to hand off.
    ///
    /// # Errors
    ///
    /// - `Discarded`, `Completed`, `SubmissionInFlight`
    /// - `Busy` while the typing latch is set
    /// - `ConfirmUnavailable` while still collecting
    pub fn confirm(&mut self) -> Result<SubmissionTicket, WizardError> {
        self.ensure_live()?;
        if self.state == SubmissionState::Submitting {
            return Err(WizardError::SubmissionInFlight);
        }
        if self.typing {
            return Err(WizardError::Busy);
        }
        if !self.state.accepts_confirm() {
            return Err(WizardError::ConfirmUnavailable(self.state));
        }

        self.state = self.transition(SubmissionState::Submitting)?;
        self.attempts += 1;
        self.last_active = Timestamp::now();
        self.transcript.user(messages::CONFIRM_ECHO);

        Ok(SubmissionTicket {
            session_id: self.id,
            attempt: self.attempts,
            answers: self.answers.clone(),
        })
    }

    /// Records a successful hand-off for `attempt`.
    ///
    /// # Errors
    ///
    /// - `Discarded` if the wizard was closed while submitting
    /// - `StaleSubmission` if `attempt` is not the one in flight
    pub fn complete_submission(&mut self, attempt: u32) -> Result<(), WizardError> {
        self.ensure_in_flight(attempt)?;
        self.state = self.transition(SubmissionState::Completed)?;
        self.last_active = Timestamp::now();
        self.sequencer.finish();
        self.transcript.bot(messages::SUBMISSION_SUCCEEDED);
        Ok(())
    }

    /// Records a failed hand-off for `attempt`; confirm may be retried.
    ///
    /// # Errors
    ///
    /// Same as [`complete_submission`](Self::complete_submission).
    pub fn fail_submission(&mut self, attempt: u32) -> Result<(), WizardError> {
        self.ensure_in_flight(attempt)?;
        self.state = self.transition(SubmissionState::Failed)?;
        self.last_active = Timestamp::now();
        self.transcript.bot(messages::SUBMISSION_FAILED);
        Ok(())
    }

    /// Tears the session down. Later callbacks become no-ops.
    pub fn discard(&mut self) {
        self.discarded = true;
        self.typing = false;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_live(&self) -> Result<(), WizardError> {
        if self.discarded {
            return Err(WizardError::Discarded);
        }
        if self.state == SubmissionState::Completed {
            return Err(WizardError::Completed);
        }
        Ok(())
    }

    fn ensure_in_flight(&self, attempt: u32) -> Result<(), WizardError> {
        self.ensure_live()?;
        if self.state != SubmissionState::Submitting || attempt != self.attempts {
            return Err(WizardError::StaleSubmission(attempt));
        }
        Ok(())
    }

    fn transition(&self, target: SubmissionState) -> Result<SubmissionState, WizardError> {
        self.state
            .transition_to(target)
            .map_err(|e| WizardError::infrastructure(e.to_string()))
    }

    fn enter_review(&mut self) {
        let prompt = self
            .sequencer
            .current_step()
            .filter(|s| s.is_confirm())
            .map(|s| s.prompt.clone())
            .unwrap_or_else(|| messages::DEFAULT_REVIEW_PROMPT.to_string());
        self.state = SubmissionState::Confirming;
        self.transcript.bot(prompt);
    }
}
