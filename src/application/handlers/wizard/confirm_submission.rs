//! ConfirmSubmissionHandler - Command handler for the confirm action.
//!
//! Confirm moves the wizard into `submitting` and returns at once. The
//! hand-off runs on a background task that waits for both the submitter
//! and the minimum submitting display, then records the outcome under the
//! session lock. A wizard closed in the meantime, or a newer attempt,
//! makes the outcome a no-op.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::domain::foundation::WizardSessionId;
use crate::domain::wizard::{WizardError, WizardSession, WizardView};
use crate::ports::{
    ApplicationSnapshot, ApplicationSubmitter, Pause, ResponsePacer, SharedSession, WizardRegistry,
};

/// Command to confirm (or retry) a reviewed application.
#[derive(Debug, Clone)]
pub struct ConfirmSubmissionCommand {
    pub session_id: WizardSessionId,
}

/// Result of a confirm.
#[derive(Debug)]
pub struct ConfirmSubmissionResult {
    /// The wizard in `submitting`.
    pub view: WizardView,
    /// Attempt number handed to the submitter.
    pub attempt: u32,
    /// Background completion; may be dropped.
    pub completion: JoinHandle<()>,
}

/// Handler for confirm actions.
pub struct ConfirmSubmissionHandler {
    registry: Arc<WizardRegistry>,
    submitter: Arc<dyn ApplicationSubmitter>,
    pacer: Arc<dyn ResponsePacer>,
}

impl ConfirmSubmissionHandler {
    pub fn new(
        registry: Arc<WizardRegistry>,
        submitter: Arc<dyn ApplicationSubmitter>,
        pacer: Arc<dyn ResponsePacer>,
    ) -> Self {
        Self {
            registry,
            submitter,
            pacer,
        }
    }

    pub async fn handle(
        &self,
        cmd: ConfirmSubmissionCommand,
    ) -> Result<ConfirmSubmissionResult, WizardError> {
        let shared = self
            .registry
            .get(&cmd.session_id)
            .await
            .ok_or_else(|| WizardError::not_found(cmd.session_id))?;

        let (ticket, view) = {
            let mut session = shared.lock().await;
            let ticket = session.confirm()?;
            (ticket, WizardView::from(&*session))
        };

        let attempt = ticket.attempt;
        tracing::info!(
            session_id = %cmd.session_id,
            attempt,
            fields = ticket.answers.len(),
            "Application submission started"
        );

        let completion = tokio::spawn(complete(
            shared,
            Arc::clone(&self.submitter),
            Arc::clone(&self.pacer),
            ApplicationSnapshot::from(ticket),
        ));

        Ok(ConfirmSubmissionResult {
            view,
            attempt,
            completion,
        })
    }
}

async fn complete(
    shared: SharedSession<WizardSession>,
    submitter: Arc<dyn ApplicationSubmitter>,
    pacer: Arc<dyn ResponsePacer>,
    snapshot: ApplicationSnapshot,
) {
    let (result, ()) = tokio::join!(submitter.submit(&snapshot), pacer.pause(Pause::Submitting));

    let mut session = shared.lock().await;
    let recorded = match &result {
        Ok(_) => session.complete_submission(snapshot.attempt),
        Err(_) => session.fail_submission(snapshot.attempt),
    };

    match (result, recorded) {
        (_, Err(e)) => tracing::debug!(
            session_id = %snapshot.session_id,
            attempt = snapshot.attempt,
            reason = %e,
            "Submission outcome dropped"
        ),
        (Ok(receipt), Ok(())) => tracing::info!(
            session_id = %snapshot.session_id,
            attempt = snapshot.attempt,
            reference = %receipt.reference,
            "Application submitted"
        ),
        (Err(e), Ok(())) => tracing::warn!(
            session_id = %snapshot.session_id,
            attempt = snapshot.attempt,
            error = %e,
            "Application submission failed"
        ),
    }
}
