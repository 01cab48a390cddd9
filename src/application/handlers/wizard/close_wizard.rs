//! CloseWizardHandler - Command handler for discarding a wizard.

use std::sync::Arc;

use crate::domain::foundation::WizardSessionId;
use crate::domain::wizard::WizardError;
use crate::ports::WizardRegistry;

/// Command to close a wizard.
#[derive(Debug, Clone)]
pub struct CloseWizardCommand {
    pub session_id: WizardSessionId,
}

/// Handler for closing wizards.
///
/// The session is unregistered first, then marked discarded so pending
/// pauses and submissions holding a handle become no-ops.
pub struct CloseWizardHandler {
    registry: Arc<WizardRegistry>,
}

impl CloseWizardHandler {
    pub fn new(registry: Arc<WizardRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, cmd: CloseWizardCommand) -> Result<(), WizardError> {
        let shared = self
            .registry
            .remove(&cmd.session_id)
            .await
            .ok_or_else(|| WizardError::not_found(cmd.session_id))?;

        let mut session = shared.lock().await;
        session.discard();
        tracing::info!(session_id = %cmd.session_id, state = %session.state(), "Wizard closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::SessionRegistry;

    use super::super::test_support::Harness;

    #[tokio::test]
    async fn close_unregisters_and_discards() {
        let harness = Harness::new();
        let id = harness.open().await;
        let shared = harness.registry.get(&id).await.unwrap();

        harness
            .close
            .handle(CloseWizardCommand { session_id: id })
            .await
            .unwrap();

        assert!(harness.registry.get(&id).await.is_none());
        assert!(shared.lock().await.is_discarded());
    }

    #[tokio::test]
    async fn closing_twice_is_not_found() {
        let harness = Harness::new();
        let id = harness.open().await;
        harness.close(id).await;

        let result = harness.close.handle(CloseWizardCommand { session_id: id }).await;

        assert_eq!(result.err(), Some(WizardError::NotFound(id)));
    }
}
