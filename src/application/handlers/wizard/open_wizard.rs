//! OpenWizardHandler - Command handler for starting an application wizard.

use std::sync::Arc;

use crate::domain::foundation::WizardSessionId;
use crate::domain::wizard::{WizardError, WizardScript, WizardSession, WizardView};
use crate::ports::{Pause, ResponsePacer, WizardRegistry};

use super::super::pacing::settle_after;

/// Handler for opening a fresh wizard.
///
/// The intro and first question are in the transcript immediately; the
/// handler returns once the greeting pause has passed and input is open.
pub struct OpenWizardHandler {
    registry: Arc<WizardRegistry>,
    script: Arc<WizardScript>,
    pacer: Arc<dyn ResponsePacer>,
}

impl OpenWizardHandler {
    pub fn new(
        registry: Arc<WizardRegistry>,
        script: Arc<WizardScript>,
        pacer: Arc<dyn ResponsePacer>,
    ) -> Self {
        Self {
            registry,
            script,
            pacer,
        }
    }

    pub async fn handle(&self) -> Result<WizardView, WizardError> {
        let id = WizardSessionId::new();
        let session = WizardSession::open(id, Arc::clone(&self.script));
        let state = session.state();

        let shared = self.registry.insert(id, session).await?;
        tracing::info!(session_id = %id, state = %state, "Wizard opened");

        if !settle_after(
            Arc::clone(&shared),
            Arc::clone(&self.pacer),
            Pause::Greeting,
            WizardSession::settle,
        )
        .await
        {
            return Err(WizardError::Discarded);
        }

        let session = shared.lock().await;
        Ok(WizardView::from(&*session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::pacing::InstantPacer;
    use crate::adapters::storage::InMemorySessionRegistry;
    use crate::domain::wizard::{InputControl, SubmissionState};
    use crate::ports::SessionRegistry;

    use super::super::test_support::scenario_script;

    #[tokio::test]
    async fn opens_with_intro_and_first_prompt_ready_for_input() {
        let registry: Arc<InMemorySessionRegistry<WizardSessionId, WizardSession>> =
            Arc::new(InMemorySessionRegistry::new());
        let pacer = InstantPacer::new();
        let handler = OpenWizardHandler::new(
            registry.clone(),
            scenario_script(),
            Arc::new(pacer.clone()),
        );

        let view = handler.handle().await.unwrap();

        assert_eq!(view.state, SubmissionState::Collecting);
        assert_eq!(view.current_index, 1);
        assert_eq!(view.transcript.len(), 2);
        assert!(!view.typing);
        assert!(view.input_enabled);
        assert!(matches!(view.input, InputControl::TextInput { .. }));
        assert_eq!(pacer.pauses().await, vec![Pause::Greeting]);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn capacity_limit_refuses_new_wizards() {
        let registry: Arc<InMemorySessionRegistry<WizardSessionId, WizardSession>> =
            Arc::new(InMemorySessionRegistry::with_limit(1));
        let handler = OpenWizardHandler::new(
            registry,
            scenario_script(),
            Arc::new(InstantPacer::new()),
        );

        handler.handle().await.unwrap();
        let result = handler.handle().await;

        assert_eq!(result.err(), Some(WizardError::CapacityReached { limit: 1 }));
    }
}
