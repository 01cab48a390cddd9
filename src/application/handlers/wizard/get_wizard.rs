//! GetWizardHandler - Query handler for the wizard read model.

use std::sync::Arc;

use crate::domain::foundation::WizardSessionId;
use crate::domain::wizard::{WizardError, WizardView};
use crate::ports::WizardRegistry;

/// Query to view a wizard.
#[derive(Debug, Clone)]
pub struct GetWizardQuery {
    pub session_id: WizardSessionId,
}

pub struct GetWizardHandler {
    registry: Arc<WizardRegistry>,
}

impl GetWizardHandler {
    pub fn new(registry: Arc<WizardRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, query: GetWizardQuery) -> Result<WizardView, WizardError> {
        let shared = self
            .registry
            .get(&query.session_id)
            .await
            .ok_or_else(|| WizardError::not_found(query.session_id))?;

        let session = shared.lock().await;
        Ok(WizardView::from(&*session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use super::super::test_support::Harness;

    #[tokio::test]
    async fn view_reflects_answers_so_far() {
        let harness = Harness::new();
        let id = harness.open().await;
        harness.answer(id, "Asha").await;

        let view = harness.get.handle(GetWizardQuery { session_id: id }).await.unwrap();

        assert_eq!(view.session_id, id);
        assert_eq!(view.answers.len(), 1);
        assert_eq!(view.progress_label, "Step 2/2");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let harness = Harness::new();
        let id = WizardSessionId::new();

        let result = harness.get.handle(GetWizardQuery { session_id: id }).await;

        assert_eq!(result.err(), Some(WizardError::NotFound(id)));
    }
}
