//! QuickActionHandler - Command handler for quick-action buttons.

use std::sync::Arc;

use crate::domain::assistant::{ChatError, ChatSession, ChatView, QuickAction};
use crate::domain::foundation::ChatSessionId;
use crate::ports::{ChatRegistry, Pause, ResponsePacer};

use super::super::pacing::settle_after;
use super::ChatActionResult;

/// Command to trigger a quick action.
#[derive(Debug, Clone)]
pub struct QuickActionCommand {
    pub session_id: ChatSessionId,
    pub action: QuickAction,
}

pub struct QuickActionHandler {
    registry: Arc<ChatRegistry>,
    pacer: Arc<dyn ResponsePacer>,
}

impl QuickActionHandler {
    pub fn new(registry: Arc<ChatRegistry>, pacer: Arc<dyn ResponsePacer>) -> Self {
        Self { registry, pacer }
    }

    pub async fn handle(&self, cmd: QuickActionCommand) -> Result<ChatActionResult, ChatError> {
        let shared = self
            .registry
            .get(&cmd.session_id)
            .await
            .ok_or(ChatError::NotFound(cmd.session_id))?;

        let reply = shared.lock().await.quick_action(cmd.action)?;
        tracing::debug!(session_id = %cmd.session_id, action = %cmd.action, "Quick action handled");

        if reply.queued
            && !settle_after(
                Arc::clone(&shared),
                Arc::clone(&self.pacer),
                Pause::QuickReply,
                ChatSession::settle,
            )
            .await
        {
            return Err(ChatError::Discarded);
        }

        let session = shared.lock().await;
        Ok(ChatActionResult {
            reply,
            view: ChatView::from(&*session),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assistant::{knowledge, Topic};

    use super::super::test_support::Harness;

    fn action(id: ChatSessionId, action: QuickAction) -> QuickActionCommand {
        QuickActionCommand {
            session_id: id,
            action,
        }
    }

    #[tokio::test]
    async fn topic_action_echoes_label_and_answers() {
        let harness = Harness::new();
        let id = harness.start().await;

        let result = harness
            .quick
            .handle(action(id, QuickAction::Marketplace))
            .await
            .unwrap();

        let transcript = &result.view.transcript;
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[1].text(), QuickAction::Marketplace.label());
        assert_eq!(
            transcript[2].text(),
            knowledge::topic_response(Topic::Marketplace, result.view.language)
        );
        assert_eq!(harness.pacer.pauses().await, vec![Pause::QuickReply]);
    }

    #[tokio::test]
    async fn application_action_only_returns_the_directive() {
        let harness = Harness::new();
        let id = harness.start().await;

        let result = harness
            .quick
            .handle(action(id, QuickAction::Application))
            .await
            .unwrap();

        assert!(result.reply.open_application);
        assert_eq!(result.view.transcript.len(), 1);
        assert!(harness.pacer.pauses().await.is_empty());
    }

    #[tokio::test]
    async fn actions_are_hidden_after_first_exchange() {
        let harness = Harness::new();
        let id = harness.start().await;
        harness
            .quick
            .handle(action(id, QuickAction::Destinations))
            .await
            .unwrap();

        let result = harness.quick.handle(action(id, QuickAction::Itinerary)).await;

        assert_eq!(result.err(), Some(ChatError::QuickActionsHidden));
    }
}
