//! SendChatMessageHandler - Command handler for typed assistant messages.

use std::sync::Arc;

use crate::domain::assistant::{ChatError, ChatSession, ChatView};
use crate::domain::foundation::ChatSessionId;
use crate::ports::{ChatRegistry, Pause, ResponsePacer};

use super::super::pacing::settle_after;
use super::ChatActionResult;

/// Command to send a typed message.
#[derive(Debug, Clone)]
pub struct SendChatMessageCommand {
    pub session_id: ChatSessionId,
    pub text: String,
}

pub struct SendChatMessageHandler {
    registry: Arc<ChatRegistry>,
    pacer: Arc<dyn ResponsePacer>,
}

impl SendChatMessageHandler {
    pub fn new(registry: Arc<ChatRegistry>, pacer: Arc<dyn ResponsePacer>) -> Self {
        Self { registry, pacer }
    }

    pub async fn handle(&self, cmd: SendChatMessageCommand) -> Result<ChatActionResult, ChatError> {
        let shared = self
            .registry
            .get(&cmd.session_id)
            .await
            .ok_or(ChatError::NotFound(cmd.session_id))?;

        let reply = shared.lock().await.send_message(&cmd.text)?;
        tracing::debug!(session_id = %cmd.session_id, intent = ?reply.intent, "Chat message classified");

        if !settle_after(
            Arc::clone(&shared),
            Arc::clone(&self.pacer),
            Pause::ChatReply,
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
    use crate::domain::assistant::{knowledge, Intent, Topic};

    use super::super::test_support::Harness;

    fn message(id: ChatSessionId, text: &str) -> SendChatMessageCommand {
        SendChatMessageCommand {
            session_id: id,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn typed_message_gets_classified_reply() {
        let harness = Harness::new();
        let id = harness.start().await;

        let result = harness
            .send
            .handle(message(id, "What's the weather like?"))
            .await
            .unwrap();

        assert_eq!(result.reply.intent, Some(Intent::Topic(Topic::Weather)));
        assert_eq!(result.view.transcript.len(), 3);
        assert!(result.view.quick_actions.is_empty());
        assert!(!result.view.typing);
        assert_eq!(harness.pacer.pauses().await, vec![Pause::ChatReply]);
    }

    #[tokio::test]
    async fn application_request_asks_to_open_the_wizard() {
        let harness = Harness::new();
        let id = harness.start().await;

        let result = harness.send.handle(message(id, "I want to apply")).await.unwrap();

        assert!(result.reply.open_application);
        assert_eq!(
            result.view.transcript.last().unwrap().text(),
            knowledge::opening_application(result.view.language)
        );
    }

    #[tokio::test]
    async fn blank_message_is_refused() {
        let harness = Harness::new();
        let id = harness.start().await;

        let result = harness.send.handle(message(id, "  ")).await;

        assert_eq!(result.err(), Some(ChatError::EmptyMessage));
        assert!(harness.pacer.pauses().await.is_empty());
    }
}
