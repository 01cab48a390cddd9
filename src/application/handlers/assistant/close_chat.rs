//! CloseChatHandler - Command handler for discarding a chat.

use std::sync::Arc;

use crate::domain::assistant::ChatError;
use crate::domain::foundation::ChatSessionId;
use crate::ports::ChatRegistry;

#[derive(Debug, Clone)]
pub struct CloseChatCommand {
    pub session_id: ChatSessionId,
}

pub struct CloseChatHandler {
    registry: Arc<ChatRegistry>,
}

impl CloseChatHandler {
    pub fn new(registry: Arc<ChatRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, cmd: CloseChatCommand) -> Result<(), ChatError> {
        let shared = self
            .registry
            .remove(&cmd.session_id)
            .await
            .ok_or(ChatError::NotFound(cmd.session_id))?;

        shared.lock().await.discard();
        tracing::info!(session_id = %cmd.session_id, "Chat closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::SessionRegistry;

    use super::super::get_chat::GetChatQuery;
    use super::super::test_support::Harness;

    #[tokio::test]
    async fn closed_chat_is_gone() {
        let harness = Harness::new();
        let id = harness.start().await;
        let shared = harness.registry.get(&id).await.unwrap();

        harness
            .close
            .handle(CloseChatCommand { session_id: id })
            .await
            .unwrap();

        assert!(shared.lock().await.is_discarded());
        let result = harness.get.handle(GetChatQuery { session_id: id }).await;
        assert_eq!(result.err(), Some(ChatError::NotFound(id)));
    }
}
