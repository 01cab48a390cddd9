//! StartChatHandler - Command handler for opening an assistant chat.

use std::sync::Arc;

use crate::domain::assistant::{ChatError, ChatSession, ChatView, Language};
use crate::domain::foundation::ChatSessionId;
use crate::ports::ChatRegistry;

/// Command to start a chat.
#[derive(Debug, Clone, Default)]
pub struct StartChatCommand {
    /// Falls back to the configured default when absent.
    pub language: Option<Language>,
}

pub struct StartChatHandler {
    registry: Arc<ChatRegistry>,
    default_language: Language,
}

impl StartChatHandler {
    pub fn new(registry: Arc<ChatRegistry>, default_language: Language) -> Self {
        Self {
            registry,
            default_language,
        }
    }

    pub async fn handle(&self, cmd: StartChatCommand) -> Result<ChatView, ChatError> {
        let id = ChatSessionId::new();
        let language = cmd.language.unwrap_or(self.default_language);
        let shared = self
            .registry
            .insert(id, ChatSession::start(id, language))
            .await?;

        tracing::info!(session_id = %id, language = %language, "Chat started");
        let session = shared.lock().await;
        Ok(ChatView::from(&*session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::Speaker;

    use super::super::test_support::Harness;

    #[tokio::test]
    async fn starts_with_greeting_in_requested_language() {
        let harness = Harness::new();

        let view = harness
            .start
            .handle(StartChatCommand {
                language: Some(Language::Hi),
            })
            .await
            .unwrap();

        assert_eq!(view.language, Language::Hi);
        assert_eq!(view.transcript.len(), 1);
        assert_eq!(view.transcript[0].speaker(), Speaker::Bot);
        assert_eq!(view.quick_actions.len(), 5);
    }

    #[tokio::test]
    async fn missing_language_uses_default() {
        let harness = Harness::new();

        let view = harness.start.handle(StartChatCommand::default()).await.unwrap();

        assert_eq!(view.language, Language::En);
    }
}
