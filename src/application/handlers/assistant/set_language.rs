//! SetLanguageHandler - Command handler for switching the reply language.

use std::sync::Arc;

use crate::domain::assistant::{ChatError, ChatView, Language};
use crate::domain::foundation::ChatSessionId;
use crate::ports::ChatRegistry;

#[derive(Debug, Clone)]
pub struct SetLanguageCommand {
    pub session_id: ChatSessionId,
    pub language: Language,
}

pub struct SetLanguageHandler {
    registry: Arc<ChatRegistry>,
}

impl SetLanguageHandler {
    pub fn new(registry: Arc<ChatRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, cmd: SetLanguageCommand) -> Result<ChatView, ChatError> {
        let shared = self
            .registry
            .get(&cmd.session_id)
            .await
            .ok_or(ChatError::NotFound(cmd.session_id))?;

        let mut session = shared.lock().await;
        session.set_language(cmd.language)?;
        tracing::debug!(session_id = %cmd.session_id, language = %cmd.language, "Chat language changed");
        Ok(ChatView::from(&*session))
    }
}
