//! ShowFaqsHandler - Command handler for the FAQ listing.

use std::sync::Arc;

use crate::domain::assistant::{ChatError, ChatView};
use crate::domain::foundation::ChatSessionId;
use crate::ports::ChatRegistry;

#[derive(Debug, Clone)]
pub struct ShowFaqsCommand {
    pub session_id: ChatSessionId,
}

pub struct ShowFaqsHandler {
    registry: Arc<ChatRegistry>,
}

impl ShowFaqsHandler {
    pub fn new(registry: Arc<ChatRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, cmd: ShowFaqsCommand) -> Result<ChatView, ChatError> {
        let shared = self
            .registry
            .get(&cmd.session_id)
            .await
            .ok_or(ChatError::NotFound(cmd.session_id))?;

        let mut session = shared.lock().await;
        session.show_faqs()?;
        Ok(ChatView::from(&*session))
    }
}
