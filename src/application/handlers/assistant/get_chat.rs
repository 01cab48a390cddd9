//! GetChatHandler - Query handler for the chat read model.

use std::sync::Arc;

use crate::domain::assistant::{ChatError, ChatView};
use crate::domain::foundation::ChatSessionId;
use crate::ports::ChatRegistry;

#[derive(Debug, Clone)]
pub struct GetChatQuery {
    pub session_id: ChatSessionId,
}

pub struct GetChatHandler {
    registry: Arc<ChatRegistry>,
}

impl GetChatHandler {
    pub fn new(registry: Arc<ChatRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self, query: GetChatQuery) -> Result<ChatView, ChatError> {
        let shared = self
            .registry
            .get(&query.session_id)
            .await
            .ok_or(ChatError::NotFound(query.session_id))?;

        let session = shared.lock().await;
        Ok(ChatView::from(&*session))
    }
}
