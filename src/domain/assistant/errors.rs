//! Assistant-specific error types.

use thiserror::Error;

use crate::domain::foundation::{ChatSessionId, DomainError, ErrorCode, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("Chat not found: {0}")]
    NotFound(ChatSessionId),

    #[error("Chat has been closed")]
    Discarded,

    #[error("The assistant is still typing")]
    Busy,

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Quick actions are only offered before the first exchange")]
    QuickActionsHidden,

    #[error("Too many open chats (limit {limit})")]
    CapacityReached { limit: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl ChatError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ChatError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ChatError::NotFound(_) => ErrorCode::ChatNotFound,
            ChatError::Discarded => ErrorCode::SessionDiscarded,
            ChatError::Busy => ErrorCode::SessionBusy,
            ChatError::EmptyMessage | ChatError::Validation(_) => ErrorCode::ValidationFailed,
            ChatError::QuickActionsHidden => ErrorCode::InvalidStateTransition,
            ChatError::CapacityReached { .. } => ErrorCode::CapacityReached,
            ChatError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<ChatError> for DomainError {
    fn from(err: ChatError) -> Self {
        let code = err.code();
        let message = err.to_string();
        match err {
            ChatError::NotFound(id) => {
                DomainError::new(code, message).with_detail("session_id", id.to_string())
            }
            _ => DomainError::new(code, message),
        }
    }
}
