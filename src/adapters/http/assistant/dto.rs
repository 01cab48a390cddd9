//! DTOs for assistant endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::assistant::{ChatReply, ChatView};

/// Body of `POST /api/assistant`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StartChatRequest {
    /// Language code; the configured default when absent.
    #[serde(default)]
    pub language: Option<String>,
}

/// Body of `POST /api/assistant/:id/messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub text: String,
}

/// Body of `PUT /api/assistant/:id/language`.
#[derive(Debug, Clone, Deserialize)]
pub struct SetLanguageRequest {
    pub language: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatActionResponse {
    pub reply: ChatReply,
    pub chat: ChatView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_request_language_is_optional() {
        let req: StartChatRequest = serde_json::from_str("{}").unwrap();
        assert!(req.language.is_none());

        let req: StartChatRequest = serde_json::from_str(r#"{"language":"hi"}"#).unwrap();
        assert_eq!(req.language.as_deref(), Some("hi"));
    }
}
