//! HTTP handlers for assistant endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::assistant::{
    ChatActionResult, CloseChatCommand, CloseChatHandler, GetChatHandler, GetChatQuery,
    QuickActionCommand, QuickActionHandler, SendChatMessageCommand, SendChatMessageHandler,
    SetLanguageCommand, SetLanguageHandler, ShowFaqsCommand, ShowFaqsHandler, StartChatCommand,
    StartChatHandler,
};
use crate::domain::assistant::{ChatError, Language, QuickAction};
use crate::domain::foundation::ChatSessionId;

use super::super::error::{domain_error_response, invalid_id_response};
use super::dto::{ChatActionResponse, SendMessageRequest, SetLanguageRequest, StartChatRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssistantHandlers {
    start_handler: Arc<StartChatHandler>,
    send_handler: Arc<SendChatMessageHandler>,
    quick_action_handler: Arc<QuickActionHandler>,
    faqs_handler: Arc<ShowFaqsHandler>,
    language_handler: Arc<SetLanguageHandler>,
    get_handler: Arc<GetChatHandler>,
    close_handler: Arc<CloseChatHandler>,
    verbose_errors: bool,
}

impl AssistantHandlers {
    pub fn new(
        start_handler: Arc<StartChatHandler>,
        send_handler: Arc<SendChatMessageHandler>,
        quick_action_handler: Arc<QuickActionHandler>,
        faqs_handler: Arc<ShowFaqsHandler>,
        language_handler: Arc<SetLanguageHandler>,
        get_handler: Arc<GetChatHandler>,
        close_handler: Arc<CloseChatHandler>,
    ) -> Self {
        Self {
            start_handler,
            send_handler,
            quick_action_handler,
            faqs_handler,
            language_handler,
            get_handler,
            close_handler,
            verbose_errors: false,
        }
    }

    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }

    fn error(&self, error: ChatError) -> Response {
        handle_chat_error(error, self.verbose_errors)
    }
}

fn action_response(result: ChatActionResult) -> Response {
    let response = ChatActionResponse {
        reply: result.reply,
        chat: result.view,
    };
    (StatusCode::OK, Json(response)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/assistant - Start a chat
pub async fn start_chat(
    State(handlers): State<AssistantHandlers>,
    Json(req): Json<StartChatRequest>,
) -> Response {
    let language = match req.language.as_deref().map(str::parse::<Language>).transpose() {
        Ok(language) => language,
        Err(e) => return handlers.error(e.into()),
    };

    match handlers.start_handler.handle(StartChatCommand { language }).await {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(e) => handlers.error(e),
    }
}

/// GET /api/assistant/:id - Current chat view
pub async fn get_chat(
    State(handlers): State<AssistantHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let Ok(session_id) = session_id.parse::<ChatSessionId>() else {
        return invalid_id_response("chat");
    };

    match handlers.get_handler.handle(GetChatQuery { session_id }).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handlers.error(e),
    }
}

/// POST /api/assistant/:id/messages - Send a typed message
pub async fn send_message(
    State(handlers): State<AssistantHandlers>,
    Path(session_id): Path<String>,
    Json(req): Json<SendMessageRequest>,
) -> Response {
    let Ok(session_id) = session_id.parse::<ChatSessionId>() else {
        return invalid_id_response("chat");
    };

    let cmd = SendChatMessageCommand {
        session_id,
        text: req.text,
    };

    match handlers.send_handler.handle(cmd).await {
        Ok(result) => action_response(result),
        Err(e) => handlers.error(e),
    }
}

/// POST /api/assistant/:id/quick-actions/:action - Trigger a quick action
pub async fn quick_action(
    State(handlers): State<AssistantHandlers>,
    Path((session_id, action)): Path<(String, String)>,
) -> Response {
    let Ok(session_id) = session_id.parse::<ChatSessionId>() else {
        return invalid_id_response("chat");
    };
    let action = match action.parse::<QuickAction>() {
        Ok(action) => action,
        Err(e) => return handlers.error(e.into()),
    };

    match handlers
        .quick_action_handler
        .handle(QuickActionCommand { session_id, action })
        .await
    {
        Ok(result) => action_response(result),
        Err(e) => handlers.error(e),
    }
}

/// POST /api/assistant/:id/faqs - Show the FAQ listing
pub async fn show_faqs(
    State(handlers): State<AssistantHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let Ok(session_id) = session_id.parse::<ChatSessionId>() else {
        return invalid_id_response("chat");
    };

    match handlers.faqs_handler.handle(ShowFaqsCommand { session_id }).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handlers.error(e),
    }
}

/// PUT /api/assistant/:id/language - Switch the reply language
pub async fn set_language(
    State(handlers): State<AssistantHandlers>,
    Path(session_id): Path<String>,
    Json(req): Json<SetLanguageRequest>,
) -> Response {
    let Ok(session_id) = session_id.parse::<ChatSessionId>() else {
        return invalid_id_response("chat");
    };
    let language = match req.language.parse::<Language>() {
        Ok(language) => language,
        Err(e) => return handlers.error(e.into()),
    };

    match handlers
        .language_handler
        .handle(SetLanguageCommand {
            session_id,
            language,
        })
        .await
    {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handlers.error(e),
    }
}

/// DELETE /api/assistant/:id - Close the chat
pub async fn close_chat(
    State(handlers): State<AssistantHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let Ok(session_id) = session_id.parse::<ChatSessionId>() else {
        return invalid_id_response("chat");
    };

    match handlers.close_handler.handle(CloseChatCommand { session_id }).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handlers.error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_chat_error(error: ChatError, verbose: bool) -> Response {
    domain_error_response(error.into(), verbose)
}
