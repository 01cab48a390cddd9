//! HTTP routes for assistant endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    close_chat, get_chat, quick_action, send_message, set_language, show_faqs, start_chat,
    AssistantHandlers,
};

/// Creates the assistant router, to be nested under `/api/assistant`.
pub fn assistant_routes(handlers: AssistantHandlers) -> Router {
    Router::new()
        .route("/", post(start_chat))
        .route("/:id", get(get_chat).delete(close_chat))
        .route("/:id/messages", post(send_message))
        .route("/:id/quick-actions/:action", post(quick_action))
        .route("/:id/faqs", post(show_faqs))
        .route("/:id/language", put(set_language))
        .with_state(handlers)
}
