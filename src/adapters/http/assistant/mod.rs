//! HTTP adapter for FAQ assistant endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatActionResponse, SendMessageRequest, SetLanguageRequest, StartChatRequest};
pub use handlers::AssistantHandlers;
pub use routes::assistant_routes;
