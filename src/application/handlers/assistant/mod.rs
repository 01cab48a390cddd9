//! Assistant handlers - the FAQ and quick-action chat.

mod close_chat;
mod get_chat;
mod quick_action;
mod send_message;
mod set_language;
mod show_faqs;
mod start_chat;

use crate::domain::assistant::{ChatReply, ChatView};

pub use close_chat::{CloseChatCommand, CloseChatHandler};
pub use get_chat::{GetChatHandler, GetChatQuery};
pub use quick_action::{QuickActionCommand, QuickActionHandler};
pub use send_message::{SendChatMessageCommand, SendChatMessageHandler};
pub use set_language::{SetLanguageCommand, SetLanguageHandler};
pub use show_faqs::{ShowFaqsCommand, ShowFaqsHandler};
pub use start_chat::{StartChatCommand, StartChatHandler};

/// Reply directive plus the settled chat.
#[derive(Debug, Clone)]
pub struct ChatActionResult {
    pub reply: ChatReply,
    pub view: ChatView,
}
