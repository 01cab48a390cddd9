//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::assistant::{
    ChatActionResult, CloseChatCommand, CloseChatHandler, GetChatHandler, GetChatQuery,
    QuickActionCommand, QuickActionHandler, SendChatMessageCommand, SendChatMessageHandler,
    SetLanguageCommand, SetLanguageHandler, ShowFaqsCommand, ShowFaqsHandler, StartChatCommand,
    StartChatHandler,
};
pub use handlers::wizard::{
    CloseWizardCommand, CloseWizardHandler, ConfirmSubmissionCommand, ConfirmSubmissionHandler,
    ConfirmSubmissionResult, GetWizardHandler, GetWizardQuery, OpenWizardHandler,
    SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult,
};
