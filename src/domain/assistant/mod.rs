//! FAQ and quick-action tourism assistant.
//!
//! Independent of the application wizard: it can only ask the caller to
//! open one.

mod errors;
mod intent;
pub mod knowledge;
mod language;
mod quick_action;
mod session;
mod view;

pub use errors::ChatError;
pub use intent::{classify, Intent};
pub use knowledge::{Faq, Topic, FAQS};
pub use language::Language;
pub use quick_action::QuickAction;
pub use session::{ChatReply, ChatSession};
pub use view::{ChatView, LanguageOption, QuickActionView};
