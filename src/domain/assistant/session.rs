//! ChatSession - state of one open FAQ assistant.
//!
//! Shares the transcript and typing-latch pattern with the wizard but keeps
//! its own vocabulary: there is no step sequence and no confirm gate.

use serde::Serialize;

use crate::domain::conversation::Transcript;
use crate::domain::foundation::{ChatSessionId, Timestamp};

use super::errors::ChatError;
use super::intent::{self, Intent};
use super::knowledge;
use super::language::Language;
use super::quick_action::QuickAction;

/// Result of a chat action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    /// Classified intent; `None` for the FAQ listing.
    pub intent: Option<Intent>,
    /// The caller should open the application wizard.
    pub open_application: bool,
    /// A bot reply was queued and the typing latch is set.
    pub queued: bool,
}

/// State of one open assistant chat.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: ChatSessionId,
    language: Language,
    transcript: Transcript,
    quick_actions_visible: bool,
    typing: bool,
    discarded: bool,
    last_active: Timestamp,
}

impl ChatSession {
    /// Starts a chat seeded with the greeting.
    pub fn start(id: ChatSessionId, language: Language) -> Self {
        let mut transcript = Transcript::new();
        transcript.bot(knowledge::greeting(language));
        Self {
            id,
            language,
            transcript,
            quick_actions_visible: true,
            typing: false,
            discarded: false,
            last_active: Timestamp::now(),
        }
    }

    pub fn id(&self) -> &ChatSessionId {
        &self.id
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn quick_actions_visible(&self) -> bool {
        self.quick_actions_visible
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn is_discarded(&self) -> bool {
        self.discarded
    }

    /// When the visitor last acted on this chat.
    pub fn last_active(&self) -> &Timestamp {
        &self.last_active
    }

    /// Handles a typed message.
    ///
    /// The reply is chosen and appended right away; only its display is
    /// paced.
    pub fn send_message(&mut self, text: &str) -> Result<ChatReply, ChatError> {
        self.ensure_ready()?;
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        self.last_active = Timestamp::now();

        self.transcript.user(text);
        self.quick_actions_visible = false;

        let intent = intent::classify(text);
        self.transcript.bot(intent::reply(intent, self.language));
        self.typing = true;

        Ok(ChatReply {
            intent: Some(intent),
            open_application: intent == Intent::Application,
            queued: true,
        })
    }

    /// Handles a quick-action button.
    ///
    /// `Application` only asks the caller to open the wizard and leaves the
    /// transcript alone.
    pub fn quick_action(&mut self, action: QuickAction) -> Result<ChatReply, ChatError> {
        self.ensure_ready()?;
        if !self.quick_actions_visible {
            return Err(ChatError::QuickActionsHidden);
        }
        self.last_active = Timestamp::now();

        if action == QuickAction::Application {
            return Ok(ChatReply {
                intent: Some(Intent::Application),
                open_application: true,
                queued: false,
            });
        }

        self.transcript.user(action.label());
        self.quick_actions_visible = false;

        let (intent, text) = match action.topic() {
            Some(topic) => (
                Some(Intent::Topic(topic)),
                knowledge::topic_response(topic, self.language).to_string(),
            ),
            None => (None, knowledge::faq_listing()),
        };
        self.transcript.bot(text);
        self.typing = true;

        Ok(ChatReply {
            intent,
            open_application: false,
            queued: true,
        })
    }

    /// Appends the FAQ listing as a bot message.
    pub fn show_faqs(&mut self) -> Result<(), ChatError> {
        self.ensure_ready()?;
        self.last_active = Timestamp::now();
        self.transcript.bot(knowledge::faq_listing());
        self.quick_actions_visible = false;
        Ok(())
    }

    /// Switches the reply language. Earlier entries keep their language.
    pub fn set_language(&mut self, language: Language) -> Result<(), ChatError> {
        if self.discarded {
            return Err(ChatError::Discarded);
        }
        self.language = language;
        self.last_active = Timestamp::now();
        Ok(())
    }

    /// Clears the typing latch. Returns false if the chat was closed.
    pub fn settle(&mut self) -> bool {
        if self.discarded {
            return false;
        }
        self.typing = false;
        true
    }

    pub fn discard(&mut self) {
        self.discarded = true;
        self.typing = false;
    }

    fn ensure_ready(&self) -> Result<(), ChatError> {
        if self.discarded {
            return Err(ChatError::Discarded);
        }
        if self.typing {
            return Err(ChatError::Busy);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assistant::knowledge::Topic;
    use crate::domain::conversation::Speaker;

    fn chat() -> ChatSession {
        ChatSession::start(ChatSessionId::new(), Language::En)
    }

    #[test]
    fn starts_with_greeting_and_quick_actions() {
        let session = chat();
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(
            session.transcript().entries()[0].text(),
            "Hello! I'm your Jharkhand Tourism assistant. How can I help you today?"
        );
        assert!(session.quick_actions_visible());
    }

    #[test]
    fn messages_refresh_last_activity() {
        let mut session = chat();
        let started = *session.last_active();
        std::thread::sleep(std::time::Duration::from_millis(5));
        session.send_message("thanks").unwrap();
        assert!(*session.last_active() > started);
    }

    #[test]
    fn hindi_chat_greets_in_hindi() {
        let session = ChatSession::start(ChatSessionId::new(), Language::Hi);
        assert!(session.transcript().entries()[0].text().starts_with("नमस्ते"));
    }

    #[test]
    fn message_appends_user_then_bot_and_hides_quick_actions() {
        let mut session = chat();
        let reply = session.send_message("Show me places to see").unwrap();

        assert_eq!(reply.intent, Some(Intent::Topic(Topic::Destinations)));
        assert!(!reply.open_application);
        let entries = session.transcript().entries();
        assert_eq!(entries[1].speaker(), Speaker::User);
        assert_eq!(entries[1].text(), "Show me places to see");
        assert_eq!(entries[2].speaker(), Speaker::Bot);
        assert!(!session.quick_actions_visible());
        assert!(session.is_typing());
    }

    #[test]
    fn blank_message_is_refused_without_mutation() {
        let mut session = chat();
        assert_eq!(session.send_message("  "), Err(ChatError::EmptyMessage));
        assert_eq!(session.transcript().len(), 1);
        assert!(session.quick_actions_visible());
    }

    #[test]
    fn typing_latch_blocks_overlapping_messages() {
        let mut session = chat();
        session.send_message("hello").unwrap();
        assert_eq!(session.send_message("again"), Err(ChatError::Busy));
        session.settle();
        assert!(session.send_message("again").is_ok());
    }

    #[test]
    fn application_message_asks_to_open_wizard() {
        let mut session = chat();
        let reply = session.send_message("How do I apply?").unwrap();
        assert!(reply.open_application);
        assert_eq!(
            session.transcript().last().unwrap().text(),
            "I'm opening the application form for you!"
        );
    }

    #[test]
    fn application_quick_action_leaves_transcript_alone() {
        let mut session = chat();
        let reply = session.quick_action(QuickAction::Application).unwrap();
        assert!(reply.open_application);
        assert!(!reply.queued);
        assert_eq!(session.transcript().len(), 1);
        assert!(session.quick_actions_visible());
        assert!(!session.is_typing());
    }

    #[test]
    fn topic_quick_action_echoes_label() {
        let mut session = ChatSession::start(ChatSessionId::new(), Language::Hi);
        session.quick_action(QuickAction::Marketplace).unwrap();

        let entries = session.transcript().entries();
        assert_eq!(entries[1].text(), "Local Products");
        assert_eq!(
            entries[2].text(),
            knowledge::topic_response(Topic::Marketplace, Language::Hi)
        );
        assert!(!session.quick_actions_visible());
    }

    #[test]
    fn faq_quick_action_lists_faqs() {
        let mut session = chat();
        session.quick_action(QuickAction::Faq).unwrap();
        assert_eq!(session.transcript().entries()[1].text(), "FAQs");
        assert_eq!(session.transcript().last().unwrap().text(), knowledge::faq_listing());
    }

    #[test]
    fn quick_actions_refused_after_first_exchange() {
        let mut session = chat();
        session.send_message("thanks").unwrap();
        session.settle();
        assert_eq!(
            session.quick_action(QuickAction::Itinerary),
            Err(ChatError::QuickActionsHidden)
        );
    }

    #[test]
    fn language_switch_affects_later_replies_only() {
        let mut session = chat();
        session.send_message("weather?").unwrap();
        session.settle();
        session.set_language(Language::Hi).unwrap();
        session.send_message("weather?").unwrap();

        let entries = session.transcript().entries();
        assert_eq!(entries[2].text(), knowledge::topic_response(Topic::Weather, Language::En));
        assert_eq!(entries[4].text(), knowledge::topic_response(Topic::Weather, Language::Hi));
    }

    #[test]
    fn show_faqs_appends_listing() {
        let mut session = chat();
        session.show_faqs().unwrap();
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript().last().unwrap().speaker(), Speaker::Bot);
    }

    #[test]
    fn discarded_chat_refuses_everything() {
        let mut session = chat();
        session.discard();
        assert_eq!(session.send_message("hi"), Err(ChatError::Discarded));
        assert_eq!(session.show_faqs(), Err(ChatError::Discarded));
        assert_eq!(session.set_language(Language::Hi), Err(ChatError::Discarded));
        assert!(!session.settle());
    }
}
