//! ChatView - read model for rendering an assistant chat.

use serde::Serialize;

use crate::domain::conversation::TranscriptEntry;
use crate::domain::foundation::ChatSessionId;

use super::knowledge;
use super::language::Language;
use super::quick_action::QuickAction;
use super::session::ChatSession;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickActionView {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatView {
    pub session_id: ChatSessionId,
    pub language: Language,
    pub languages: Vec<LanguageOption>,
    pub transcript: Vec<TranscriptEntry>,
    pub typing: bool,
    /// Empty once the first exchange has happened.
    pub quick_actions: Vec<QuickActionView>,
    pub input_placeholder: &'static str,
    pub footer: &'static str,
}

impl From<&ChatSession> for ChatView {
    fn from(session: &ChatSession) -> Self {
        let language = session.language();
        let quick_actions = if session.quick_actions_visible() {
            QuickAction::ALL
                .iter()
                .map(|a| QuickActionView {
                    id: a.id(),
                    label: a.label(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            session_id: *session.id(),
            language,
            languages: Language::ALL
                .iter()
                .map(|l| LanguageOption {
                    code: l.code(),
                    name: l.native_name(),
                })
                .collect(),
            transcript: session.transcript().entries().to_vec(),
            typing: session.is_typing(),
            quick_actions,
            input_placeholder: knowledge::input_placeholder(language),
            footer: knowledge::footer(language),
        }
    }
}
