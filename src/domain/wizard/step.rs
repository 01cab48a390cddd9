//! Step definitions for the application wizard.

use serde::{Deserialize, Serialize};

/// How a step expects to be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    /// Informational beat, never answered.
    Info,
    ShortText,
    Email,
    Phone,
    LongText,
    /// Terminal review step, answered only by the confirm action.
    Confirm,
}

impl InputKind {
    /// Returns true if the step collects a free-text answer.
    pub fn is_answerable(&self) -> bool {
        !matches!(self, InputKind::Info | InputKind::Confirm)
    }

    /// Returns true if the renderer should offer a multi-line box.
    pub fn is_multiline(&self) -> bool {
        matches!(self, InputKind::LongText)
    }
}

/// One question or informational beat in the fixed wizard sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDefinition {
    pub id: String,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_key: Option<String>,
    pub input_kind: InputKind,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl StepDefinition {
    /// An informational step with no answer.
    pub fn info(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            field_key: None,
            input_kind: InputKind::Info,
            optional: false,
            placeholder: None,
        }
    }

    /// A required question stored under `field_key`.
    pub fn question(
        id: impl Into<String>,
        prompt: impl Into<String>,
        field_key: impl Into<String>,
        input_kind: InputKind,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            field_key: Some(field_key.into()),
            input_kind,
            optional: false,
            placeholder: None,
        }
    }

    /// The terminal review step.
    pub fn confirm(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            field_key: None,
            input_kind: InputKind::Confirm,
            optional: false,
            placeholder: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn is_answerable(&self) -> bool {
        self.input_kind.is_answerable()
    }

    pub fn is_confirm(&self) -> bool {
        self.input_kind == InputKind::Confirm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_kind_uses_kebab_case_names() {
        assert_eq!(
            serde_json::to_string(&InputKind::ShortText).unwrap(),
            "\"short-text\""
        );
        let kind: InputKind = serde_json::from_str("\"long-text\"").unwrap();
        assert_eq!(kind, InputKind::LongText);
    }

    #[test]
    fn only_text_kinds_are_answerable() {
        assert!(!InputKind::Info.is_answerable());
        assert!(!InputKind::Confirm.is_answerable());
        for kind in [
            InputKind::ShortText,
            InputKind::Email,
            InputKind::Phone,
            InputKind::LongText,
        ] {
            assert!(kind.is_answerable(), "{:?} should be answerable", kind);
        }
    }

    #[test]
    fn question_builder_sets_field_key_and_flags() {
        let step = StepDefinition::question("notes", "Anything else?", "notes", InputKind::LongText)
            .optional()
            .with_placeholder("e.g. dietary needs");

        assert_eq!(step.field_key.as_deref(), Some("notes"));
        assert!(step.optional);
        assert!(step.input_kind.is_multiline());
        assert_eq!(step.placeholder.as_deref(), Some("e.g. dietary needs"));
    }
}
