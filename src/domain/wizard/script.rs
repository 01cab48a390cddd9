//! Wizard scripts - validated, ordered step sequences.
//!
//! A script is fixed once built. Sessions reference steps by index only,
//! so one script is shared (behind an `Arc`) by every open wizard.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::step::{InputKind, StepDefinition};

/// Reasons a step sequence is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("Script has no steps")]
    Empty,

    #[error("Step '{0}' has an empty prompt")]
    EmptyPrompt(String),

    #[error("Step id '{0}' is used more than once")]
    DuplicateStepId(String),

    #[error("Field key '{0}' is used more than once")]
    DuplicateFieldKey(String),

    #[error("Step '{0}' collects an answer but has no field key")]
    MissingFieldKey(String),

    #[error("Step '{0}' cannot store an answer")]
    UnexpectedFieldKey(String),

    #[error("Informational step '{0}' must come before the first question")]
    InfoAfterQuestion(String),

    #[error("Confirm step '{0}' must be the last step")]
    ConfirmNotLast(String),

    #[error("Failed to read script: {0}")]
    Io(String),

    #[error("Failed to parse script: {0}")]
    Parse(String),
}

#[derive(Debug, Deserialize)]
struct ScriptDocument {
    steps: Vec<StepDefinition>,
}

/// An ordered, validated sequence of wizard steps.
///
/// # Invariants
///
/// - step ids and field keys are unique
/// - informational steps form a leading intro and appear nowhere else
/// - answerable steps carry a field key; info/confirm steps never do
/// - at most one confirm step, and only in last position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardScript {
    steps: Vec<StepDefinition>,
    intro_len: usize,
}

impl WizardScript {
    /// Validates and builds a script.
    pub fn new(steps: Vec<StepDefinition>) -> Result<Self, ScriptError> {
        if steps.is_empty() {
            return Err(ScriptError::Empty);
        }

        let mut ids = HashSet::new();
        let mut keys = HashSet::new();
        let mut seen_question = false;
        let last = steps.len() - 1;

        for (index, step) in steps.iter().enumerate() {
            if step.prompt.trim().is_empty() {
                return Err(ScriptError::EmptyPrompt(step.id.clone()));
            }
            if !ids.insert(step.id.as_str()) {
                return Err(ScriptError::DuplicateStepId(step.id.clone()));
            }

            match (step.input_kind, &step.field_key) {
                (InputKind::Info, Some(_)) | (InputKind::Confirm, Some(_)) => {
                    return Err(ScriptError::UnexpectedFieldKey(step.id.clone()));
                }
                (InputKind::Info, None) if seen_question => {
                    return Err(ScriptError::InfoAfterQuestion(step.id.clone()));
                }
                (InputKind::Confirm, None) if index != last => {
                    return Err(ScriptError::ConfirmNotLast(step.id.clone()));
                }
                (kind, None) if kind.is_answerable() => {
                    return Err(ScriptError::MissingFieldKey(step.id.clone()));
                }
                (_, Some(key)) => {
                    if !keys.insert(key.as_str()) {
                        return Err(ScriptError::DuplicateFieldKey(key.clone()));
                    }
                    seen_question = true;
                }
                _ => {}
            }
        }

        Ok(Self::assemble(steps))
    }

    /// Parses a YAML document of the form `steps: [...]`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ScriptError> {
        let doc: ScriptDocument =
            serde_yaml::from_str(yaml).map_err(|e| ScriptError::Parse(e.to_string()))?;
        Self::new(doc.steps)
    }

    /// Loads a YAML script from disk.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let yaml = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::Io(format!("{}: {}", path.as_ref().display(), e)))?;
        Self::from_yaml_str(&yaml)
    }

    /// The tourism application form shipped with the portal.
    pub fn application_form() -> Self {
        Self::assemble(vec![
            StepDefinition::info(
                "intro",
                "Hello! I'm your Application Assistant. Let's get started!",
            ),
            StepDefinition::question("name", "What is your full name?", "fullName", InputKind::ShortText)
                .with_placeholder("e.g., John Doe"),
            StepDefinition::question("email", "What is your email address?", "email", InputKind::Email)
                .with_placeholder("e.g., john.doe@example.com"),
            StepDefinition::question("phone", "What is your phone number?", "phoneNumber", InputKind::Phone)
                .with_placeholder("e.g., +1234567890"),
            StepDefinition::question(
                "experience",
                "Tell me about your previous experience or relevant skills (optional)?",
                "experience",
                InputKind::LongText,
            )
            .optional()
            .with_placeholder("e.g., 2 years in customer service..."),
            StepDefinition::question(
                "reason",
                "Why are you interested in this opportunity?",
                "reason",
                InputKind::LongText,
            )
            .with_placeholder("e.g., I'm passionate about..."),
            StepDefinition::question(
                "availability",
                "What is your availability like?",
                "availability",
                InputKind::ShortText,
            )
            .with_placeholder("e.g., Full-time, M-F, Part-time"),
            StepDefinition::confirm(
                "confirm",
                "Thank you for providing the information. Please review your answers before submitting:",
            ),
        ])
    }

    fn assemble(steps: Vec<StepDefinition>) -> Self {
        let intro_len = steps
            .iter()
            .take_while(|s| s.input_kind == InputKind::Info)
            .count();
        Self { steps, intro_len }
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }

    /// Number of leading informational steps.
    pub fn intro_len(&self) -> usize {
        self.intro_len
    }

    /// Number of steps that collect an answer.
    pub fn answerable_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_answerable()).count()
    }
}

impl Default for WizardScript {
    fn default() -> Self {
        Self::application_form()
    }
}
