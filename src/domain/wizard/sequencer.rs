//! Step sequencer - the wizard's position within its script.
//!
//! Advancement is a pure increment. The sequencer never looks at answer
//! content, so every visitor walks the same path.

use std::sync::Arc;

use super::script::WizardScript;
use super::step::StepDefinition;

/// Returns the index after `current_index`, capped at `len`.
///
/// `len` itself means "no more steps".
pub fn next_index(current_index: usize, len: usize) -> usize {
    current_index.saturating_add(1).min(len)
}

/// Tracks the active step of one wizard over a shared script.
#[derive(Debug, Clone)]
pub struct StepSequencer {
    script: Arc<WizardScript>,
    current_index: usize,
}

impl StepSequencer {
    /// Positions the sequencer on the first step after the intro.
    pub fn new(script: Arc<WizardScript>) -> Self {
        let current_index = script.intro_len();
        Self {
            script,
            current_index,
        }
    }

    pub fn script(&self) -> &WizardScript {
        &self.script
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The active step, or `None` once the sequence is exhausted.
    pub fn current_step(&self) -> Option<&StepDefinition> {
        self.script.get(self.current_index)
    }

    /// Leading informational steps shown when the wizard opens.
    pub fn intro(&self) -> &[StepDefinition] {
        &self.script.steps()[..self.script.intro_len()]
    }

    /// Moves one step forward and returns the new active step.
    pub fn advance(&mut self) -> Option<&StepDefinition> {
        self.current_index = next_index(self.current_index, self.script.len());
        self.current_step()
    }

    /// Moves past the last step.
    pub fn finish(&mut self) {
        self.current_index = self.script.len();
    }

    /// Returns true when the active step collects an answer.
    pub fn awaiting_answer(&self) -> bool {
        self.current_step().map_or(false, StepDefinition::is_answerable)
    }

    /// 1-based position among answerable steps, if the active step is one.
    pub fn question_number(&self) -> Option<usize> {
        if !self.awaiting_answer() {
            return None;
        }
        let before = self.script.steps()[..self.current_index]
            .iter()
            .filter(|s| s.is_answerable())
            .count();
        Some(before + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wizard::step::InputKind;

    fn script() -> Arc<WizardScript> {
        Arc::new(
            WizardScript::new(vec![
                StepDefinition::info("intro", "Welcome"),
                StepDefinition::question("name", "Name?", "name", InputKind::ShortText),
                StepDefinition::question("notes", "Notes?", "notes", InputKind::LongText).optional(),
                StepDefinition::confirm("confirm", "Review"),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn next_index_is_increment_capped_at_len() {
        assert_eq!(next_index(0, 4), 1);
        assert_eq!(next_index(3, 4), 4);
        assert_eq!(next_index(4, 4), 4);
        assert_eq!(next_index(usize::MAX, 4), 4);
    }

    #[test]
    fn starts_after_intro() {
        let seq = StepSequencer::new(script());
        assert_eq!(seq.current_index(), 1);
        assert_eq!(seq.current_step().unwrap().id, "name");
        assert_eq!(seq.intro().len(), 1);
        assert_eq!(seq.question_number(), Some(1));
    }

    #[test]
    fn advance_walks_linearly_then_runs_out() {
        let mut seq = StepSequencer::new(script());
        assert_eq!(seq.advance().map(|s| s.id.as_str()), Some("notes"));
        assert_eq!(seq.question_number(), Some(2));
        assert_eq!(seq.advance().map(|s| s.id.as_str()), Some("confirm"));
        assert!(!seq.awaiting_answer());
        assert_eq!(seq.question_number(), None);
        assert!(seq.advance().is_none());
        assert!(seq.advance().is_none());
        assert_eq!(seq.current_index(), 4);
    }

    #[test]
    fn finish_moves_past_last_step() {
        let mut seq = StepSequencer::new(script());
        seq.finish();
        assert!(seq.current_step().is_none());
    }
}
