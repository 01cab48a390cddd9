//! State machine trait for status enums.
//!
//! Gives lifecycle enums such as the wizard submission state one way to
//! declare their legal moves and one validated way to make them.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors list their outgoing edges; `transition_to` and
/// `is_terminal` come for free.
///
/// ```ignore
/// let next = SubmissionState::Confirming.transition_to(SubmissionState::Submitting)?;
/// assert!(SubmissionState::Completed.is_terminal());
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Door {
        Closed,
        Open,
        Bricked,
    }

    impl StateMachine for Door {
        fn valid_transitions(&self) -> Vec<Self> {
            match self {
                Door::Closed => vec![Door::Open, Door::Bricked],
                Door::Open => vec![Door::Closed],
                Door::Bricked => vec![],
            }
        }
    }

    #[test]
    fn default_can_transition_follows_valid_transitions() {
        assert!(Door::Closed.can_transition_to(&Door::Open));
        assert!(!Door::Open.can_transition_to(&Door::Bricked));
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        assert_eq!(Door::Open.transition_to(Door::Closed), Ok(Door::Closed));
    }

    #[test]
    fn transition_to_reports_both_states_on_failure() {
        let err = Door::Bricked.transition_to(Door::Open).unwrap_err();
        assert!(err.to_string().contains("Bricked"));
        assert!(err.to_string().contains("Open"));
    }

    #[test]
    fn is_terminal_only_for_states_without_exits() {
        assert!(Door::Bricked.is_terminal());
        assert!(!Door::Closed.is_terminal());
    }
}
