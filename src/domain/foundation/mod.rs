//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, the state machine trait, and error
//! types shared by the wizard and assistant domains.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ChatSessionId, WizardSessionId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
