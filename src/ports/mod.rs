//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionRegistry` - Open wizard and chat sessions, locked per action
//! - `ApplicationSubmitter` - Hand-off of confirmed applications
//! - `ResponsePacer` - Presentation delays between bot turns

mod application_submitter;
mod response_pacer;
mod session_registry;

pub use application_submitter::{
    ApplicationSnapshot, ApplicationSubmitter, SubmissionError, SubmissionReceipt,
};
pub use response_pacer::{Pause, ResponsePacer};
pub use session_registry::{
    ChatRegistry, ExpiringSession, RegistryError, SessionRegistry, SharedSession, WizardRegistry,
};
