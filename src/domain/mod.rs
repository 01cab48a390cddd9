//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine)
//! - `conversation` - Append-only transcript shared by both assistants
//! - `wizard` - Multi-step application form wizard
//! - `assistant` - FAQ and quick-action tourism assistant

pub mod assistant;
pub mod conversation;
pub mod foundation;
pub mod wizard;
