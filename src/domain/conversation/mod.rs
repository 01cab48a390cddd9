//! Conversation primitives shared by the scripted assistants.
//!
//! Both the application wizard and the FAQ assistant render an append-only
//! chat transcript; their state machines stay separate.

mod transcript;

pub use transcript::{Speaker, Transcript, TranscriptEntry};
