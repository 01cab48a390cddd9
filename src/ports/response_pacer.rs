//! ResponsePacer port - Presentation delays between bot turns.
//!
//! Pauses never change what is said or its order; the reply is already in
//! the transcript when the pause starts.

use async_trait::async_trait;

/// Kinds of pause, each with its own configured duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pause {
    /// Between the wizard intro and its first question.
    Greeting,
    /// Wizard "typing" before the next question.
    Typing,
    /// Minimum time the wizard shows the submitting state.
    Submitting,
    /// Assistant reply to a quick action.
    QuickReply,
    /// Assistant reply to a typed message.
    ChatReply,
}

/// Port for waiting out a presentation delay.
#[async_trait]
pub trait ResponsePacer: Send + Sync {
    async fn pause(&self, pause: Pause);
}
