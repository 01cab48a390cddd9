//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Every
//! handler follows the same shape: lock the session, apply one domain
//! action, release, wait out the presentation pause, then settle.

pub mod assistant;
mod pacing;
pub mod wizard;
