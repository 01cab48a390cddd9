//! Pacing Adapters.
//!
//! Implementations of the ResponsePacer port.
//!
//! - `TokioPacer` - Sleeps for configured delays with random jitter
//! - `InstantPacer` - Returns immediately and records requested pauses

mod instant_pacer;
mod tokio_pacer;

pub use instant_pacer::InstantPacer;
pub use tokio_pacer::{PacingSchedule, TokioPacer};
