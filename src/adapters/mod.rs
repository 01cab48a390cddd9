//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST surface for the wizard and the assistant
//! - `pacing` - Presentation delays (tokio timer, instant for tests)
//! - `storage` - In-memory session registry and idle eviction
//! - `submission` - Application hand-off (HTTP, log, mock)

pub mod http;
pub mod pacing;
pub mod storage;
pub mod submission;

pub use pacing::{InstantPacer, PacingSchedule, TokioPacer};
pub use storage::{IdleSweeper, IdleSweeperConfig, InMemorySessionRegistry};
pub use submission::{HttpSubmitter, HttpSubmitterConfig, LoggingSubmitter, MockSubmitter};
