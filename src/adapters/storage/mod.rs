//! Storage Adapters
//!
//! Implementations of the SessionRegistry port.
//!
//! ## Available Adapters
//!
//! - **InMemorySessionRegistry** - Open sessions in process memory
//! - **IdleSweeper** - Background eviction of abandoned sessions
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemorySessionRegistry;
//!
//! let wizards: InMemorySessionRegistry<WizardSessionId, WizardSession> =
//!     InMemorySessionRegistry::with_limit(10_000);
//! ```

mod idle_sweeper;
mod in_memory_session_registry;

pub use idle_sweeper::{IdleSweeper, IdleSweeperConfig};
pub use in_memory_session_registry::InMemorySessionRegistry;
