//! Submission Adapters.
//!
//! Implementations of the ApplicationSubmitter port.
//!
//! ## Available Adapters
//!
//! - `LoggingSubmitter` - Writes applications to the service log
//! - `HttpSubmitter` - POSTs applications to an intake endpoint
//! - `MockSubmitter` - Configurable mock for testing

mod http_submitter;
mod logging_submitter;
mod mock_submitter;

pub use http_submitter::{HttpSubmitter, HttpSubmitterConfig};
pub use logging_submitter::LoggingSubmitter;
pub use mock_submitter::MockSubmitter;
