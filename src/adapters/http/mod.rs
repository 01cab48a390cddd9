//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! `router` assembles them behind the shared layers.

pub mod assistant;
pub mod error;
pub mod health;
pub mod router;
pub mod wizard;

pub use error::ErrorResponse;
pub use router::{app_router, AppServices, RouterOptions};
