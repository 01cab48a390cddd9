//! HTTP adapter for application wizard endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ConfirmResponse, SubmitAnswerRequest, SubmitAnswerResponse};
pub use handlers::WizardHandlers;
pub use routes::wizard_routes;
