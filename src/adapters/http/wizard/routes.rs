//! HTTP routes for wizard endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    close_wizard, confirm_submission, get_wizard, open_wizard, submit_answer, WizardHandlers,
};

/// Creates the wizard router, to be nested under `/api/wizard`.
pub fn wizard_routes(handlers: WizardHandlers) -> Router {
    Router::new()
        .route("/", post(open_wizard))
        .route("/:id", get(get_wizard).delete(close_wizard))
        .route("/:id/answers", post(submit_answer))
        .route("/:id/confirm", post(confirm_submission))
        .with_state(handlers)
}
