//! HTTP handlers for wizard endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::wizard::{
    CloseWizardCommand, CloseWizardHandler, ConfirmSubmissionCommand, ConfirmSubmissionHandler,
    GetWizardHandler, GetWizardQuery, OpenWizardHandler, SubmitAnswerCommand, SubmitAnswerHandler,
};
use crate::domain::foundation::WizardSessionId;
use crate::domain::wizard::WizardError;

use super::super::error::{domain_error_response, invalid_id_response};
use super::dto::{ConfirmResponse, SubmitAnswerRequest, SubmitAnswerResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct WizardHandlers {
    open_handler: Arc<OpenWizardHandler>,
    submit_handler: Arc<SubmitAnswerHandler>,
    confirm_handler: Arc<ConfirmSubmissionHandler>,
    close_handler: Arc<CloseWizardHandler>,
    get_handler: Arc<GetWizardHandler>,
    verbose_errors: bool,
}

impl WizardHandlers {
    pub fn new(
        open_handler: Arc<OpenWizardHandler>,
        submit_handler: Arc<SubmitAnswerHandler>,
        confirm_handler: Arc<ConfirmSubmissionHandler>,
        close_handler: Arc<CloseWizardHandler>,
        get_handler: Arc<GetWizardHandler>,
    ) -> Self {
        Self {
            open_handler,
            submit_handler,
            confirm_handler,
            close_handler,
            get_handler,
            verbose_errors: false,
        }
    }

    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }

    fn error(&self, error: WizardError) -> Response {
        handle_wizard_error(error, self.verbose_errors)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/wizard - Open a new wizard
pub async fn open_wizard(State(handlers): State<WizardHandlers>) -> Response {
    match handlers.open_handler.handle().await {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(e) => handlers.error(e),
    }
}

/// GET /api/wizard/:id - Current wizard view
pub async fn get_wizard(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let Ok(session_id) = session_id.parse::<WizardSessionId>() else {
        return invalid_id_response("wizard");
    };

    match handlers.get_handler.handle(GetWizardQuery { session_id }).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handlers.error(e),
    }
}

/// POST /api/wizard/:id/answers - Answer the active step
pub async fn submit_answer(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Response {
    let Ok(session_id) = session_id.parse::<WizardSessionId>() else {
        return invalid_id_response("wizard");
    };

    let cmd = SubmitAnswerCommand {
        session_id,
        text: req.text,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(result) => {
            let response = SubmitAnswerResponse {
                outcome: result.outcome,
                wizard: result.view,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handlers.error(e),
    }
}

/// POST /api/wizard/:id/confirm - Confirm or retry the submission
///
/// Returns 202 while the hand-off runs in the background.
pub async fn confirm_submission(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let Ok(session_id) = session_id.parse::<WizardSessionId>() else {
        return invalid_id_response("wizard");
    };

    match handlers
        .confirm_handler
        .handle(ConfirmSubmissionCommand { session_id })
        .await
    {
        Ok(result) => {
            let response = ConfirmResponse {
                attempt: result.attempt,
                wizard: result.view,
            };
            (StatusCode::ACCEPTED, Json(response)).into_response()
        }
        Err(e) => handlers.error(e),
    }
}

/// DELETE /api/wizard/:id - Close the wizard
pub async fn close_wizard(
    State(handlers): State<WizardHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let Ok(session_id) = session_id.parse::<WizardSessionId>() else {
        return invalid_id_response("wizard");
    };

    match handlers
        .close_handler
        .handle(CloseWizardCommand { session_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handlers.error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_wizard_error(error: WizardError, verbose: bool) -> Response {
    domain_error_response(error.into(), verbose)
}
