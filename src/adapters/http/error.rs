//! Shared JSON error body and status mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Builds a body from a domain error.
    ///
    /// Internal messages are replaced unless `verbose` is set.
    pub fn from_domain(error: DomainError, verbose: bool) -> Self {
        if error.code == ErrorCode::InternalError && !verbose {
            return Self::internal("An internal error occurred");
        }
        let details = if error.details.is_empty() {
            None
        } else {
            serde_json::to_value(&error.details).ok()
        };
        Self {
            code: error.code.to_string(),
            message: error.message,
            details,
        }
    }
}

/// HTTP status for a domain error code.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::WizardNotFound | ErrorCode::ChatNotFound => StatusCode::NOT_FOUND,
        ErrorCode::InvalidStateTransition
        | ErrorCode::SessionDiscarded
        | ErrorCode::SessionBusy
        | ErrorCode::AwaitingConfirmation
        | ErrorCode::ConfirmUnavailable
        | ErrorCode::ApplicationCompleted => StatusCode::CONFLICT,
        ErrorCode::CapacityReached => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::SubmissionFailed => StatusCode::BAD_GATEWAY,
        ErrorCode::InvalidScript | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Renders a domain error as a JSON response.
pub fn domain_error_response(error: DomainError, verbose: bool) -> Response {
    let status = status_for(error.code);
    if status.is_server_error() {
        tracing::error!(code = %error.code, message = %error.message, "Request failed");
    }
    (status, Json(ErrorResponse::from_domain(error, verbose))).into_response()
}

/// 400 for a path id that is not a UUID.
pub fn invalid_id_response(kind: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(format!("Invalid {} ID", kind))),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refused_actions_are_conflicts() {
        assert_eq!(status_for(ErrorCode::SessionBusy), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorCode::ConfirmUnavailable), StatusCode::CONFLICT);
        assert_eq!(status_for(ErrorCode::ApplicationCompleted), StatusCode::CONFLICT);
    }

    #[test]
    fn lookups_and_capacity_have_their_own_statuses() {
        assert_eq!(status_for(ErrorCode::WizardNotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorCode::ValidationFailed), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::CapacityReached), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn internal_messages_are_hidden_unless_verbose() {
        let error = DomainError::new(ErrorCode::InternalError, "lock poisoned at registry.rs");

        let quiet = ErrorResponse::from_domain(error.clone(), false);
        assert_eq!(quiet.message, "An internal error occurred");

        let verbose = ErrorResponse::from_domain(error, true);
        assert_eq!(verbose.message, "lock poisoned at registry.rs");
    }

    #[test]
    fn details_are_carried() {
        let error = DomainError::new(ErrorCode::WizardNotFound, "Wizard not found: x")
            .with_detail("session_id", "x");

        let body = ErrorResponse::from_domain(error, false);

        assert_eq!(body.code, "WIZARD_NOT_FOUND");
        assert_eq!(body.details.unwrap()["session_id"], "x");
    }
}
