//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    InvalidScript,

    // Not found errors
    WizardNotFound,
    ChatNotFound,

    // State errors
    InvalidStateTransition,
    SessionDiscarded,
    SessionBusy,
    AwaitingConfirmation,
    ConfirmUnavailable,
    ApplicationCompleted,

    // Infrastructure errors
    CapacityReached,
    SubmissionFailed,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::InvalidScript => "INVALID_SCRIPT",
            ErrorCode::WizardNotFound => "WIZARD_NOT_FOUND",
            ErrorCode::ChatNotFound => "CHAT_NOT_FOUND",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::SessionDiscarded => "SESSION_DISCARDED",
            ErrorCode::SessionBusy => "SESSION_BUSY",
            ErrorCode::AwaitingConfirmation => "AWAITING_CONFIRMATION",
            ErrorCode::ConfirmUnavailable => "CONFIRM_UNAVAILABLE",
            ErrorCode::ApplicationCompleted => "APPLICATION_COMPLETED",
            ErrorCode::CapacityReached => "CAPACITY_REACHED",
            ErrorCode::SubmissionFailed => "SUBMISSION_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
