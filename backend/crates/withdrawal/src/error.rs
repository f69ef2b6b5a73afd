//! Withdrawal Error Types
//!
//! This module provides withdrawal-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Message returned for any failure not anticipated by the domain
pub const INTERNAL_ERROR_MESSAGE: &str =
    "An unexpected error occurred while processing your request.";

/// Withdrawal-specific result type alias
pub type WithdrawalResult<T> = Result<T, WithdrawalError>;

/// Withdrawal-specific error variants
///
/// Domain failures (`InvalidArgument`, `NoteUnavailable`) come from the note
/// calculator, `NoteLimitExceeded` from the dispense use case; the rest are
/// raised by the HTTP adapter.
#[derive(Debug, Error)]
pub enum WithdrawalError {
    /// Request body could not be read
    #[error("Invalid JSON in request body.")]
    UnreadableBody(#[from] BytesRejection),

    /// Request body is not valid JSON
    #[error("Invalid JSON in request body.")]
    InvalidJson(#[from] serde_json::Error),

    /// Request body is valid JSON but not an object
    #[error("Request body must be an object with an \"amount\" property.")]
    InvalidBodyShape,

    /// Amount is absent, not a number, or negative
    #[error("{0}")]
    InvalidArgument(String),

    /// No combination of notes sums to the amount
    #[error("The requested amount of ${:.2} cannot be satisfied with available notes.", .amount)]
    NoteUnavailable { amount: f64 },

    /// Amount is payable, but needs more notes than one withdrawal may dispense
    #[error(
        "The requested amount of ${:.2} needs {} notes, more than the {} a single withdrawal can dispense.",
        .amount, .note_count, .max_notes
    )]
    NoteLimitExceeded {
        amount: f64,
        note_count: u64,
        max_notes: u64,
    },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WithdrawalError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            WithdrawalError::UnreadableBody(_)
            | WithdrawalError::InvalidJson(_)
            | WithdrawalError::InvalidBodyShape
            | WithdrawalError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            WithdrawalError::NoteUnavailable { .. } | WithdrawalError::NoteLimitExceeded { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            WithdrawalError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            WithdrawalError::UnreadableBody(_)
            | WithdrawalError::InvalidJson(_)
            | WithdrawalError::InvalidBodyShape
            | WithdrawalError::InvalidArgument(_) => ErrorKind::BadRequest,
            WithdrawalError::NoteUnavailable { .. } | WithdrawalError::NoteLimitExceeded { .. } => {
                ErrorKind::UnprocessableEntity
            }
            WithdrawalError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Value of the `error` field in the response body
    pub fn error_code(&self) -> &'static str {
        match self {
            WithdrawalError::UnreadableBody(_)
            | WithdrawalError::InvalidJson(_)
            | WithdrawalError::InvalidBodyShape => "InvalidRequest",
            WithdrawalError::InvalidArgument(_) => "InvalidArgumentException",
            WithdrawalError::NoteUnavailable { .. } => "NoteUnavailableException",
            WithdrawalError::NoteLimitExceeded { .. } => "WithdrawalLimitExceeded",
            WithdrawalError::Internal(_) => "InternalServerError",
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            WithdrawalError::Internal(msg) => {
                tracing::error!(message = %msg, "Unexpected error in withdraw handler");
            }
            WithdrawalError::UnreadableBody(e) => {
                tracing::debug!(error = %e, "Withdraw request body unreadable");
            }
            WithdrawalError::InvalidJson(e) => {
                tracing::debug!(error = %e, "Withdraw request body is not JSON");
            }
            WithdrawalError::NoteUnavailable { amount } => {
                tracing::info!(amount = %amount, "Amount cannot be dispensed");
            }
            WithdrawalError::NoteLimitExceeded {
                amount,
                note_count,
                max_notes,
            } => {
                tracing::warn!(
                    amount = %amount,
                    note_count,
                    max_notes,
                    "Withdrawal exceeds note cap"
                );
            }
            _ => {
                tracing::debug!(error = %self, "Withdrawal error");
            }
        }
    }
}

impl From<WithdrawalError> for AppError {
    fn from(err: WithdrawalError) -> Self {
        let code = err.error_code();
        let kind = err.kind();
        let app_err = match err {
            // Never leak internal details to the caller
            WithdrawalError::Internal(_) => AppError::new(kind, INTERNAL_ERROR_MESSAGE),
            _ => AppError::new(kind, err.to_string()),
        };
        app_err.with_code(code)
    }
}

impl IntoResponse for WithdrawalError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
