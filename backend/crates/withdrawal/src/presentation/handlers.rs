//! HTTP Handlers

use crate::application::config::WithdrawalConfig;
use crate::application::dispense::DispenseNotesUseCase;
use crate::error::{WithdrawalError, WithdrawalResult};
use crate::presentation::dto::{WithdrawRequest, WithdrawResponse};
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::response::{IntoResponse, Response};
use std::any::Any;
use std::sync::Arc;

/// Shared state for withdrawal handlers
#[derive(Clone)]
pub struct WithdrawalAppState {
    pub config: Arc<WithdrawalConfig>,
}

/// POST /api/withdraw
///
/// The body is taken as raw bytes so that no `Content-Type` is required and
/// JSON errors map to our own error body.
pub async fn withdraw(
    State(state): State<WithdrawalAppState>,
    body: Result<Bytes, BytesRejection>,
) -> WithdrawalResult<Json<WithdrawResponse>> {
    let body = body?;
    let request = WithdrawRequest::from_slice(&body)?;

    let use_case = DispenseNotesUseCase::new(state.config.clone());
    let output = use_case.execute(request.amount)?;

    Ok(Json(WithdrawResponse {
        notes: output.notes,
        total: output.total,
    }))
}

/// Turn a handler panic into the generic 500 body
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    WithdrawalError::Internal(format!("panic: {detail}")).into_response()
}
