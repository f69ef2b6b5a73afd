//! Withdrawal Router

use crate::application::config::WithdrawalConfig;
use crate::presentation::handlers::{self, WithdrawalAppState};
use axum::{Router, routing::post};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;

/// Create the withdrawal router, to be nested under `/api`
pub fn withdrawal_router(config: WithdrawalConfig) -> Router {
    let state = WithdrawalAppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/withdraw", post(handlers::withdraw))
        .layer(CatchPanicLayer::custom(handlers::handle_panic))
        .with_state(state)
}
