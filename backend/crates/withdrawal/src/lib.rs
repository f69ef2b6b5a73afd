//! Withdrawal Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Denominations, amount validation, greedy note selection
//! - `application/` - Use cases and configuration
//! - `presentation/` - HTTP handlers
//!
//! ## Dispensing Model
//! - Denominations are fixed: 100, 50, 20, 10
//! - Greedy selection; a leftover remainder means the amount is unsatisfiable
//! - Every request is independent; the only shared state is read-only config

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::WithdrawalConfig;
pub use domain::services::calculate_notes;
pub use error::{WithdrawalError, WithdrawalResult};
pub use presentation::router::withdrawal_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
