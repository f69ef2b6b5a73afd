//! Domain Layer - Business logic
//!
//! This layer contains:
//! - Domain value objects (RawAmount, Amount, NoteBreakdown)
//! - Domain services (greedy note selection)

pub mod services;
pub mod value_objects;
