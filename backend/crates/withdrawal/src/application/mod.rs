//! Application Layer - Use Cases
//!
//! Orchestrates domain logic under the configured limits.

pub mod config;
pub mod dispense;
