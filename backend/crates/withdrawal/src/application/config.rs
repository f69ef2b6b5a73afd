//! Application Configuration
//!
//! Configuration for the withdrawal application layer.

use crate::domain::value_objects::DENOMINATIONS;

/// Default cap on notes handed out by a single withdrawal
pub const DEFAULT_MAX_NOTES: u64 = 10_000;

/// Withdrawal application configuration
#[derive(Debug, Clone)]
pub struct WithdrawalConfig {
    /// Maximum number of notes a single withdrawal may dispense
    pub max_notes: u64,
}

impl Default for WithdrawalConfig {
    fn default() -> Self {
        Self {
            max_notes: DEFAULT_MAX_NOTES,
        }
    }
}

impl WithdrawalConfig {
    pub fn with_max_notes(max_notes: u64) -> Self {
        Self { max_notes }
    }

    /// Largest whole-dollar amount that stays within the note cap
    pub fn max_dispensable_amount(&self) -> u64 {
        self.max_notes.saturating_mul(u64::from(DENOMINATIONS[0]))
    }
}
