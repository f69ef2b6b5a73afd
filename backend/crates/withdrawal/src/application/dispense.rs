//! Dispense Notes Use Case

use crate::application::config::WithdrawalConfig;
use crate::domain::services::greedy_breakdown;
use crate::domain::value_objects::{Amount, RawAmount};
use crate::error::{WithdrawalError, WithdrawalResult};
use std::sync::Arc;

/// Output DTO for dispense notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispenseOutput {
    pub notes: Vec<u32>,
    pub total: u64,
}

/// Dispense Notes Use Case
pub struct DispenseNotesUseCase {
    config: Arc<WithdrawalConfig>,
}

impl DispenseNotesUseCase {
    pub fn new(config: Arc<WithdrawalConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, raw: RawAmount) -> WithdrawalResult<DispenseOutput> {
        let amount = Amount::parse(raw)?;
        let breakdown = greedy_breakdown(amount)?;

        // The amount is payable here; the cap only bounds what one request may hand out
        let note_count = breakdown.note_count();
        if note_count > self.config.max_notes {
            return Err(WithdrawalError::NoteLimitExceeded {
                amount: amount.value(),
                note_count,
                max_notes: self.config.max_notes,
            });
        }

        let notes = breakdown.into_notes();
        let total: u64 = notes.iter().map(|&note| u64::from(note)).sum();

        tracing::info!(
            amount = %amount.value(),
            note_count,
            total,
            "Dispensed notes"
        );

        Ok(DispenseOutput { notes, total })
    }
}
