//! Domain Value Objects
//!
//! Immutable value types for the withdrawal domain.

use crate::error::{WithdrawalError, WithdrawalResult};

/// Available note denominations, strictly descending.
///
/// The order is the greedy preference order.
pub const DENOMINATIONS: [u32; 4] = [100, 50, 20, 10];

/// Amount as it arrived, before validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawAmount {
    /// Missing or null
    Absent,
    /// Present but not a number
    NotNumeric,
    Number(f64),
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl From<Option<f64>> for RawAmount {
    fn from(value: Option<f64>) -> Self {
        value.map_or(RawAmount::Absent, RawAmount::Number)
    }
}

/// Validated withdrawal amount in dollars: finite and non-negative
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    /// Validate a raw amount.
    ///
    /// Checks run in order: absent, not a finite number, negative.
    pub fn parse(raw: RawAmount) -> WithdrawalResult<Self> {
        let value = match raw {
            RawAmount::Absent => {
                return Err(WithdrawalError::InvalidArgument(
                    "Amount cannot be null or undefined.".to_string(),
                ));
            }
            RawAmount::NotNumeric => return Err(not_a_number()),
            RawAmount::Number(value) if !value.is_finite() => return Err(not_a_number()),
            RawAmount::Number(value) => value,
        };

        if value < 0.0 {
            return Err(WithdrawalError::InvalidArgument(format!(
                "Amount cannot be negative. Received: {}",
                js_number(value)
            )));
        }

        // -0.0 passes the sign check; normalize it
        Ok(Self(value.abs()))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

/// Print a number the way JavaScript's `Number#toString` does.
///
/// Magnitudes outside `[1e-6, 1e21)` switch to exponent form with an
/// explicit exponent sign (`1e+21`, `1e-7`); everything else is the
/// shortest round-trip decimal, which `f64`'s `Display` already produces.
pub(crate) fn js_number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-6..1e21).contains(&magnitude) {
        return format!("{value}");
    }

    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

fn not_a_number() -> WithdrawalError {
    WithdrawalError::InvalidArgument("Amount must be a valid number.".to_string())
}

/// Notes grouped by denomination, in dispensing order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteBreakdown {
    entries: Vec<(u32, u64)>,
}

impl NoteBreakdown {
    pub(crate) fn push(&mut self, denomination: u32, count: u64) {
        if count > 0 {
            self.entries.push((denomination, count));
        }
    }

    /// `(denomination, count)` pairs, largest denomination first
    pub fn entries(&self) -> &[(u32, u64)] {
        &self.entries
    }

    pub fn note_count(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, &(_, count)| acc.saturating_add(count))
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().fold(0u64, |acc, &(denomination, count)| {
            acc.saturating_add(u64::from(denomination).saturating_mul(count))
        })
    }

    /// Expand into the flat note sequence, e.g. `[50, 20, 10]`
    pub fn into_notes(self) -> Vec<u32> {
        self.entries
            .into_iter()
            .flat_map(|(denomination, count)| {
                std::iter::repeat_n(denomination, usize::try_from(count).unwrap_or(usize::MAX))
            })
            .collect()
    }
}
