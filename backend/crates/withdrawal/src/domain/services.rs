//! Domain Services
//!
//! Pure note-selection logic.

use crate::domain::value_objects::{Amount, DENOMINATIONS, NoteBreakdown, RawAmount};
use crate::error::{WithdrawalError, WithdrawalResult};

/// Greedy breakdown of a validated amount over [`DENOMINATIONS`].
///
/// Takes as many of each denomination as fit, largest first. A remainder
/// left after the smallest denomination means no combination exists, and
/// no alternative mix is tried.
pub fn greedy_breakdown(amount: Amount) -> WithdrawalResult<NoteBreakdown> {
    let mut breakdown = NoteBreakdown::default();
    if amount.is_zero() {
        return Ok(breakdown);
    }

    let mut remaining = amount.value();
    for denomination in DENOMINATIONS {
        let size = f64::from(denomination);
        let count = (remaining / size).floor();
        // `as` saturates; counts past u64::MAX are rejected by the note cap anyway
        breakdown.push(denomination, count as u64);
        remaining %= size;

        if remaining == 0.0 {
            break;
        }
    }

    if remaining > 0.0 {
        return Err(WithdrawalError::NoteUnavailable {
            amount: amount.value(),
        });
    }

    Ok(breakdown)
}

/// Calculate the notes to dispense for `amount`, largest first.
///
/// No note cap is applied here; request handling goes through
/// `DispenseNotesUseCase`, which checks the breakdown before expanding it.
///
/// ```
/// use withdrawal::domain::services::calculate_notes;
///
/// assert_eq!(calculate_notes(80.0).unwrap(), vec![50, 20, 10]);
/// assert!(calculate_notes(125.0).is_err());
/// ```
pub fn calculate_notes(amount: impl Into<RawAmount>) -> WithdrawalResult<Vec<u32>> {
    let amount = Amount::parse(amount.into())?;
    Ok(greedy_breakdown(amount)?.into_notes())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fewest notes for every amount up to `limit`, or `None` if unreachable.
    fn min_notes_table(limit: usize) -> Vec<Option<u64>> {
        let mut table = vec![None; limit + 1];
        table[0] = Some(0);
        for amount in 1..=limit {
            table[amount] = DENOMINATIONS
                .iter()
                .map(|&d| d as usize)
                .filter(|&d| d <= amount)
                .filter_map(|d| table[amount - d].map(|n| n + 1))
                .min();
        }
        table
    }

    #[test]
    fn test_spec_examples() {
        assert_eq!(calculate_notes(30.0).unwrap(), vec![20, 10]);
        assert_eq!(calculate_notes(80.0).unwrap(), vec![50, 20, 10]);
        assert_eq!(calculate_notes(0.0).unwrap(), Vec::<u32>::new());
        assert_eq!(calculate_notes(100.0).unwrap(), vec![100]);
        assert_eq!(
            calculate_notes(380.0).unwrap(),
            vec![100, 100, 100, 50, 20, 10]
        );
    }

    #[test]
    fn test_unreachable_amounts() {
        for amount in [5.0, 15.0, 25.0, 125.0] {
            let err = calculate_notes(amount).unwrap_err();
            assert!(matches!(err, WithdrawalError::NoteUnavailable { .. }));
            assert!(err.to_string().contains(&format!("${amount:.2}")));
        }
    }

    #[test]
    fn test_unavailable_message_format() {
        let err = calculate_notes(125.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The requested amount of $125.00 cannot be satisfied with available notes."
        );

        let err = calculate_notes(30.5).unwrap_err();
        assert!(err.to_string().contains("$30.50"));
    }

    #[test]
    fn test_invalid_inputs() {
        let absent = calculate_notes(None::<f64>).unwrap_err();
        let nan = calculate_notes(f64::NAN).unwrap_err();
        assert!(matches!(absent, WithdrawalError::InvalidArgument(_)));
        assert!(matches!(nan, WithdrawalError::InvalidArgument(_)));
        assert_ne!(absent.to_string(), nan.to_string());

        let negative = calculate_notes(-130.0).unwrap_err();
        assert!(matches!(negative, WithdrawalError::InvalidArgument(_)));
        assert!(negative.to_string().contains("negative"));
        assert!(negative.to_string().contains("-130"));
    }

    #[test]
    fn test_notes_descending_and_contiguous() {
        let notes = calculate_notes(990.0).unwrap();
        assert!(notes.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_greedy_is_optimal_up_to_1000() {
        let table = min_notes_table(1000);
        for (amount, best) in table.iter().enumerate() {
            let result = calculate_notes(amount as f64);
            match best {
                Some(best) => {
                    let notes = result.unwrap_or_else(|e| panic!("{amount}: {e}"));
                    assert_eq!(notes.iter().map(|&n| u64::from(n)).sum::<u64>(), amount as u64);
                    assert_eq!(notes.len() as u64, *best, "not minimal for {amount}");
                }
                None => assert!(
                    matches!(result, Err(WithdrawalError::NoteUnavailable { .. })),
                    "{amount} should be unreachable"
                ),
            }
        }
    }

    #[test]
    fn test_breakdown_matches_notes() {
        let amount = Amount::parse(RawAmount::Number(1_270.0)).unwrap();
        let breakdown = greedy_breakdown(amount).unwrap();
        assert_eq!(breakdown.entries(), &[(100, 12), (50, 1), (20, 1)]);
        assert_eq!(breakdown.total(), 1_270);
        assert_eq!(breakdown.note_count(), 14);
    }
}
