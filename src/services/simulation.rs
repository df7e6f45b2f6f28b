//! What-if transaction simulator
//!
//! Answers "what would the balance be if this transaction happened" without
//! touching the loaded snapshot. The store is read, never written.

use tracing::debug;

use crate::error::SimError;
use crate::models::{round2, Amount, TransactionKind};
use crate::store::TransactionStore;

/// Outcome of simulating a single hypothetical transaction
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Balance over the loaded snapshot, before the hypothetical
    pub balance_before: Amount,
    /// Balance after applying the hypothetical
    pub balance_after: Amount,
    /// The kind the input resolved to
    pub kind: TransactionKind,
    /// The hypothetical amount
    pub amount: Amount,
    /// Signed balance change (positive for income, negative for expense)
    pub delta: Amount,
}

/// Simulate a hypothetical transaction against the current balance.
///
/// The kind string is normalized the same way ingestion normalizes it, but
/// here an unrecognized value is an error rather than an exclusion: there is
/// no row to fall back on. All reported fields are rounded to two decimals;
/// the arithmetic itself runs unrounded.
pub fn simulate(
    store: &TransactionStore,
    amount: f64,
    kind: &str,
) -> Result<SimulationResult, SimError> {
    let parsed =
        TransactionKind::parse(kind).ok_or_else(|| SimError::InvalidKind(kind.to_string()))?;

    let before = store.current_balance().value();
    let delta = match parsed {
        TransactionKind::Income => amount,
        TransactionKind::Expense => -amount,
    };
    let after = before + delta;
    debug!("simulated {} of {}: balance {} -> {}", parsed, amount, before, after);

    Ok(SimulationResult {
        balance_before: Amount::new(round2(before)),
        balance_after: Amount::new(round2(after)),
        kind: parsed,
        amount: Amount::new(round2(amount)),
        delta: Amount::new(round2(delta)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawRecord;

    fn store_from(records: &[RawRecord]) -> TransactionStore {
        let mut store = TransactionStore::new();
        store.load(records).unwrap();
        store
    }

    #[test]
    fn test_simulate_expense_lowers_balance() {
        let store = store_from(&[RawRecord::new("2024-01-05", "100", "income")]);

        let result = simulate(&store, 30.0, "expense").unwrap();
        assert_eq!(result.balance_before, Amount::new(100.0));
        assert_eq!(result.balance_after, Amount::new(70.0));
        assert_eq!(result.kind, TransactionKind::Expense);
        assert_eq!(result.amount, Amount::new(30.0));
        assert_eq!(result.delta, Amount::new(-30.0));
    }

    #[test]
    fn test_simulate_income_raises_balance() {
        let store = store_from(&[RawRecord::new("2024-01-05", "100", "income")]);

        let result = simulate(&store, 50.0, "income").unwrap();
        assert_eq!(result.balance_after, Amount::new(150.0));
        assert_eq!(result.delta, Amount::new(50.0));
    }

    #[test]
    fn test_unrecognized_kind_is_rejected() {
        let store = store_from(&[RawRecord::new("2024-01-05", "100", "income")]);

        let err = simulate(&store, 10.0, "Depósito").unwrap_err();
        assert!(matches!(err, SimError::InvalidKind(_)));
        assert!(err.to_string().contains("Depósito"));
    }

    #[test]
    fn test_kind_is_normalized_before_matching() {
        let store = store_from(&[RawRecord::new("2024-01-05", "100", "income")]);

        let result = simulate(&store, 10.0, "  GASTO ").unwrap();
        assert_eq!(result.kind, TransactionKind::Expense);
        assert_eq!(result.balance_after, Amount::new(90.0));
    }

    #[test]
    fn test_empty_store_simulates_from_zero() {
        let store = TransactionStore::new();

        let result = simulate(&store, 25.0, "expense").unwrap();
        assert_eq!(result.balance_before, Amount::zero());
        assert_eq!(result.balance_after, Amount::new(-25.0));
    }

    #[test]
    fn test_reported_fields_are_rounded() {
        let store = store_from(&[RawRecord::new("2024-01-05", "33.333", "income")]);

        let result = simulate(&store, 33.333, "expense").unwrap();
        assert_eq!(result.balance_before, Amount::new(33.33));
        assert_eq!(result.delta, Amount::new(-33.33));
        assert_eq!(result.balance_after, Amount::zero());
    }
}
