//! Expense Alerts
//!
//! Flags expense categories whose total exceeds a share of all recorded
//! expenses. The outcome carries a reason tag so the presentation layer can
//! message the empty cases distinctly.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{Amount, TransactionKind};
use crate::store::TransactionStore;

/// Default share-of-total threshold (a category exceeding 20% is flagged)
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// An expense category flagged by the detector
#[derive(Debug, Clone, PartialEq)]
pub struct AlertEntry {
    /// Category name
    pub category: String,
    /// Total expense recorded against the category
    pub total_expense: Amount,
}

/// Outcome of alert detection
#[derive(Debug, Clone, PartialEq)]
pub enum AlertOutcome {
    /// The store has no transactions, or no record carries a category at
    /// all (the input schema omits the field, so detection is inapplicable)
    NoData,
    /// Transactions exist but none are expenses
    NoExpenses,
    /// Expenses exist but no category strictly exceeds the threshold
    NoneExceeded,
    /// Flagged categories, largest total first
    Found(Vec<AlertEntry>),
}

/// Flag expense categories whose total strictly exceeds
/// `threshold * grand_total_expense`.
///
/// The grand total sums every expense transaction; expenses without a
/// category count toward it but are excluded from the per-category grouping.
/// That exclusion is a known gap: uncategorized spending is never merged
/// into a synthetic bucket, so it can only ever raise the bar for the
/// categories that are present. Flagged entries are ordered by descending
/// total, ties broken by category name.
pub fn detect_alerts(store: &TransactionStore, threshold: f64) -> AlertOutcome {
    if store.is_empty() {
        return AlertOutcome::NoData;
    }

    let expenses: Vec<_> = store
        .transactions()
        .iter()
        .filter(|tx| tx.kind == Some(TransactionKind::Expense))
        .collect();
    if expenses.is_empty() {
        return AlertOutcome::NoExpenses;
    }

    if store.transactions().iter().all(|tx| tx.category.is_none()) {
        return AlertOutcome::NoData;
    }

    let grand_total: Amount = expenses.iter().map(|tx| tx.amount).sum();

    let mut category_totals: HashMap<&str, Amount> = HashMap::new();
    for tx in &expenses {
        if let Some(category) = tx.category.as_deref() {
            *category_totals.entry(category).or_insert(Amount::zero()) += tx.amount;
        }
    }

    let mut entries: Vec<AlertEntry> = category_totals
        .into_iter()
        .filter(|(_, total)| total.value() > threshold * grand_total.value())
        .map(|(category, total)| AlertEntry {
            category: category.to_string(),
            total_expense: total,
        })
        .collect();

    if entries.is_empty() {
        return AlertOutcome::NoneExceeded;
    }

    entries.sort_by(|a, b| {
        b.total_expense
            .value()
            .total_cmp(&a.total_expense.value())
            .then_with(|| a.category.cmp(&b.category))
    });
    debug!("alert detection flagged {} categories", entries.len());
    AlertOutcome::Found(entries)
}
