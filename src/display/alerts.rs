//! Expense alert display formatting

use crate::models::round2;
use crate::reports::AlertOutcome;

/// Format an alert outcome for terminal output.
///
/// Each reason tag gets its own message so the user can tell "nothing
/// flagged" apart from "nothing to analyze".
pub fn format_alerts(outcome: &AlertOutcome, threshold: f64, symbol: &str, code: &str) -> String {
    let pct = round2(threshold * 100.0);

    match outcome {
        AlertOutcome::NoData => "No transaction data available for expense alerts.".to_string(),
        AlertOutcome::NoExpenses => "No expenses recorded; nothing to analyze.".to_string(),
        AlertOutcome::NoneExceeded => {
            format!("No category exceeds {}% of total expenses.", pct)
        }
        AlertOutcome::Found(entries) => {
            let name_width = entries
                .iter()
                .map(|e| e.category.len())
                .max()
                .unwrap_or(8)
                .max(8);

            let mut output = String::new();
            output.push_str(&format!(
                "Categories above {}% of total expenses:\n",
                pct
            ));
            for entry in entries {
                output.push_str(&format!(
                    "  {:<name_width$}  {} {}\n",
                    entry.category,
                    entry.total_expense.format_with_symbol(symbol),
                    code,
                    name_width = name_width,
                ));
            }
            output
        }
    }
}
