//! Monthly Cash Flow Report
//!
//! Groups the transaction snapshot by calendar month and derives the flow
//! metrics for each period: net flow, cumulative flow, burn rate, liquidity,
//! profitability, and cash runway.

use std::collections::HashMap;
use std::io::Write;

use tracing::debug;

use crate::error::{CashflowError, CashflowResult};
use crate::models::{round2, Amount, Period, TransactionKind};
use crate::store::TransactionStore;

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAggregate {
    /// The calendar month
    pub period: Period,
    /// Sum of income amounts in the period
    pub income_total: Amount,
    /// Sum of expense amounts in the period
    pub expense_total: Amount,
}

/// One report row: a monthly aggregate plus its derived metrics.
///
/// All fields are rounded to two decimals; they are presentation-ready.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    /// The calendar month
    pub period: Period,
    /// Sum of income amounts in the period
    pub income_total: Amount,
    /// Sum of expense amounts in the period
    pub expense_total: Amount,
    /// `income_total - expense_total`
    pub net_flow: Amount,
    /// Running sum of net flow up to and including this period
    pub cumulative_flow: Amount,
    /// `expense_total / guarded(income_total)`
    pub burn_rate: f64,
    /// `income_total / guarded(expense_total)`
    pub liquidity: f64,
    /// `100 * net_flow / guarded(income_total)`
    pub profitability_pct: f64,
    /// `cumulative_flow / (guarded(expense_total) / 30)`
    pub cash_runway_days: f64,
}

/// Substitute 1 for a zero denominator.
///
/// This is division-by-zero avoidance, not a statistical correction: the
/// numerator is never substituted, so a month with zero income reports a
/// burn rate of `expense / 1` (the raw expense figure), not infinity, and a
/// month with zero expense reports a liquidity of `income / 1`. Callers must
/// not "fix" these values; they are the defined policy.
fn guarded(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        x
    }
}

/// Group the snapshot into per-month income/expense totals, sorted
/// chronologically.
///
/// A month whose transactions are all of one kind gets 0 for the other
/// total. Rows with an unrecognized kind contribute to no total but still
/// mark their month as present. An empty store yields an empty vector;
/// callers treat that as "no report available", not as an error.
pub fn aggregate(store: &TransactionStore) -> Vec<MonthlyAggregate> {
    let mut totals: HashMap<Period, (Amount, Amount)> = HashMap::new();

    for tx in store.transactions() {
        let entry = totals
            .entry(tx.period())
            .or_insert((Amount::zero(), Amount::zero()));
        match tx.kind {
            Some(TransactionKind::Income) => entry.0 += tx.amount,
            Some(TransactionKind::Expense) => entry.1 += tx.amount,
            None => {}
        }
    }

    let mut aggregates: Vec<MonthlyAggregate> = totals
        .into_iter()
        .map(|(period, (income_total, expense_total))| MonthlyAggregate {
            period,
            income_total,
            expense_total,
        })
        .collect();
    aggregates.sort_by_key(|a| a.period);
    aggregates
}

/// Derive the report rows from a chronologically ordered aggregate sequence.
///
/// Pure function: same input, same output. Accumulation runs on unrounded
/// values; each output field is rounded to two decimals exactly once, when
/// its row is built.
pub fn compute_reports(aggregates: &[MonthlyAggregate]) -> Vec<MonthlyReport> {
    let mut cumulative = 0.0;

    aggregates
        .iter()
        .map(|agg| {
            let income = agg.income_total.value();
            let expense = agg.expense_total.value();
            let net = income - expense;
            cumulative += net;

            MonthlyReport {
                period: agg.period,
                income_total: agg.income_total.rounded(),
                expense_total: agg.expense_total.rounded(),
                net_flow: Amount::new(round2(net)),
                cumulative_flow: Amount::new(round2(cumulative)),
                burn_rate: round2(expense / guarded(income)),
                liquidity: round2(income / guarded(expense)),
                profitability_pct: round2(100.0 * net / guarded(income)),
                cash_runway_days: round2(cumulative / (guarded(expense) / 30.0)),
            }
        })
        .collect()
}

/// Monthly cash flow report over the full snapshot
#[derive(Debug, Clone)]
pub struct CashflowReport {
    /// Report rows in chronological order
    pub rows: Vec<MonthlyReport>,
}

impl CashflowReport {
    /// Generate the report for the current snapshot
    pub fn generate(store: &TransactionStore) -> Self {
        let aggregates = aggregate(store);
        let rows = compute_reports(&aggregates);
        debug!("monthly report generated: {} rows", rows.len());
        Self { rows }
    }

    /// Whether there is nothing to report on
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Monthly Cash Flow Report\n");
        output.push_str(&"=".repeat(120));
        output.push('\n');

        output.push_str(&format!(
            "{:<15} {:>13} {:>13} {:>13} {:>13} {:>10} {:>10} {:>11} {:>14}\n",
            "Period",
            format!("Income ({})", currency),
            format!("Expense ({})", currency),
            "Net Flow",
            "Cumulative",
            "Burn Rate",
            "Liquidity",
            "Profit (%)",
            "Runway (days)"
        ));
        output.push_str(&"-".repeat(120));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<15} {:>13} {:>13} {:>13} {:>13} {:>10.2} {:>10.2} {:>11.2} {:>14.2}\n",
                row.period.label(),
                row.income_total,
                row.expense_total,
                row.net_flow,
                row.cumulative_flow,
                row.burn_rate,
                row.liquidity,
                row.profitability_pct,
                row.cash_runway_days
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> CashflowResult<()> {
        writeln!(
            writer,
            "Period,Income,Expense,Net Flow,Cumulative Flow,Burn Rate,Liquidity,Profitability %,Cash Runway Days"
        )
        .map_err(|e| CashflowError::Export(e.to_string()))?;

        for row in &self.rows {
            writeln!(
                writer,
                "{},{},{},{},{},{:.2},{:.2},{:.2},{:.2}",
                row.period,
                row.income_total,
                row.expense_total,
                row.net_flow,
                row.cumulative_flow,
                row.burn_rate,
                row.liquidity,
                row.profitability_pct,
                row.cash_runway_days
            )
            .map_err(|e| CashflowError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
