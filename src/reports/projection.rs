//! Cash Flow Projection
//!
//! Fits an ordinary-least-squares line to the monthly income and expense
//! series independently and extrapolates both over a short horizon. Future
//! periods are labeled with sequential indices, not calendar months.

use std::io::Write;

use tracing::debug;

use crate::error::{CashflowError, CashflowResult, ProjectionError};
use crate::models::{round2, Amount};
use crate::reports::monthly::{aggregate, MonthlyAggregate};
use crate::store::TransactionStore;

/// Default number of future periods to project
pub const DEFAULT_HORIZON: usize = 4;

/// Projected totals for one future period
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// 1-based future period index ("Month 1" is the first period after the
    /// data ends); not tied to a calendar month
    pub future_index: usize,
    /// Projected income total for that period
    pub projected_income: Amount,
    /// Projected expense total for that period
    pub projected_expense: Amount,
}

/// Slope and intercept of a fitted line `y = intercept + slope * x`
#[derive(Debug, Clone, Copy)]
struct LinearFit {
    slope: f64,
    intercept: f64,
}

impl LinearFit {
    fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fit a least-squares line over `x = 0..values.len()`.
///
/// The degenerate cases are defined, not left to a division by zero: with a
/// single point (or zero variance in x) the fit is a flat line through the
/// mean, so extrapolation repeats the only observed value.
fn fit_line(values: &[f64]) -> LinearFit {
    let n = values.len();
    if n < 2 {
        return LinearFit {
            slope: 0.0,
            intercept: values.first().copied().unwrap_or(0.0),
        };
    }

    let n_f = n as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let denominator = n_f * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return LinearFit {
            slope: 0.0,
            intercept: sum_y / n_f,
        };
    }

    let slope = (n_f * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n_f;
    LinearFit { slope, intercept }
}

/// Extrapolate the income and expense series over the next `horizon`
/// periods.
///
/// The series are indexed 0..M-1 in the chronological order of `aggregates`;
/// a period missing one kind contributes 0 to that series. Projected values
/// may go negative when the trend is declining; they are reported as-is.
/// Fails with [`ProjectionError::InsufficientData`] only when there are no
/// aggregates at all (empty store); a single period of data projects a flat
/// line.
pub fn project(
    aggregates: &[MonthlyAggregate],
    horizon: usize,
) -> Result<Vec<Projection>, ProjectionError> {
    if aggregates.is_empty() {
        return Err(ProjectionError::InsufficientData);
    }

    let income_series: Vec<f64> = aggregates.iter().map(|a| a.income_total.value()).collect();
    let expense_series: Vec<f64> = aggregates.iter().map(|a| a.expense_total.value()).collect();

    let income_fit = fit_line(&income_series);
    let expense_fit = fit_line(&expense_series);

    let m = aggregates.len();
    let projections = (0..horizon)
        .map(|offset| {
            let x = (m + offset) as f64;
            Projection {
                future_index: offset + 1,
                projected_income: Amount::new(round2(income_fit.predict(x))),
                projected_expense: Amount::new(round2(expense_fit.predict(x))),
            }
        })
        .collect();

    Ok(projections)
}

/// Short-horizon cash flow forecast
#[derive(Debug, Clone)]
pub struct ProjectionReport {
    /// Projected periods in order, future index 1 first
    pub entries: Vec<Projection>,
}

impl ProjectionReport {
    /// Generate the forecast for the current snapshot
    pub fn generate(
        store: &TransactionStore,
        horizon: usize,
    ) -> Result<Self, ProjectionError> {
        let aggregates = aggregate(store);
        let entries = project(&aggregates, horizon)?;
        debug!(
            "projection generated: {} periods from {} months of data",
            entries.len(),
            aggregates.len()
        );
        Ok(Self { entries })
    }

    /// Format the forecast for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Cash Flow Projection\n");
        output.push_str(&"=".repeat(64));
        output.push('\n');

        output.push_str(&format!(
            "{:<14} {:>23} {:>24}\n",
            "Future Month",
            format!("Estimated Income ({})", currency),
            format!("Estimated Expense ({})", currency)
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for entry in &self.entries {
            output.push_str(&format!(
                "{:<14} {:>23} {:>24}\n",
                format!("Month {}", entry.future_index),
                entry.projected_income,
                entry.projected_expense
            ));
        }

        output
    }

    /// Export the forecast to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> CashflowResult<()> {
        writeln!(writer, "Future Period,Projected Income,Projected Expense")
            .map_err(|e| CashflowError::Export(e.to_string()))?;

        for entry in &self.entries {
            writeln!(
                writer,
                "{},{},{}",
                entry.future_index, entry.projected_income, entry.projected_expense
            )
            .map_err(|e| CashflowError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
