//! Reports module for cashflow-cli
//!
//! Provides the analytics outputs: monthly cash flow reports with derived
//! ratios, short-horizon trend projections, and expense alerts.

pub mod alerts;
pub mod monthly;
pub mod projection;

pub use alerts::{detect_alerts, AlertEntry, AlertOutcome, DEFAULT_THRESHOLD};
pub use monthly::{aggregate, compute_reports, CashflowReport, MonthlyAggregate, MonthlyReport};
pub use projection::{project, Projection, ProjectionReport, DEFAULT_HORIZON};
