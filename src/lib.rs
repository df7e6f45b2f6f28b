//! cashflow-cli - Terminal cash-flow analytics for transaction ledgers
//!
//! This library provides the core functionality for cashflow-cli: it loads a
//! transaction CSV into an immutable snapshot, aggregates it by calendar
//! month, derives per-month health metrics (net flow, burn rate, liquidity,
//! profitability, cash runway), fits a linear trend for income and expense
//! projections, flags expense-heavy categories, and simulates hypothetical
//! transactions against the current balance.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, periods, amounts)
//! - `store`: The loaded transaction snapshot
//! - `reports`: Monthly report, projection, and alert generation
//! - `services`: CSV ingestion and what-if simulation
//! - `display`: Terminal formatting helpers
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use cashflow_cli::services::read_csv_file;
//! use cashflow_cli::store::TransactionStore;
//!
//! let records = read_csv_file(path)?;
//! let mut store = TransactionStore::new();
//! store.load(&records)?;
//! println!("{}", store.current_balance());
//! ```

use std::sync::Once;

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod store;

pub use error::{CashflowError, CashflowResult};

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("cashflow_cli=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}
