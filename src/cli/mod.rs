//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the analysis engine. Every command starts
//! from a transaction CSV given on the command line; nothing is persisted
//! between runs except user settings.

use std::path::Path;

use crate::error::CashflowResult;
use crate::services::read_csv_file;
use crate::store::TransactionStore;

pub mod alerts;
pub mod balance;
pub mod project;
pub mod report;
pub mod simulate;

pub use alerts::handle_alerts_command;
pub use balance::handle_balance_command;
pub use project::handle_project_command;
pub use report::handle_report_command;
pub use simulate::handle_simulate_command;

/// Read a transaction CSV and load it into a fresh store
pub(crate) fn load_store(path: &Path) -> CashflowResult<TransactionStore> {
    let records = read_csv_file(path)?;
    let mut store = TransactionStore::new();
    store.load(&records)?;
    Ok(store)
}
