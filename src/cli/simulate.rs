//! What-if simulation CLI command

use std::path::Path;

use crate::config::Settings;
use crate::display::format_simulation;
use crate::error::CashflowResult;
use crate::services::simulate;

use super::load_store;

/// Handle the simulate command
pub fn handle_simulate_command(
    file: &Path,
    amount: f64,
    kind: &str,
    settings: &Settings,
) -> CashflowResult<()> {
    let store = load_store(file)?;
    let result = simulate(&store, amount, kind)?;

    print!(
        "{}",
        format_simulation(&result, &settings.currency_symbol, &settings.currency_code)
    );

    Ok(())
}
