//! Balance CLI command

use std::path::Path;

use crate::config::Settings;
use crate::display::format_balance_line;
use crate::error::CashflowResult;

use super::load_store;

/// Handle the balance command
pub fn handle_balance_command(file: &Path, settings: &Settings) -> CashflowResult<()> {
    let store = load_store(file)?;

    println!(
        "{}",
        format_balance_line(
            store.current_balance(),
            &settings.currency_symbol,
            &settings.currency_code,
        )
    );

    Ok(())
}
