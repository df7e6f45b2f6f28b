//! Expense alert CLI command

use std::path::Path;

use crate::config::Settings;
use crate::display::format_alerts;
use crate::error::CashflowResult;
use crate::reports::detect_alerts;

use super::load_store;

/// Handle the alerts command
pub fn handle_alerts_command(
    file: &Path,
    threshold: Option<f64>,
    settings: &Settings,
) -> CashflowResult<()> {
    let store = load_store(file)?;
    let threshold = threshold.unwrap_or(settings.alert_threshold);
    let outcome = detect_alerts(&store, threshold);

    println!(
        "{}",
        format_alerts(
            &outcome,
            threshold,
            &settings.currency_symbol,
            &settings.currency_code,
        )
    );

    Ok(())
}
