//! Monthly report CLI command

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::config::Settings;
use crate::error::{CashflowError, CashflowResult};
use crate::reports::CashflowReport;

use super::load_store;

/// Handle the report command
pub fn handle_report_command(
    file: &Path,
    output: Option<&Path>,
    settings: &Settings,
) -> CashflowResult<()> {
    let store = load_store(file)?;
    let report = CashflowReport::generate(&store);

    if let Some(path) = output {
        let out = File::create(path).map_err(|e| {
            CashflowError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(out);
        report.export_csv(&mut writer)?;
        println!("Report exported to: {}", path.display());
    } else if report.is_empty() {
        println!("No transactions to report.");
    } else {
        println!("{}", report.format_terminal(&settings.currency_code));
    }

    Ok(())
}
