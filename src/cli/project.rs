//! Projection CLI command

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::config::Settings;
use crate::error::{CashflowError, CashflowResult};
use crate::reports::ProjectionReport;

use super::load_store;

/// Handle the project command
pub fn handle_project_command(
    file: &Path,
    horizon: Option<usize>,
    output: Option<&Path>,
    settings: &Settings,
) -> CashflowResult<()> {
    let store = load_store(file)?;
    let horizon = horizon.unwrap_or(settings.projection_horizon);
    let report = ProjectionReport::generate(&store, horizon)?;

    if let Some(path) = output {
        let out = File::create(path).map_err(|e| {
            CashflowError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(out);
        report.export_csv(&mut writer)?;
        println!("Projection exported to: {}", path.display());
    } else {
        println!("{}", report.format_terminal(&settings.currency_code));
    }

    Ok(())
}
