//! Simulation display formatting
//!
//! Renders a what-if result as a small detail view, one field per line.

use crate::services::SimulationResult;

/// Format a simulation outcome for terminal output
pub fn format_simulation(result: &SimulationResult, symbol: &str, code: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Current balance:   {} {}\n",
        result.balance_before.format_with_symbol(symbol),
        code
    ));
    output.push_str(&format!("Simulated kind:    {}\n", result.kind));
    output.push_str(&format!(
        "Simulated amount:  {} {}\n",
        result.amount.format_with_symbol(symbol),
        code
    ));
    output.push_str(&format!(
        "Resulting balance: {} {}\n",
        result.balance_after.format_with_symbol(symbol),
        code
    ));
    output.push_str(&format!(
        "Difference:        {} {}\n",
        result.delta.format_with_symbol(symbol),
        code
    ));

    output
}
