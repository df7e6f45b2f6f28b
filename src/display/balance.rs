//! Balance display formatting

use crate::models::Amount;

/// Format the current-balance line.
///
/// Amounts are rounded to two decimals here; the store keeps the raw sum.
pub fn format_balance_line(balance: Amount, symbol: &str, code: &str) -> String {
    format!(
        "Current balance: {} {}",
        balance.rounded().format_with_symbol(symbol),
        code
    )
}
