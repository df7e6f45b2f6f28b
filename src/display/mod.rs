//! Display formatting for terminal output
//!
//! Formats engine results for the terminal. Report tables carry their own
//! `format_terminal` methods; the helpers here cover the line-oriented
//! outputs (balance, simulation summary, alerts).

pub mod alerts;
pub mod balance;
pub mod simulation;

pub use alerts::format_alerts;
pub use balance::format_balance_line;
pub use simulation::format_simulation;
