//! Core data models for cashflow-cli
//!
//! This module contains the data structures that represent the ledger
//! domain: amounts, periods, and transactions in raw and normalized form.

pub mod amount;
pub mod period;
pub mod transaction;

pub use amount::{round2, Amount};
pub use period::Period;
pub use transaction::{RawRecord, Transaction, TransactionKind};
