//! Custom error types for cashflow-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The engine-level groups (`LoadError`,
//! `ProjectionError`, `SimError`) are kept as separate enums so callers can
//! match on exactly the failures an operation can produce; `CashflowError`
//! unifies them with the I/O-level failures of the CLI surface.

use thiserror::Error;

/// Errors raised while loading a new transaction snapshot.
///
/// A failed load leaves the previous snapshot untouched.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A required field is missing or unparseable for some record.
    ///
    /// Only dates are strict: a bad amount is coerced to zero and a bad
    /// kind is excluded from aggregates, neither of which fails the load.
    #[error("Invalid input schema: {0}")]
    InvalidSchema(String),
}

impl LoadError {
    /// Create an `InvalidSchema` error for a record index and reason.
    pub fn invalid_schema(record: usize, reason: impl Into<String>) -> Self {
        Self::InvalidSchema(format!("record {}: {}", record, reason.into()))
    }
}

/// Errors raised by trend projection.
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// The transaction store is empty; there is nothing to fit a trend to.
    #[error("Insufficient data: no transactions loaded")]
    InsufficientData,
}

/// Errors raised by the what-if simulator.
#[derive(Error, Debug)]
pub enum SimError {
    /// The transaction kind is neither income nor expense.
    #[error("Invalid transaction kind '{0}': expected 'income' or 'expense'")]
    InvalidKind(String),
}

/// The main error type for cashflow-cli operations
#[derive(Error, Debug)]
pub enum CashflowError {
    /// Snapshot load failures
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Trend projection failures
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// Simulation failures
    #[error(transparent)]
    Simulation(#[from] SimError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Import errors (malformed input file shape)
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl CashflowError {
    /// Check if this wraps a projection `InsufficientData` failure
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::Projection(ProjectionError::InsufficientData))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CashflowError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CashflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for CashflowError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for cashflow-cli operations
pub type CashflowResult<T> = Result<T, CashflowError>;
