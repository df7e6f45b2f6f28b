//! Transaction model
//!
//! Represents a single normalized ledger row plus the raw record shape the
//! input boundary delivers before normalization.

use chrono::NaiveDate;
use std::fmt;

use super::amount::Amount;
use super::period::Period;

/// Date formats accepted for the raw date field, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%Y/%m/%d",
    "%m-%d-%Y",
    "%d-%m-%Y",
];

/// Kind of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl TransactionKind {
    /// Parse a raw kind string, normalizing case and surrounding whitespace.
    ///
    /// Accepts the English names and their Spanish ledger equivalents
    /// ("ingreso"/"gasto"). Returns `None` for anything else; such rows are
    /// excluded from totals rather than rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "ingreso" => Some(Self::Income),
            "expense" | "gasto" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A raw transaction record as delivered by the input boundary.
///
/// Fields are unparsed strings; the store normalizes them on load.
#[derive(Debug, Clone)]
pub struct RawRecord {
    /// Date field, must parse to a calendar date
    pub date: String,

    /// Amount field; unparseable values are coerced to zero
    pub amount: String,

    /// Type field; normalized to lowercase/trimmed
    pub kind: String,

    /// Category field (optional)
    pub category: Option<String>,
}

impl RawRecord {
    /// Create a raw record without a category
    pub fn new(
        date: impl Into<String>,
        amount: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            amount: amount.into(),
            kind: kind.into(),
            category: None,
        }
    }

    /// Attach a category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// A normalized financial transaction
#[derive(Debug, Clone)]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,

    /// Amount, already coerced to a finite number
    pub amount: Amount,

    /// Kind; `None` when the source row's type is neither income nor
    /// expense. Such rows still mark their period as present in reports
    /// but contribute to no totals.
    pub kind: Option<TransactionKind>,

    /// Expense category (optional)
    pub category: Option<String>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(date: NaiveDate, amount: Amount, kind: Option<TransactionKind>) -> Self {
        Self {
            date,
            amount,
            kind,
            category: None,
        }
    }

    /// Attach a category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Normalize a raw record into a transaction.
    ///
    /// Only the date is strict; the error string names the failing field so
    /// the loader can report which record broke the schema. Amount and kind
    /// follow the lossy policies of [`Amount::parse_lossy`] and
    /// [`TransactionKind::parse`]; a blank category becomes `None`.
    pub fn from_record(record: &RawRecord) -> Result<Self, String> {
        let date = parse_date(&record.date)?;
        let category = record
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from);

        Ok(Self {
            date,
            amount: Amount::parse_lossy(&record.amount),
            kind: TransactionKind::parse(&record.kind),
            category,
        })
    }

    /// The period this transaction falls in
    pub fn period(&self) -> Period {
        Period::from_date(self.date)
    }
}

/// Parse a date string against the accepted formats, in order.
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("date field is empty".to_string());
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date);
        }
    }

    Err(format!("unparseable date '{}'", s))
}
