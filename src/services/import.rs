//! CSV ingestion service
//!
//! Reads transaction CSV files into raw records, resolving column positions
//! from the header row. Both the Spanish column names of the legacy exports
//! (`fecha`, `monto`, `tipo`, `categoria`) and their English equivalents are
//! accepted. The records come out as untouched strings; normalization and
//! coercion happen when the store loads them.

use std::path::Path;

use csv::{Reader, StringRecord};
use tracing::{debug, info};

use crate::error::{CashflowError, CashflowResult};
use crate::models::RawRecord;

/// Resolved column positions for a transaction CSV
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Index of the date column
    pub date_column: usize,
    /// Index of the amount column
    pub amount_column: usize,
    /// Index of the transaction kind column
    pub kind_column: usize,
    /// Index of the category column, when present
    pub category_column: Option<usize>,
}

impl ColumnMapping {
    /// Resolve column positions from a header row.
    ///
    /// Header names are matched case-insensitively after trimming; the first
    /// occurrence of each name wins. Date, amount and kind columns are
    /// required, category is optional.
    pub fn detect_from_headers(headers: &StringRecord) -> CashflowResult<Self> {
        let mut date_column = None;
        let mut amount_column = None;
        let mut kind_column = None;
        let mut category_column = None;

        for (idx, header) in headers.iter().enumerate() {
            let name = header.trim().to_lowercase();
            match name.as_str() {
                "fecha" | "date" => {
                    if date_column.is_none() {
                        date_column = Some(idx);
                    }
                }
                "monto" | "amount" => {
                    if amount_column.is_none() {
                        amount_column = Some(idx);
                    }
                }
                "tipo" | "type" | "kind" => {
                    if kind_column.is_none() {
                        kind_column = Some(idx);
                    }
                }
                "categoria" | "categoría" | "category" => {
                    if category_column.is_none() {
                        category_column = Some(idx);
                    }
                }
                _ => {}
            }
        }

        match (date_column, amount_column, kind_column) {
            (Some(date_column), Some(amount_column), Some(kind_column)) => Ok(Self {
                date_column,
                amount_column,
                kind_column,
                category_column,
            }),
            _ => Err(CashflowError::Import(
                "file must contain the columns: fecha, monto, tipo (or date, amount, type)"
                    .to_string(),
            )),
        }
    }

    /// Extract a raw record from a CSV data row.
    ///
    /// Fields beyond the end of a short row read as empty strings; the
    /// loader's field policies decide what that means.
    fn extract(&self, record: &StringRecord) -> RawRecord {
        let field = |col: usize| record.get(col).unwrap_or("").to_string();

        let mut raw = RawRecord::new(
            field(self.date_column),
            field(self.amount_column),
            field(self.kind_column),
        );
        if let Some(col) = self.category_column {
            if let Some(value) = record.get(col) {
                raw = raw.with_category(value);
            }
        }
        raw
    }
}

/// Read raw records from an open CSV reader.
///
/// The reader must be configured with headers enabled (the default); the
/// header row determines the column mapping.
pub fn read_records_from_reader<R: std::io::Read>(
    reader: &mut Reader<R>,
) -> CashflowResult<Vec<RawRecord>> {
    let headers = reader.headers()?.clone();
    let mapping = ColumnMapping::detect_from_headers(&headers)?;
    debug!("detected column mapping: {:?}", mapping);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        records.push(mapping.extract(&record));
    }
    Ok(records)
}

/// Read raw records from a transaction CSV file on disk.
pub fn read_csv_file(path: &Path) -> CashflowResult<Vec<RawRecord>> {
    let mut reader = Reader::from_path(path)?;
    let records = read_records_from_reader(&mut reader)?;
    info!("read {} records from {}", records.len(), path.display());
    Ok(records)
}
