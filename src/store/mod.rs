//! In-memory transaction snapshot
//!
//! Holds the current immutable snapshot of normalized transactions. A load
//! replaces the snapshot wholesale: records are parsed into a fresh vector
//! first and the field is assigned only once every record has parsed, so a
//! failed load leaves the previous snapshot untouched and readers never see
//! a partially-updated set.

use tracing::debug;

use crate::error::LoadError;
use crate::models::{Amount, RawRecord, Transaction, TransactionKind};

/// The current snapshot of parsed, normalized transactions
#[derive(Debug, Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
        }
    }

    /// Replace the snapshot with the given raw records.
    ///
    /// Dates are strict: a record whose date is missing or unparseable fails
    /// the whole load with [`LoadError::InvalidSchema`] and the prior
    /// snapshot stays in place. Amounts and kinds are normalized lossily
    /// (see [`Transaction::from_record`]); neither can fail a load.
    pub fn load(&mut self, records: &[RawRecord]) -> Result<(), LoadError> {
        let mut next = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let tx = Transaction::from_record(record)
                .map_err(|reason| LoadError::invalid_schema(index, reason))?;
            next.push(tx);
        }

        debug!("snapshot replaced: {} transactions", next.len());
        self.transactions = next;
        Ok(())
    }

    /// The current snapshot, in load order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Whether the store holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Number of transactions in the snapshot
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Total income minus total expense over the full snapshot.
    ///
    /// Rows whose kind is neither income nor expense contribute nothing.
    /// Returns zero for an empty store.
    pub fn current_balance(&self) -> Amount {
        let mut balance = Amount::zero();
        for tx in &self.transactions {
            match tx.kind {
                Some(TransactionKind::Income) => balance += tx.amount,
                Some(TransactionKind::Expense) => balance -= tx.amount,
                None => {}
            }
        }
        balance
    }
}
