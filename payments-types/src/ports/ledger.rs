//! Ledger port trait.
//!
//! Adapters (in-memory today) implement this trait.

use crate::domain::{Transaction, TransactionId};
use crate::error::LedgerError;

/// Append-only, insertion-ordered store of transactions.
///
/// Implementations MUST apply one insert at a time and MUST NOT expose a
/// partially inserted record to readers.
pub trait TransactionLedger: Send + Sync + 'static {
    /// Inserts a new record. Rejects an identifier that is already present.
    fn put(&self, transaction: Transaction) -> Result<(), LedgerError>;

    /// Gets a record by identifier.
    fn get(&self, id: TransactionId) -> Result<Transaction, LedgerError>;

    /// Returns every record in insertion order.
    fn values(&self) -> Result<Vec<Transaction>, LedgerError>;

    /// Number of records.
    fn len(&self) -> Result<usize, LedgerError>;

    /// Whether the ledger holds no records.
    fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.len()? == 0)
    }
}
