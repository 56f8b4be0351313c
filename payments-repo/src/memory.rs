//! In-memory ledger adapter.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use payments_types::{LedgerError, Transaction, TransactionId, TransactionLedger};

#[derive(Debug, Default)]
struct Entries {
    /// Position of each record in `ordered`
    index: HashMap<TransactionId, usize>,
    ordered: Vec<Transaction>,
}

/// Insertion-ordered, append-only ledger held in process memory.
///
/// A single `RwLock` guards the index and the ordered records together:
/// one writer at a time, and readers only ever see committed records.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    entries: RwLock<Entries>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Entries>, LedgerError> {
        self.entries
            .read()
            .map_err(|e| LedgerError::Storage(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Entries>, LedgerError> {
        self.entries
            .write()
            .map_err(|e| LedgerError::Storage(e.to_string()))
    }
}

impl TransactionLedger for InMemoryLedger {
    fn put(&self, transaction: Transaction) -> Result<(), LedgerError> {
        let mut entries = self.write()?;
        if entries.index.contains_key(&transaction.id) {
            tracing::error!(transaction_id = %transaction.id, "duplicate transaction id rejected");
            return Err(LedgerError::DuplicateId(transaction.id));
        }

        let position = entries.ordered.len();
        entries.index.insert(transaction.id, position);
        entries.ordered.push(transaction);
        Ok(())
    }

    fn get(&self, id: TransactionId) -> Result<Transaction, LedgerError> {
        let entries = self.read()?;
        entries
            .index
            .get(&id)
            .and_then(|&position| entries.ordered.get(position))
            .cloned()
            .ok_or(LedgerError::NotFound(id))
    }

    fn values(&self) -> Result<Vec<Transaction>, LedgerError> {
        Ok(self.read()?.ordered.clone())
    }

    fn len(&self) -> Result<usize, LedgerError> {
        Ok(self.read()?.ordered.len())
    }
}
