//! Error types for the payment ledger.

use crate::domain::TransactionId;

/// Ledger-level errors (storage failures and invariant violations).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("Transaction not found: {0}")]
    NotFound(TransactionId),

    #[error("Duplicate transaction id: {0}")]
    DuplicateId(TransactionId),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Service-level errors returned to callers of the payment gateway.
///
/// Every variant is a deterministic rejection of the call; nothing here is
/// transient and nothing is worth retrying.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PaymentError {
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),

    #[error(
        "Refund of {requested} exceeds original amount {original} of transaction {transaction_id}"
    )]
    RefundExceedsOriginal {
        transaction_id: TransactionId,
        original: f64,
        requested: f64,
    },

    #[error("Duplicate transaction id: {0}")]
    DuplicateId(TransactionId),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<LedgerError> for PaymentError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound(id) => PaymentError::TransactionNotFound(id),
            LedgerError::DuplicateId(id) => PaymentError::DuplicateId(id),
            LedgerError::Storage(e) => PaymentError::Storage(e),
        }
    }
}
