//! Payment gateway port trait.

use crate::domain::{Account, Transaction, TransactionId};
use crate::dto::LedgerSummary;
use crate::error::PaymentError;

/// The operations callers may perform against a payment ledger.
pub trait PaymentGateway {
    /// Records a transfer of `amount` from `payer` to `payee`.
    ///
    /// No validation is applied: zero and negative amounts are recorded as-is.
    fn execute(
        &self,
        payer: Account,
        payee: Account,
        amount: f64,
    ) -> Result<TransactionId, PaymentError>;

    /// Retrieves a transaction.
    fn view(&self, id: TransactionId) -> Result<Transaction, PaymentError>;

    /// Refunds part or all of a transaction as a new, reversed transaction.
    ///
    /// `amount` may be given as a positive or negative value.
    fn refund(&self, id: TransactionId, amount: f64) -> Result<TransactionId, PaymentError>;

    /// Sum of every amount in the ledger, refunds included.
    fn cumulative_txn_value(&self) -> Result<f64, PaymentError>;

    /// Payer names occurring on more than one record, one entry per occurrence,
    /// in insertion order.
    fn cumulative_payer_names(&self) -> Result<Vec<String>, PaymentError>;

    /// All aggregates at once.
    fn summary(&self) -> Result<LedgerSummary, PaymentError>;
}
