//! Payment Application Service
//!
//! Enforces the refund rules and computes aggregates over the ledger port.
//! Contains NO storage logic.

use std::collections::HashMap;

use payments_repo::InMemoryLedger;
use payments_types::{
    Account, LedgerSummary, PaymentError, PaymentGateway, Transaction, TransactionId,
    TransactionLedger, normalize_refund_amount,
};

/// Application service for payment operations.
///
/// Generic over `L: TransactionLedger` - the store is injected at
/// construction and lives exactly as long as the service.
pub struct PaymentService<L: TransactionLedger> {
    ledger: L,
}

/// A payment service backed by process memory.
pub type InMemoryPaymentService = PaymentService<InMemoryLedger>;

impl<L: TransactionLedger> PaymentService<L> {
    /// Creates a new payment service over the given ledger.
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    /// Returns a reference to the underlying ledger.
    #[cfg(test)]
    pub(crate) fn ledger(&self) -> &L {
        &self.ledger
    }
}

impl<L: TransactionLedger + Default> Default for PaymentService<L> {
    fn default() -> Self {
        Self::new(L::default())
    }
}

impl<L: TransactionLedger> PaymentGateway for PaymentService<L> {
    #[tracing::instrument(skip(self, payer, payee), fields(payer = %payer.name, payee = %payee.name))]
    fn execute(
        &self,
        payer: Account,
        payee: Account,
        amount: f64,
    ) -> Result<TransactionId, PaymentError> {
        let transaction = Transaction::new(payer, payee, amount);
        let id = transaction.id;
        self.ledger.put(transaction)?;

        tracing::debug!(transaction_id = %id, "transaction recorded");
        Ok(id)
    }

    fn view(&self, id: TransactionId) -> Result<Transaction, PaymentError> {
        self.ledger.get(id).map_err(Into::into)
    }

    #[tracing::instrument(skip(self, id), fields(transaction_id = %id))]
    fn refund(&self, id: TransactionId, amount: f64) -> Result<TransactionId, PaymentError> {
        let original = self.view(id)?;
        let amount = normalize_refund_amount(amount);

        if !original.accepts_refund(amount) {
            tracing::warn!(
                original = original.amount,
                requested = amount,
                "refund rejected"
            );
            return Err(PaymentError::RefundExceedsOriginal {
                transaction_id: id,
                original: original.amount,
                requested: amount,
            });
        }

        // Value flows back: the original payee pays the original payer.
        self.execute(original.payee, original.payer, amount)
    }

    fn cumulative_txn_value(&self) -> Result<f64, PaymentError> {
        Ok(cumulative_value(&self.ledger.values()?))
    }

    fn cumulative_payer_names(&self) -> Result<Vec<String>, PaymentError> {
        Ok(repeated_payer_names(&self.ledger.values()?))
    }

    fn summary(&self) -> Result<LedgerSummary, PaymentError> {
        let transactions = self.ledger.values()?;

        Ok(LedgerSummary {
            transaction_count: transactions.len(),
            cumulative_value: cumulative_value(&transactions),
            cumulative_payer_names: repeated_payer_names(&transactions),
        })
    }
}

/// Kahan compensated sum of every amount, starting from `+0.0`.
///
/// `compensation` holds the low-order bits lost by the last addition.
/// When compensation turns an infinite total into NaN, the plain total wins.
fn cumulative_value(transactions: &[Transaction]) -> f64 {
    let mut sum = 0.0;
    let mut compensation = 0.0;
    let mut plain = 0.0;

    for t in transactions {
        plain += t.amount;
        let corrected = t.amount - compensation;
        let next = sum + corrected;
        compensation = (next - sum) - corrected;
        sum = next;
    }

    let total = sum - compensation;
    if total.is_nan() && plain.is_infinite() {
        plain
    } else {
        total
    }
}

/// Payer names that occur more than once, one entry per occurrence.
fn repeated_payer_names(transactions: &[Transaction]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for t in transactions {
        *counts.entry(t.payer.name.as_str()).or_default() += 1;
    }

    transactions
        .iter()
        .map(|t| t.payer.name.as_str())
        .filter(|name| counts.get(name).is_some_and(|&n| n > 1))
        .map(str::to_owned)
        .collect()
}
