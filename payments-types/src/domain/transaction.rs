//! Transaction domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::Account;

/// Unique identifier for a Transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Creates a new random TransactionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a TransactionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A recorded transfer of value from `payer` to `payee`.
///
/// Transactions are immutable once created. A refund is a new
/// transaction in the opposite direction, never an edit of this one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,
    /// Account funding the transfer
    pub payer: Account,
    /// Account receiving the transfer
    pub payee: Account,
    /// Signed amount; positive means value flows payer -> payee
    pub amount: f64,
    /// When the transaction was recorded
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Creates a new transaction with a fresh identifier.
    ///
    /// The amount is stored as given: zero and negative values are legal.
    pub fn new(payer: Account, payee: Account, amount: f64) -> Self {
        Self {
            id: TransactionId::new(),
            payer,
            payee,
            amount,
            created_at: Utc::now(),
        }
    }

    /// Reconstructs a transaction from stored fields.
    pub fn from_parts(
        id: TransactionId,
        payer: Account,
        payee: Account,
        amount: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            payer,
            payee,
            amount,
            created_at,
        }
    }

    /// Checks a normalized (non-positive) refund amount against this transaction.
    ///
    /// Rejected when the refund magnitude exceeds `self.amount` or the refund
    /// is zero. A negative original is compared with the same formula.
    pub fn accepts_refund(&self, normalized: f64) -> bool {
        !(-normalized > self.amount || normalized == 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn benji() -> Account {
        Account::new("benji", "benji@specto.io")
    }

    fn daniel() -> Account {
        Account::new("daniel", "daniel@specto.io")
    }

    #[test]
    fn test_transaction_creation() {
        let tx = Transaction::new(benji(), daniel(), 4.5);

        assert_eq!(tx.payer, benji());
        assert_eq!(tx.payee, daniel());
        assert_eq!(tx.amount, 4.5);
    }

    #[test]
    fn test_amount_sign_is_kept() {
        let tx = Transaction::new(benji(), daniel(), -3.0);
        assert_eq!(tx.amount, -3.0);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Transaction::new(benji(), daniel(), 1.0);
        let b = Transaction::new(benji(), daniel(), 1.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_id_parse_roundtrip() {
        let id = TransactionId::new();
        let parsed: TransactionId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<TransactionId>().is_err());
    }

    #[test]
    fn test_accepts_refund_within_amount() {
        let tx = Transaction::new(benji(), daniel(), 4.5);
        assert!(tx.accepts_refund(-2.5));
        assert!(tx.accepts_refund(-4.5));
    }

    #[test]
    fn test_rejects_refund_above_amount() {
        let tx = Transaction::new(benji(), daniel(), 4.5);
        assert!(!tx.accepts_refund(-6.5));
    }

    #[test]
    fn test_rejects_zero_refund() {
        let tx = Transaction::new(benji(), daniel(), 4.5);
        assert!(!tx.accepts_refund(0.0));
        assert!(!tx.accepts_refund(-0.0));
    }

    #[test]
    fn test_negative_original_follows_formula() {
        // -(-1.0) = 1.0 > -2.5, so any non-zero refund is rejected.
        let tx = Transaction::new(daniel(), benji(), -2.5);
        assert!(!tx.accepts_refund(-1.0));

        // A zero original rejects every refund too.
        let zero = Transaction::new(daniel(), benji(), 0.0);
        assert!(!zero.accepts_refund(-0.1));
    }

    #[test]
    fn test_serializes_id_as_string() {
        let tx = Transaction::new(benji(), daniel(), 4.5);
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["id"], serde_json::Value::String(tx.id.to_string()));
        assert_eq!(json["payer"]["name"], "benji");
    }
}
