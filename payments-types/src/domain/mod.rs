//! Domain models for the payment ledger.

pub mod account;
pub mod refund;
pub mod transaction;

pub use account::Account;
pub use refund::normalize_refund_amount;
pub use transaction::{Transaction, TransactionId};
