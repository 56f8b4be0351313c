//! Port traits (interfaces for adapters).
//!
//! The service depends on `TransactionLedger`, not on a concrete store.
//! Callers depend on `PaymentGateway`, not on a concrete service.

mod gateway;
mod ledger;

pub use gateway::PaymentGateway;
pub use ledger::TransactionLedger;
