//! # Payments Hex
//!
//! Application service layer for the payment ledger.
//!
//! The service is generic over `L: TransactionLedger`, allowing
//! different ledger implementations to be injected. Callers program
//! against the `PaymentGateway` port.

pub mod service;


pub use service::{InMemoryPaymentService, PaymentService};
