//! # Payments Types
//!
//! Domain types and port traits for the payment ledger.
//! This crate has ZERO IO dependencies - only data structures,
//! refund rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the **innermost core** of the hexagonal layout:
//! - `domain/` - Pure domain types (Account, Transaction) and refund rules
//! - `ports/` - Traits that the ledger adapter and the service implement
//! - `dto/` - Read-only reports handed to callers
//! - `error/` - Ledger and payment error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Account, Transaction, TransactionId, normalize_refund_amount};
pub use dto::LedgerSummary;
pub use error::{LedgerError, PaymentError};
pub use ports::{PaymentGateway, TransactionLedger};
