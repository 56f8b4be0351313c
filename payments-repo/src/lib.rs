//! # Payments Repository
//!
//! Ledger adapters for the payment service.
//! This crate provides stores that implement the `TransactionLedger` port.

pub mod memory;


pub use memory::InMemoryLedger;
