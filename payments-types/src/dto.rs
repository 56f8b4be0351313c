//! Read-only reports handed across the service boundary.

use serde::{Deserialize, Serialize};

/// Snapshot of the ledger aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Number of records in the ledger, refunds included
    pub transaction_count: usize,
    /// Sum of every recorded amount
    pub cumulative_value: f64,
    /// Every occurrence of a payer name that appears on more than one record
    pub cumulative_payer_names: Vec<String>,
}
