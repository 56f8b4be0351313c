//! Account domain model.

use serde::{Deserialize, Serialize};

/// A party on either side of a transaction.
///
/// Accounts carry no identity beyond `name`: two accounts sharing a name
/// are the same payer as far as aggregation is concerned. `contact` is
/// informational only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    /// Display name, also the aggregation key for payer reports
    pub name: String,
    /// Secondary contact detail (e.g. an email address)
    pub contact: String,
}

impl Account {
    /// Creates a new account value.
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
        }
    }
}

impl std::fmt::Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.contact)
    }
}
