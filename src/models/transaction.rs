//! Transaction model
//!
//! A transaction is one row of a month's transactions file after
//! categorization. Transactions are rebuilt from disk on every load.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::money::Money;

/// A single categorized expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Date label as written in the source file (not validated)
    pub date: String,

    /// Description in its original case
    pub description: String,

    /// Amount spent
    pub amount: Money,

    /// Category assigned from the description
    pub category: Category,
}

impl Transaction {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
        category: Category,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            amount,
            category,
        }
    }
}
