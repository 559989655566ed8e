//! Per-month category spending limits

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;
use super::month::Month;

/// A spending ceiling for one category in one month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLimit {
    pub month: Month,
    pub category: Category,
    pub limit: Money,
}

impl CategoryLimit {
    pub fn new(month: Month, category: Category, limit: Money) -> Self {
        Self {
            month,
            category,
            limit,
        }
    }

    /// Whether this limit is keyed by the given month and category
    pub fn is_for(&self, month: Month, category: Category) -> bool {
        self.month == month && self.category == category
    }
}

impl fmt::Display for CategoryLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.month, self.category, self.limit)
    }
}
