//! Spending categories
//!
//! The category set is closed: every transaction lands in exactly one of
//! these eleven labels, with `Others` as the catch-all. Declaration order is
//! significant: it is the display order and the tie-break order for the top
//! category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackItError;

/// One of the fixed spending categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Food")]
    Food,
    #[serde(rename = "Transport")]
    Transport,
    #[serde(rename = "Bills & Utilities")]
    BillsUtilities,
    #[serde(rename = "Rent/Housing")]
    RentHousing,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Entertainment")]
    Entertainment,
    #[serde(rename = "Education")]
    Education,
    #[serde(rename = "Loans & EMIs")]
    LoansEmis,
    #[serde(rename = "Insurance")]
    Insurance,
    #[serde(rename = "Vacation")]
    Vacation,
    #[serde(rename = "Others")]
    Others,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 11] = [
        Category::Food,
        Category::Transport,
        Category::BillsUtilities,
        Category::RentHousing,
        Category::Shopping,
        Category::Entertainment,
        Category::Education,
        Category::LoansEmis,
        Category::Insurance,
        Category::Vacation,
        Category::Others,
    ];

    /// The display label, also used in the limits file
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::BillsUtilities => "Bills & Utilities",
            Category::RentHousing => "Rent/Housing",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Education => "Education",
            Category::LoansEmis => "Loans & EMIs",
            Category::Insurance => "Insurance",
            Category::Vacation => "Vacation",
            Category::Others => "Others",
        }
    }

    /// Look up a category by its label, ignoring case and surrounding whitespace
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = TrackItError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| TrackItError::category_not_found(s.trim()))
    }
}
