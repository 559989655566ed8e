//! Keyword categorization of transaction descriptions
//!
//! Rules are evaluated top to bottom and the first rule with a keyword
//! contained in the description wins, so a description mentioning both a
//! bill and amazon is Bills & Utilities. Keep the order stable.

use crate::models::Category;

/// A set of keywords mapping to one category
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub keywords: &'static [&'static str],
    pub category: Category,
}

/// Ordered keyword rules. Anything unmatched is `Category::Others`.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        keywords: &["swiggy", "zomato", "dominos"],
        category: Category::Food,
    },
    CategoryRule {
        keywords: &["rapido", "ola", "uber"],
        category: Category::Transport,
    },
    CategoryRule {
        keywords: &["bill", "recharge", "electricity", "jio", "airtel"],
        category: Category::BillsUtilities,
    },
    CategoryRule {
        keywords: &["rent", "room"],
        category: Category::RentHousing,
    },
    CategoryRule {
        keywords: &["amazon", "myntra"],
        category: Category::Shopping,
    },
    CategoryRule {
        keywords: &["netflix", "prime", "hotstar"],
        category: Category::Entertainment,
    },
    CategoryRule {
        keywords: &["school", "fee", "course"],
        category: Category::Education,
    },
    CategoryRule {
        keywords: &["loan", "emi"],
        category: Category::LoansEmis,
    },
    CategoryRule {
        keywords: &["insurance"],
        category: Category::Insurance,
    },
    CategoryRule {
        keywords: &["trip", "travel", "vacation"],
        category: Category::Vacation,
    },
];

impl CategoryRule {
    /// Whether any keyword appears in an already lower-cased description
    pub fn matches(&self, description: &str) -> bool {
        self.keywords.iter().any(|kw| description.contains(kw))
    }
}

/// Categorize a transaction description
///
/// Matching is case-insensitive substring search. Never fails.
pub fn categorize(description: &str) -> Category {
    let desc = description.to_lowercase();

    CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(&desc))
        .map(|rule| rule.category)
        .unwrap_or(Category::Others)
}

/// Keywords that route to a category (empty for `Others`)
pub fn keywords_for(category: Category) -> &'static [&'static str] {
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.category == category)
        .map(|rule| rule.keywords)
        .unwrap_or(&[])
}
