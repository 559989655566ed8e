//! Limit and category listing formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, CategoryLimit};
use crate::services::categorizer::keywords_for;

#[derive(Tabled)]
struct LimitRow {
    #[tabled(rename = "Month")]
    month: &'static str,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Limit")]
    limit: String,
}

/// Format configured limits as a table
pub fn format_limit_list(limits: &[CategoryLimit], symbol: &str) -> String {
    if limits.is_empty() {
        return "No limits configured.\n".to_string();
    }

    let rows = limits.iter().map(|l| LimitRow {
        month: l.month.name(),
        category: l.category.label(),
        limit: l.limit.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!("{}\n", table)
}

/// List every category with the keywords that select it, in rule order
pub fn format_category_rules() -> String {
    let mut output = String::from("Categories (first matching rule wins):\n");

    for (i, category) in Category::ALL.iter().enumerate() {
        let keywords = keywords_for(*category);
        let matched_by = if keywords.is_empty() {
            "(anything unmatched)".to_string()
        } else {
            keywords.join(", ")
        };
        output.push_str(&format!("{:>3}. {:<18} {}\n", i + 1, category.label(), matched_by));
    }

    output
}
