//! Transaction display formatting
//!
//! Renders a month's transactions as a table with date, description, amount
//! and category columns.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::Transaction;

#[derive(Tabled)]
struct TransactionRow<'a> {
    #[tabled(rename = "Date")]
    date: &'a str,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: &'static str,
}

/// Format transactions as a table; amounts are shown without a symbol and
/// the header carries the currency instead
pub fn format_transaction_table(transactions: &[Transaction], currency_symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        date: &txn.date,
        description: truncate(&txn.description, 40),
        amount: txn.amount.to_string(),
        category: txn.category.label(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(2), Alignment::right());

    let mut output = format!("Amounts in {}\n", currency_symbol);
    output.push_str(&table.to_string());
    output.push('\n');
    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};

    #[test]
    fn test_table_contains_rows() {
        let txns = vec![
            Transaction::new("Jan 1", "Swiggy order", Money::from_units(200), Category::Food),
            Transaction::new(
                "Jan 2",
                "Jio recharge",
                Money::from_cents(29900),
                Category::BillsUtilities,
            ),
        ];

        let output = format_transaction_table(&txns, "Rs.");
        assert!(output.starts_with("Amounts in Rs.\n"));
        assert!(output.contains("Description"));
        assert!(output.contains("Swiggy order"));
        assert!(output.contains("200.00"));
        assert!(output.contains("Bills & Utilities"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_transaction_table(&[], "Rs."), "No transactions found.\n");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long description", 10), "a very ...");
        assert_eq!(truncate("चाय और नाश्ता", 5), "चा...");
    }
}
