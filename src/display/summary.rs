//! Summary and dashboard formatting
//!
//! Both views render from a [`SummaryReport`]; nothing here aggregates.

use crate::models::{Money, Month};
use crate::reports::{LimitStatus, LimitViolation, SummaryReport};

/// Label for the top category line ("None" when nothing was spent)
fn top_label(report: &SummaryReport) -> &'static str {
    report
        .summary
        .top_category
        .map(|c| c.label())
        .unwrap_or("None")
}

/// Footer shown under the transaction table
pub fn format_dashboard_footer(report: &SummaryReport, symbol: &str) -> String {
    format!(
        "Top Category: {}    Total: {}\n",
        top_label(report),
        report.summary.total.format_with_symbol(symbol)
    )
}

/// One-line notice for a category over its limit
pub fn format_violation_notice(violation: &LimitViolation, symbol: &str) -> String {
    format!(
        "{} exceeded its limit ({}) by {}",
        violation.category,
        violation.limit.format_with_symbol(symbol),
        violation.overage.format_with_symbol(symbol)
    )
}

/// Notice shown when a month has no transactions file
pub fn format_no_data(month: Month) -> String {
    format!("No data found for {}.", month)
}

/// The detailed monthly summary view
pub fn format_summary_view(month: Month, report: &SummaryReport, symbol: &str) -> String {
    let money = |m: Money| m.format_with_symbol(symbol);
    let mut output = String::new();

    output.push_str(&format!("===== Monthly Summary: {} =====\n\n", month));
    output.push_str(&format!("Total Spent: {}\n\n", money(report.summary.total)));

    output.push_str("Category Breakdown:\n");
    let rows = report.breakdown();
    if rows.is_empty() {
        output.push_str("  (no spending)\n");
    }
    for row in rows {
        output.push_str(&format!(" - {}: {}", row.category, money(row.spent)));

        if let Some(limit) = row.limit {
            output.push_str(&format!(" (Limit: {})", money(limit)));
        }
        match row.status {
            LimitStatus::Unlimited => {}
            LimitStatus::Remaining(left) => {
                output.push_str(&format!("  | Remaining: {}", money(left)));
            }
            LimitStatus::Exceeded(over) => {
                output.push_str(&format!("  **Exceeded by {}**", money(over)));
            }
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "\nTop Category: {} ({})\n",
        top_label(report),
        money(report.summary.top_amount())
    ));

    output
}
