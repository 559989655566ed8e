//! Monthly Summary Report
//!
//! Aggregates a month of transactions into a total and per-category totals,
//! picks the top category and checks each category against its limit. The
//! dashboard and the summary view both render from the same report.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;

use crate::error::{TrackItError, TrackItResult};
use crate::models::{Category, Money, Transaction};

/// Aggregated spend for one month
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    /// Sum of every transaction amount
    pub total: Money,
    /// Spend per category, in category order
    pub per_category: BTreeMap<Category, Money>,
    /// Category with the strictly greatest positive spend
    pub top_category: Option<Category>,
}

impl MonthlySummary {
    /// Amount spent in the top category (zero when there is none)
    pub fn top_amount(&self) -> Money {
        self.top_category
            .and_then(|c| self.per_category.get(&c).copied())
            .unwrap_or_default()
    }
}

/// A category whose spend went over its configured limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LimitViolation {
    pub category: Category,
    pub limit: Money,
    pub spent: Money,
    pub overage: Money,
}

/// How a category stands against its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "amount", rename_all = "lowercase")]
pub enum LimitStatus {
    /// No limit configured
    Unlimited,
    /// Spend is at or under the limit by this much
    Remaining(Money),
    /// Spend exceeds the limit by this much
    Exceeded(Money),
}

/// One row of the detailed summary view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub spent: Money,
    pub limit: Option<Money>,
    pub status: LimitStatus,
}

/// Monthly Summary Report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    pub summary: MonthlySummary,
    pub violations: Vec<LimitViolation>,
    /// Limits configured for the month, including unused ones
    pub limits: BTreeMap<Category, Money>,
    pub transaction_count: usize,
}

/// Summarize transactions against the month's limits
pub fn summarize(
    transactions: &[Transaction],
    limits: &BTreeMap<Category, Money>,
) -> TrackItResult<SummaryReport> {
    SummaryReport::generate(transactions, limits)
}

impl SummaryReport {
    /// Generate a report for a set of transactions
    ///
    /// Fails with `OutOfRange` when a running total leaves the range
    /// `Money` supports.
    pub fn generate(
        transactions: &[Transaction],
        limits: &BTreeMap<Category, Money>,
    ) -> TrackItResult<Self> {
        let mut total = Money::zero();
        let mut per_category: BTreeMap<Category, Money> = BTreeMap::new();

        for txn in transactions {
            let out_of_range = || {
                TrackItError::OutOfRange(format!(
                    "spending total passes {} at '{}' ({})",
                    Money::from_cents(Money::MAX_CENTS),
                    txn.description,
                    txn.date
                ))
            };
            total = total.checked_add(txn.amount).ok_or_else(out_of_range)?;
            let spent = per_category.entry(txn.category).or_default();
            *spent = spent.checked_add(txn.amount).ok_or_else(out_of_range)?;
        }

        // BTreeMap iterates in category order, so on a tie the earlier
        // category keeps the lead
        let mut top_category = None;
        let mut max = Money::zero();
        for (&category, &spent) in &per_category {
            if spent > max {
                max = spent;
                top_category = Some(category);
            }
        }

        let violations = per_category
            .iter()
            .filter_map(|(&category, &spent)| {
                let limit = *limits.get(&category)?;
                (spent > limit).then(|| LimitViolation {
                    category,
                    limit,
                    spent,
                    overage: spent - limit,
                })
            })
            .collect();

        Ok(Self {
            summary: MonthlySummary {
                total,
                per_category,
                top_category,
            },
            violations,
            limits: limits.clone(),
            transaction_count: transactions.len(),
        })
    }

    /// Per-category spend with limit and remaining/exceeded amounts
    pub fn breakdown(&self) -> Vec<CategoryBreakdown> {
        self.summary
            .per_category
            .iter()
            .map(|(&category, &spent)| {
                let limit = self.limits.get(&category).copied();
                let status = match limit {
                    None => LimitStatus::Unlimited,
                    Some(limit) if spent > limit => LimitStatus::Exceeded(spent - limit),
                    Some(limit) => LimitStatus::Remaining(limit - spent),
                };
                CategoryBreakdown {
                    category,
                    spent,
                    limit,
                    status,
                }
            })
            .collect()
    }

    /// Export the breakdown to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> TrackItResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| TrackItError::Export(e.to_string());

        csv.write_record(["Category", "Spent", "Limit", "Remaining", "Overage"])
            .map_err(export_err)?;

        for row in self.breakdown() {
            let (remaining, overage) = match row.status {
                LimitStatus::Unlimited => (String::new(), String::new()),
                LimitStatus::Remaining(m) => (m.to_string(), String::new()),
                LimitStatus::Exceeded(m) => (String::new(), m.to_string()),
            };
            csv.write_record([
                row.category.label().to_string(),
                row.spent.to_string(),
                row.limit.map(|l| l.to_string()).unwrap_or_default(),
                remaining,
                overage,
            ])
            .map_err(export_err)?;
        }

        let total = self.summary.total.to_string();
        csv.write_record(["TOTAL", total.as_str(), "", "", ""])
            .map_err(export_err)?;

        csv.flush().map_err(|e| TrackItError::Export(e.to_string()))?;

        Ok(())
    }
}
