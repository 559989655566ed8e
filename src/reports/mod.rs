//! Reports module for TrackIt
//!
//! Provides the monthly summary report: totals, per-category spend, the top
//! category and limit checks.

pub mod summary;

pub use summary::{
    summarize, CategoryBreakdown, LimitStatus, LimitViolation, MonthlySummary, SummaryReport,
};
