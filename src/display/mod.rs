//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models and reports for terminal
//! display, including tables and limit notices.

pub mod limit;
pub mod summary;
pub mod transaction;

pub use limit::{format_category_rules, format_limit_list};
pub use summary::{
    format_dashboard_footer, format_no_data, format_summary_view, format_violation_notice,
};
pub use transaction::format_transaction_table;
