//! Month dashboard command
//!
//! Shows a month's transactions, the total, the top category and a notice
//! for each category over its limit.

use crate::config::settings::Settings;
use crate::display::{
    format_dashboard_footer, format_no_data, format_transaction_table, format_violation_notice,
};
use crate::error::{TrackItError, TrackItResult};
use crate::models::Month;
use crate::reports::SummaryReport;
use crate::services::{MonthSnapshot, Tracker};
use crate::storage::Storage;

/// Parse an optional month argument, falling back to settings
pub fn resolve_month(settings: &Settings, month: Option<&str>) -> TrackItResult<Month> {
    let requested = month
        .map(|m| {
            Month::parse(m).map_err(|_| {
                TrackItError::Validation(format!(
                    "Invalid month: {}. Use a month name (e.g. January), abbreviation or number",
                    m
                ))
            })
        })
        .transpose()?;

    Ok(settings.resolve_month(requested))
}

/// Handle `trackit show`
pub fn handle_show_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
) -> TrackItResult<()> {
    let month = resolve_month(settings, month.as_deref())?;

    match Tracker::new(storage).open_month(month) {
        Ok(snapshot) => {
            print!("{}", format_dashboard(&snapshot, &settings.currency_symbol));
            Ok(())
        }
        Err(e) => {
            print!("{}", format_failed_load(month, &settings.currency_symbol));
            Err(e)
        }
    }
}

/// Zero-state dashboard for a month whose load failed, so nothing stale shows
pub fn format_failed_load(month: Month, symbol: &str) -> String {
    format!(
        "{}\n{}",
        month,
        format_dashboard_footer(&SummaryReport::default(), symbol)
    )
}

/// Render a month snapshot as the dashboard view
pub fn format_dashboard(snapshot: &MonthSnapshot, symbol: &str) -> String {
    let mut output = String::new();

    if snapshot.no_data {
        output.push_str(&format_no_data(snapshot.month));
        output.push('\n');
    } else {
        output.push_str(&format!(
            "{} ({} transactions)\n",
            snapshot.month,
            snapshot.transactions.len()
        ));
        output.push_str(&format_transaction_table(&snapshot.transactions, symbol));
    }

    output.push_str(&format_dashboard_footer(&snapshot.report, symbol));

    for violation in &snapshot.report.violations {
        output.push_str("! ");
        output.push_str(&format_violation_notice(violation, symbol));
        output.push('\n');
    }

    output
}
