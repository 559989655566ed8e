//! CLI command for the monthly summary report
//!
//! Prints the detailed category breakdown, or exports it as CSV or JSON.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::display::{format_no_data, format_summary_view};
use crate::error::{TrackItError, TrackItResult};
use crate::services::Tracker;
use crate::storage::Storage;

use super::show::resolve_month;

/// Handle `trackit summary`
pub fn handle_summary_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<String>,
    output: Option<PathBuf>,
    json: bool,
) -> TrackItResult<()> {
    let month = resolve_month(settings, month.as_deref())?;
    let snapshot = Tracker::new(storage).open_month(month)?;

    if let Some(path) = output {
        let file = File::create(&path).map_err(|e| {
            TrackItError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        snapshot.report.export_csv(BufWriter::new(file))?;
        println!("Summary for {} exported to: {}", month, path.display());
    } else if json {
        println!("{}", serde_json::to_string_pretty(&snapshot.report)?);
    } else {
        if snapshot.no_data {
            println!("{}\n", format_no_data(month));
        }
        print!(
            "{}",
            format_summary_view(month, &snapshot.report, &settings.currency_symbol)
        );
    }

    Ok(())
}
