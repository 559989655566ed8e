//! Limit CLI commands
//!
//! Implements setting and listing per-month category spending limits.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_limit_list;
use crate::error::{TrackItError, TrackItResult};
use crate::models::{Category, Money};
use crate::services::Tracker;
use crate::storage::Storage;

use super::show::{format_dashboard, format_failed_load, resolve_month};

/// Limit subcommands
#[derive(Subcommand)]
pub enum LimitCommands {
    /// Set (or replace) the limit for a category in a month
    Set {
        /// Month name, abbreviation or number
        month: String,
        /// Category name (e.g. "Food", "Bills & Utilities")
        category: String,
        /// Limit amount (e.g. "300" or "300.00")
        amount: String,
        /// Month currently on display; reprinted if it is the one edited
        #[arg(long)]
        displayed: Option<String>,
    },

    /// List configured limits
    List {
        /// Only show this month
        month: Option<String>,
    },
}

/// Handle a limit command
pub fn handle_limit_command(
    storage: &Storage,
    settings: &Settings,
    cmd: LimitCommands,
) -> TrackItResult<()> {
    match cmd {
        LimitCommands::Set {
            month,
            category,
            amount,
            displayed,
        } => {
            let month = resolve_month(settings, Some(&month))?;
            let displayed = displayed
                .as_deref()
                .map(|d| resolve_month(settings, Some(d)))
                .transpose()?;

            let category: Category = category.parse().map_err(|_| {
                TrackItError::Validation(format!(
                    "Unknown category: {}. Run 'trackit categories' to see the list",
                    category
                ))
            })?;

            let limit = Money::parse(&amount).map_err(|_| {
                TrackItError::Validation(format!("Enter a valid number for limit: {}", amount))
            })?;

            let outcome = Tracker::new(storage).save_limit(displayed, month, category, limit)?;
            println!("Limit saved successfully!");
            println!(
                "  {} / {}: {}",
                month,
                category,
                limit.format_with_symbol(&settings.currency_symbol)
            );

            match outcome.reload {
                Some(Ok(snapshot)) => {
                    println!();
                    print!("{}", format_dashboard(&snapshot, &settings.currency_symbol));
                }
                Some(Err(e)) => {
                    println!();
                    print!("{}", format_failed_load(month, &settings.currency_symbol));
                    eprintln!("Could not reload {}: {}", month, e);
                }
                None => {}
            }
        }

        LimitCommands::List { month } => {
            let mut limits = storage.limits.list_limits()?;

            if let Some(month) = month {
                let month = resolve_month(settings, Some(&month))?;
                limits.retain(|l| l.month == month);
            }

            print!("{}", format_limit_list(&limits, &settings.currency_symbol));
        }
    }

    Ok(())
}
