//! Month snapshots for the presentation layer
//!
//! A snapshot is everything a view needs to render one month: the
//! categorized transactions, that month's limits and the summary report.
//! Snapshots are values; reloading builds a new one.

use std::collections::BTreeMap;

use log::info;

use crate::error::TrackItResult;
use crate::models::{Category, Money, Month, Transaction};
use crate::reports::{summarize, SummaryReport};
use crate::storage::{MonthLoad, Storage};

/// Everything loaded for one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSnapshot {
    pub month: Month,
    /// True when the month has no transactions file
    pub no_data: bool,
    pub transactions: Vec<Transaction>,
    pub limits: BTreeMap<Category, Money>,
    pub report: SummaryReport,
}

impl MonthSnapshot {
    /// An empty snapshot for a month without data
    pub fn empty(month: Month) -> Self {
        Self {
            month,
            no_data: true,
            transactions: Vec::new(),
            limits: BTreeMap::new(),
            report: SummaryReport::default(),
        }
    }
}

/// Outcome of a limit save that reached the disk
///
/// The save itself succeeded. `reload` is set when the edited month is the
/// one on display and carries the result of reading that month back, which
/// can fail independently of the save.
#[derive(Debug)]
pub struct SaveOutcome {
    pub reload: Option<TrackItResult<MonthSnapshot>>,
}

/// Service gluing the loader, limit store and summary engine together
pub struct Tracker<'a> {
    storage: &'a Storage,
}

impl<'a> Tracker<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load a month and compute its summary
    pub fn open_month(&self, month: Month) -> TrackItResult<MonthSnapshot> {
        let transactions = match self.storage.transactions.load_month(month)? {
            MonthLoad::Missing => return Ok(MonthSnapshot::empty(month)),
            MonthLoad::Loaded(txns) => txns,
        };

        let limits = self.storage.limits.load_limits(month)?;
        let report = summarize(&transactions, &limits)?;

        Ok(MonthSnapshot {
            month,
            no_data: false,
            transactions,
            limits,
            report,
        })
    }

    /// Save a limit, reloading the displayed month if it was the one edited
    ///
    /// Only a failed save is an `Err`; a failed reload is reported through
    /// `SaveOutcome::reload`.
    pub fn save_limit(
        &self,
        displayed: Option<Month>,
        month: Month,
        category: Category,
        limit: Money,
    ) -> TrackItResult<SaveOutcome> {
        self.storage.limits.save_limit(month, category, limit)?;

        let reload = (displayed == Some(month)).then(|| {
            info!("Reloading {} after limit change", month);
            self.open_month(month)
        });

        Ok(SaveOutcome { reload })
    }
}
