//! Spending limit store backed by `data/limits.csv`
//!
//! The file has a `Month,Category,Limit` header followed by one row per
//! (month, category). Saving rewrites the whole file, replacing the matching
//! row or appending a new one.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use log::{debug, info, warn};

use crate::error::{TrackItError, TrackItResult};
use crate::models::{Category, CategoryLimit, Money, Month};

use super::csv_io::{
    is_first_line, line_number, read_records, significant_len, write_records_atomic,
};

/// Header written when the limits file is created
pub const LIMITS_HEADER: [&str; 3] = ["Month", "Category", "Limit"];

/// Persistence for per-month category limits
#[derive(Debug, Clone)]
pub struct LimitStore {
    path: PathBuf,
}

impl LimitStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the limits configured for one month
    ///
    /// Returns an empty map if the limits file doesn't exist.
    pub fn load_limits(&self, month: Month) -> TrackItResult<BTreeMap<Category, Money>> {
        let mut limits = BTreeMap::new();

        for record in self.data_rows()? {
            if !month.matches_label(&record[0]) {
                continue;
            }

            if let Some((category, limit)) = self.parse_row(&record)? {
                limits.insert(category, limit);
            }
        }

        debug!("Loaded {} limits for {}", limits.len(), month);
        Ok(limits)
    }

    /// List every limit in the file, across all months
    pub fn list_limits(&self) -> TrackItResult<Vec<CategoryLimit>> {
        let mut limits = Vec::new();

        for record in self.data_rows()? {
            let month = Month::ALL
                .into_iter()
                .find(|m| m.matches_label(&record[0]));
            let Some(month) = month else {
                warn!(
                    "Ignoring limit on line {} with unknown month '{}'",
                    line_number(&record),
                    record[0].trim()
                );
                continue;
            };

            if let Some((category, limit)) = self.parse_row(&record)? {
                // Later rows win, matching load_limits
                limits.retain(|l: &CategoryLimit| !l.is_for(month, category));
                limits.push(CategoryLimit::new(month, category, limit));
            }
        }

        limits.sort_by_key(|l| (l.month, l.category));
        Ok(limits)
    }

    /// Insert or replace the limit for a month and category
    pub fn save_limit(&self, month: Month, category: Category, limit: Money) -> TrackItResult<()> {
        if limit.is_negative() {
            return Err(TrackItError::Validation(format!(
                "Limit must not be negative: {}",
                limit
            )));
        }

        let mut records = read_records(&self.path)?.unwrap_or_default();

        // A missing or blank header line is rewritten as the standard header
        let header = match records.first() {
            Some(first) if is_first_line(first) => records.remove(0),
            _ => StringRecord::from(LIMITS_HEADER.to_vec()),
        };

        let limit_text = limit.to_string();
        let replacement =
            StringRecord::from(vec![month.name(), category.label(), limit_text.as_str()]);

        let mut output = vec![header];
        let mut updated = false;

        for record in records {
            if significant_len(&record) < 3 {
                debug!("Dropping short limits row on line {}", line_number(&record));
                continue;
            }

            let same_key = month.matches_label(&record[0])
                && record[1].trim().eq_ignore_ascii_case(category.label());

            if same_key {
                // Collapse any duplicates of this key into a single row
                if !updated {
                    output.push(replacement.clone());
                    updated = true;
                }
            } else {
                output.push(record);
            }
        }

        if !updated {
            output.push(replacement);
        }

        write_records_atomic(&self.path, output)?;

        info!(
            "{} limit {} for {} / {}",
            if updated { "Updated" } else { "Added" },
            limit,
            month,
            category
        );
        Ok(())
    }

    /// Data rows with at least three fields
    ///
    /// The first physical line is the header whatever it holds, so a blank
    /// first line means every record is data.
    fn data_rows(&self) -> TrackItResult<Vec<StringRecord>> {
        let records = read_records(&self.path)?.unwrap_or_default();

        Ok(records
            .into_iter()
            .filter(|record| !is_first_line(record))
            .filter(|record| significant_len(record) >= 3)
            .collect())
    }

    fn parse_row(&self, record: &StringRecord) -> TrackItResult<Option<(Category, Money)>> {
        let Some(category) = Category::from_label(&record[1]) else {
            warn!(
                "Ignoring limit on line {} for unknown category '{}'",
                line_number(record),
                record[1].trim()
            );
            return Ok(None);
        };

        let limit_text = record[2].trim();
        let limit = Money::parse(limit_text).map_err(|_| TrackItError::MalformedAmount {
            field: "limit",
            path: self.path.clone(),
            line: line_number(record),
            value: limit_text.to_string(),
        })?;

        Ok(Some((category, limit)))
    }
}
