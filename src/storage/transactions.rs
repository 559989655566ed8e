//! Transaction loader for per-month CSV files
//!
//! Each month lives in `data/<Month>.csv` with rows of
//! `date,description,amount` and no header. Rows with fewer than three
//! fields are skipped; an unparsable amount fails the whole load.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::paths::TrackItPaths;
use crate::error::{TrackItError, TrackItResult};
use crate::models::{Money, Month, Transaction};
use crate::services::categorizer::categorize;

use super::csv_io::{line_number, read_records, significant_len};

/// Result of loading one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthLoad {
    /// No transactions file exists for the month
    Missing,
    /// The file was read; it may still hold zero usable rows
    Loaded(Vec<Transaction>),
}

/// Reads and categorizes month transaction files
#[derive(Debug, Clone)]
pub struct TransactionLoader {
    paths: TrackItPaths,
}

impl TransactionLoader {
    pub fn new(paths: TrackItPaths) -> Self {
        Self { paths }
    }

    /// Path of the transactions file for a month
    pub fn path_for(&self, month: Month) -> PathBuf {
        self.paths.month_file(month)
    }

    /// Load and categorize all transactions for a month
    pub fn load_month(&self, month: Month) -> TrackItResult<MonthLoad> {
        let path = self.path_for(month);
        let load = read_transactions(&path)?;

        match &load {
            MonthLoad::Missing => info!("No transactions file for {} at {}", month, path.display()),
            MonthLoad::Loaded(txns) => {
                info!("Loaded {} transactions for {}", txns.len(), month)
            }
        }

        Ok(load)
    }
}

/// Parse a transactions file
pub fn read_transactions(path: &Path) -> TrackItResult<MonthLoad> {
    let Some(records) = read_records(path)? else {
        return Ok(MonthLoad::Missing);
    };

    let mut transactions = Vec::with_capacity(records.len());

    for record in &records {
        if significant_len(record) < 3 {
            debug!(
                "Skipping {} line {}: fewer than 3 fields",
                path.display(),
                line_number(record)
            );
            continue;
        }

        let date = record[0].trim();
        let description = record[1].trim();
        let amount_text = record[2].trim();

        let amount = Money::parse(amount_text).map_err(|_| TrackItError::MalformedAmount {
            field: "amount",
            path: path.to_path_buf(),
            line: line_number(record),
            value: amount_text.to_string(),
        })?;

        let category = categorize(&description.to_lowercase());
        transactions.push(Transaction::new(date, description, amount, category));
    }

    Ok(MonthLoad::Loaded(transactions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use std::fs;
    use tempfile::TempDir;

    fn create_loader() -> (TempDir, TransactionLoader) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackItPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        (temp_dir, TransactionLoader::new(paths))
    }

    fn write_month(loader: &TransactionLoader, month: Month, contents: &str) {
        fs::write(loader.path_for(month), contents).unwrap();
    }

    fn load_rows(loader: &TransactionLoader, month: Month) -> Vec<Transaction> {
        match loader.load_month(month).unwrap() {
            MonthLoad::Loaded(txns) => txns,
            MonthLoad::Missing => panic!("{} should have a transactions file", month),
        }
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let (_temp_dir, loader) = create_loader();

        assert_eq!(loader.load_month(Month::April).unwrap(), MonthLoad::Missing);
    }

    #[test]
    fn test_load_and_categorize() {
        let (_temp_dir, loader) = create_loader();
        write_month(
            &loader,
            Month::January,
            "Jan 1,Swiggy order,200\nJan 2, Uber Ride ,100.50\nJan 3,Pharmacy,75\n",
        );

        let txns = load_rows(&loader, Month::January);
        assert_eq!(txns.len(), 3);

        assert_eq!(txns[0].date, "Jan 1");
        assert_eq!(txns[0].category, Category::Food);
        assert_eq!(txns[0].amount, Money::from_units(200));

        // original case is kept, whitespace trimmed
        assert_eq!(txns[1].description, "Uber Ride");
        assert_eq!(txns[1].category, Category::Transport);
        assert_eq!(txns[1].amount, Money::from_cents(10050));

        assert_eq!(txns[2].category, Category::Others);
    }

    #[test]
    fn test_short_rows_skipped() {
        let (_temp_dir, loader) = create_loader();
        write_month(
            &loader,
            Month::February,
            "Feb 1,Netflix\njust one field\nFeb 2,Zomato,\n\nFeb 3,Rent,5000\n",
        );

        let txns = load_rows(&loader, Month::February);
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].description, "Rent");
        assert_eq!(txns[0].category, Category::RentHousing);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let (_temp_dir, loader) = create_loader();
        write_month(&loader, Month::March, "Mar 1,Airtel recharge,299,UPI,ref-123\n");

        let txns = load_rows(&loader, Month::March);
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].category, Category::BillsUtilities);
        assert_eq!(txns[0].amount, Money::from_units(299));
    }

    #[test]
    fn test_malformed_amount_fails_load() {
        let (_temp_dir, loader) = create_loader();
        write_month(&loader, Month::May, "May 1,Swiggy,100\nMay 2,Uber,ten\n");

        let err = loader.load_month(Month::May).unwrap_err();
        match err {
            TrackItError::MalformedAmount { line, value, .. } => {
                assert_eq!(line, 2);
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_file_is_loaded_but_empty() {
        let (_temp_dir, loader) = create_loader();
        write_month(&loader, Month::June, "");

        assert_eq!(
            loader.load_month(Month::June).unwrap(),
            MonthLoad::Loaded(Vec::new())
        );
    }
}
