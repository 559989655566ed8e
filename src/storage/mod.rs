//! Storage layer for TrackIt
//!
//! Provides CSV file storage with atomic writes and automatic directory
//! creation: one transactions file per month plus a shared limits file.

pub mod csv_io;
pub mod limits;
pub mod transactions;

pub use csv_io::{read_records, write_records_atomic};
pub use limits::LimitStore;
pub use transactions::{MonthLoad, TransactionLoader};

use crate::config::paths::TrackItPaths;
use crate::error::TrackItError;

/// Main storage coordinator that provides access to the data sources
pub struct Storage {
    paths: TrackItPaths,
    pub transactions: TransactionLoader,
    pub limits: LimitStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrackItPaths) -> Result<Self, TrackItError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionLoader::new(paths.clone()),
            limits: LimitStore::new(paths.limits_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackItPaths {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackItPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(
            storage.limits.path(),
            temp_dir.path().join("data").join("limits.csv")
        );
    }
}
