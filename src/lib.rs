//! TrackIt - terminal expense tracker
//!
//! Reads a month of transactions from a CSV file, categorizes each one by
//! keywords in its description, totals spend per category and checks it
//! against per-month category limits.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, months, money)
//! - `storage`: CSV file storage for month transactions and limits
//! - `services`: Categorization and month snapshots
//! - `reports`: Monthly summary aggregation and limit checks
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use trackit::config::{paths::TrackItPaths, settings::Settings};
//! use trackit::models::Month;
//! use trackit::services::Tracker;
//! use trackit::storage::Storage;
//!
//! let paths = TrackItPaths::new()?;
//! let storage = Storage::new(paths)?;
//! let snapshot = Tracker::new(&storage).open_month(Month::January)?;
//! println!("{}", snapshot.report.summary.total);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackItError, TrackItResult};
