//! Business logic layer for TrackIt
//!
//! Categorization rules and the month snapshot service sit here, between
//! the storage layer and the CLI.

pub mod categorizer;
pub mod tracker;

pub use categorizer::{categorize, CategoryRule, CATEGORY_RULES};
pub use tracker::{MonthSnapshot, SaveOutcome, Tracker};
