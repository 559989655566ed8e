//! Core data models for TrackIt
//!
//! This module contains the data structures of the expense domain:
//! transactions, categories, months, limits and money amounts.

pub mod category;
pub mod limit;
pub mod money;
pub mod month;
pub mod transaction;

pub use category::Category;
pub use limit::CategoryLimit;
pub use money::{Money, MoneyParseError};
pub use month::Month;
pub use transaction::Transaction;
