//! Calendar month selector
//!
//! Each month has its own transactions file named after the full month name.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackItError;

/// A calendar month, independent of year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Full month name, e.g. "January"
    pub const fn name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Month from its 1-based number
    pub fn from_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// 1-based month number
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// The current month in local time
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::from_number(today.month()).unwrap_or(Month::January)
    }

    /// Case-insensitive comparison against a month label from a data file
    pub fn matches_label(&self, label: &str) -> bool {
        self.name().eq_ignore_ascii_case(label.trim())
    }

    /// Parse a month from its full name, three-letter abbreviation, or number
    pub fn parse(s: &str) -> Result<Self, TrackItError> {
        let s = s.trim();

        if let Ok(number) = s.parse::<u32>() {
            return Self::from_number(number).ok_or_else(|| TrackItError::month_not_found(s));
        }

        Self::ALL
            .into_iter()
            .find(|m| {
                m.matches_label(s) || (s.len() == 3 && m.name()[..3].eq_ignore_ascii_case(s))
            })
            .ok_or_else(|| TrackItError::month_not_found(s))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = TrackItError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!(Month::parse("January").unwrap(), Month::January);
        assert_eq!(Month::parse("january").unwrap(), Month::January);
        assert_eq!(Month::parse(" SEPTEMBER ").unwrap(), Month::September);
        assert_eq!(Month::parse("feb").unwrap(), Month::February);
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(Month::parse("1").unwrap(), Month::January);
        assert_eq!(Month::parse("12").unwrap(), Month::December);
        assert!(Month::parse("0").is_err());
        assert!(Month::parse("13").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = Month::parse("Smarch").unwrap_err();
        assert!(matches!(err, TrackItError::NotFound { .. }));
        assert!(Month::parse("").is_err());
    }

    #[test]
    fn test_number_round_trip() {
        for month in Month::ALL {
            assert_eq!(Month::from_number(month.number()), Some(month));
        }
    }

    #[test]
    fn test_matches_label() {
        assert!(Month::March.matches_label("march"));
        assert!(Month::March.matches_label(" MARCH "));
        assert!(!Month::March.matches_label("May"));
    }
}
