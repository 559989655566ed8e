//! Fixed-point currency amounts
//!
//! Amounts are held in hundredths of the currency unit so a month of rows
//! sums without floating-point drift. Every amount the crate produces stays
//! within `Money::MAX_CENTS` in magnitude, which keeps the difference of any
//! two amounts inside `i64`.

use std::fmt;
use std::ops::Sub;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A monetary amount stored as hundredths (paise, cents) of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest magnitude accepted from text or produced by `checked_add`
    /// (ten trillion whole units)
    pub const MAX_CENTS: i64 = 1_000_000_000_000_000;

    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use trackit::models::Money;
    /// let amount = Money::from_cents(1050);
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole units, truncated toward zero
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Fractional hundredths (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, or `None` if the result leaves the supported range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0
            .checked_add(other.0)
            .filter(|sum| sum.abs() <= Self::MAX_CENTS)
            .map(Self)
    }

    /// Parse a decimal amount such as "200", "200.5", "-12.75" or ".5"
    ///
    /// Only plain decimal notation is accepted. Digits past the second
    /// decimal place are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let text = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }

        let out_of_range = || MoneyParseError::OutOfRange(s.to_string());
        let units: i64 = match whole {
            "" => 0,
            digits => digits.parse().map_err(|_| out_of_range())?,
        };
        let hundredths: i64 = frac
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(2)
            .fold(0, |acc, b| acc * 10 + i64::from(b - b'0'));

        let cents = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(hundredths))
            .filter(|v| *v <= Self::MAX_CENTS)
            .ok_or_else(out_of_range)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol, e.g. "Rs.200.00"
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}", sign, symbol, self.unsigned_text())
    }

    fn unsigned_text(&self) -> String {
        format!("{}.{:02}", self.units().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Plain decimal text without a currency symbol, as stored in the data files
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(""))
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),

    #[error("Amount out of range: {0}")]
    OutOfRange(String),
}
