//! Validated calendar inputs for the calculators.
//!
//! The calculators are only defined for pre-validated periods, so rather
//! than re-checking ranges inside every function the bad values are made
//! unrepresentable: a [`YearMonth`] always holds a positive 4-digit year and
//! a month in 1-12, and a [`WindowSize`] is always 1-12 months. Validation
//! happens once, at construction, where the caller still has the raw input.

use crate::errors::{Error, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use std::fmt;

/// A specific calendar month, e.g. March 2024.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a validated `YearMonth`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidYear`] for years outside 1000-9999 and
    /// [`Error::InvalidMonth`] for months outside 1-12.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1000..=9999).contains(&year) {
            return Err(Error::InvalidYear { year });
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// The calendar month containing `instant`.
    ///
    /// Wall-clock dates always carry a month in 1-12, so this cannot fail.
    #[must_use]
    pub fn containing(instant: &DateTime<Utc>) -> Self {
        Self {
            year: instant.year(),
            month: instant.month(),
        }
    }

    /// Calendar year
    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Calendar month (1-12)
    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// The month immediately after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The month `n` months before this one.
    #[must_use]
    pub fn minus_months(self, n: u32) -> Self {
        // Work in a flat month count so year borrows fall out of the
        // euclidean division.
        let total = self.year * 12 + self.month as i32 - 1 - n as i32;
        Self {
            year: total.div_euclid(12),
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    /// Midnight UTC on the first day of the month.
    #[must_use]
    pub fn first_instant(self) -> DateTime<Utc> {
        // Day 1 exists in every month and the month is validated at
        // construction, so the date cannot be out of range.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month validated at construction")
            .and_time(NaiveTime::MIN)
            .and_utc()
    }

    /// The last representable instant of the month: one millisecond before
    /// the next month begins.
    #[must_use]
    pub fn last_instant(self) -> DateTime<Utc> {
        self.next().first_instant() - Duration::milliseconds(1)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Number of trailing months in a cash-flow window (1-12).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WindowSize(u32);

impl WindowSize {
    /// Creates a validated window size.
    ///
    /// # Errors
    /// Returns [`Error::InvalidWindow`] for sizes outside 1-12.
    pub fn new(months: u32) -> Result<Self> {
        if !(1..=12).contains(&months) {
            return Err(Error::InvalidWindow { months });
        }
        Ok(Self(months))
    }

    /// Window length in months
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for WindowSize {
    /// Six trailing months, matching the service's historical default.
    fn default() -> Self {
        Self(6)
    }
}
