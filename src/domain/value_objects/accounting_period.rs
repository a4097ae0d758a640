//! # Accounting Period Value Object
//!
//! A half-open date range covering one accounting run.
//!
//! The period is derived from a `YYYY-MM-DD` start date and a positive length
//! in days (default 7). The upper bound is exclusive; the canonical label used
//! for report naming is `{start}-to-{end}`.
//!
//! # Examples
//!
//! ```
//! use settlement_accounting::domain::value_objects::AccountingPeriod;
//!
//! let period = AccountingPeriod::starting("2022-01-01").unwrap();
//! assert_eq!(period.to_string(), "2022-01-01-to-2022-01-08");
//! ```

use crate::domain::errors::{ValidationError, ValidationResult};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

/// Fixed input format for the period start date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default period length in days.
pub const DEFAULT_LENGTH_DAYS: u32 = 7;

/// A fixed accounting period, constructed once per accounting run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AccountingPeriod {
    start: NaiveDate,
    length_days: u32,
}

impl AccountingPeriod {
    /// Creates a period from a start date string and an explicit length.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDate`] when `start` does not match
    /// `%Y-%m-%d`, and [`ValidationError::InvalidPeriodLength`] when
    /// `length_days` is zero.
    pub fn new(start: &str, length_days: u32) -> ValidationResult<Self> {
        let start = NaiveDate::parse_from_str(start, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(start.to_string()))?;
        if length_days == 0 {
            return Err(ValidationError::InvalidPeriodLength(length_days));
        }
        Ok(Self { start, length_days })
    }

    /// Creates a period of the default length (7 days).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDate`] when `start` does not match
    /// `%Y-%m-%d`.
    pub fn starting(start: &str) -> ValidationResult<Self> {
        Self::new(start, DEFAULT_LENGTH_DAYS)
    }

    /// Returns the inclusive start date.
    #[inline]
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the period length in days.
    #[inline]
    #[must_use]
    pub fn length_days(&self) -> u32 {
        self.length_days
    }

    /// Returns the exclusive end date, `start + length_days`.
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(i64::from(self.length_days))
    }

    /// Returns the start as a midnight instant, for query parameters.
    #[must_use]
    pub fn start_time(&self) -> NaiveDateTime {
        self.start.and_hms_opt(0, 0, 0).unwrap_or_default()
    }

    /// Returns the exclusive end as a midnight instant, for query parameters.
    #[must_use]
    pub fn end_time(&self) -> NaiveDateTime {
        self.end().and_hms_opt(0, 0, 0).unwrap_or_default()
    }
}

impl fmt::Display for AccountingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-to-{}",
            self.start.format(DATE_FORMAT),
            self.end().format(DATE_FORMAT)
        )
    }
}
