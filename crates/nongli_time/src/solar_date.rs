//! Validated Gregorian calendar date.
//!
//! `SolarDate` is the naive (timezone-free) date used throughout the
//! workspace. Construction checks month and day against the Gregorian rules;
//! arithmetic goes through Julian Day Numbers.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::gregorian::{
    civil_from_day_number, day_number_from_civil, gregorian_month_days, is_gregorian_leap_year,
};

/// Smallest supported year.
pub const MIN_YEAR: i32 = 1;
/// Largest supported year.
pub const MAX_YEAR: i32 = 9999;

/// Gregorian calendar date, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl SolarDate {
    /// Create a date, validating month and day for the given year.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(TimeError::YearOutOfRange(year));
        }
        let max = gregorian_month_days(year, month)?;
        if day == 0 || day > max {
            return Err(TimeError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Create a date from a Julian Day Number.
    pub fn from_day_number(jdn: i64) -> Result<Self, TimeError> {
        let (year, month, day) = civil_from_day_number(jdn);
        Self::new(year, month, day)
    }

    /// Create a date, letting a day past the end of the month spill into
    /// the following month(s). `2023-02-29` becomes `2023-03-01`.
    ///
    /// Month must still be in 1..=12 and day must be at least 1.
    pub fn new_overflowing(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if day == 0 {
            return Err(TimeError::InvalidDay { year, month, day });
        }
        let first = Self::new(year, month, 1)?;
        first.add_days(i64::from(day) - 1)
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// Julian Day Number of this date.
    pub fn day_number(self) -> i64 {
        day_number_from_civil(self.year, self.month, self.day)
    }

    /// Whether this date's year is a Gregorian leap year.
    pub fn is_leap_year(self) -> bool {
        is_gregorian_leap_year(self.year)
    }

    /// Number of days in this date's month.
    pub fn days_in_month(self) -> u32 {
        // month was validated at construction
        gregorian_month_days(self.year, self.month).unwrap_or(31)
    }

    /// Date `days` days later (or earlier, if negative).
    pub fn add_days(self, days: i64) -> Result<Self, TimeError> {
        Self::from_day_number(self.day_number() + days)
    }

    /// Signed number of days from `earlier` to `self`.
    pub fn days_since(self, earlier: SolarDate) -> i64 {
        self.day_number() - earlier.day_number()
    }
}

impl Display for SolarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for SolarDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD` (leading zeros optional in month and day).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Self::new(year, month, day)
    }
}

/// Split `YYYY-MM-DD` into numeric components without calendar validation.
///
/// Used for stored dates whose components are not necessarily Gregorian
/// (e.g. a lunar month/day kept in the same textual shape).
pub fn parse_ymd(s: &str) -> Result<(i32, u32, u32), TimeError> {
    let mut parts = s.trim().split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got {s:?}")));
    };
    let year = parse_component(y, s)?;
    let month = parse_component(m, s)?;
    let day = parse_component(d, s)?;
    let year = i32::try_from(year).map_err(|_| TimeError::YearOutOfRange(i32::MAX))?;
    Ok((year, month, day))
}

fn parse_component(part: &str, whole: &str) -> Result<u32, TimeError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::Parse(format!("non-numeric component in {whole:?}")));
    }
    part.parse::<u32>()
        .map_err(|e| TimeError::Parse(format!("{whole:?}: {e}")))
}
