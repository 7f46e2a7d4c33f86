//! Error types for lunar calendar lookups and conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

use nongli_time::{TimeError, gregorian_month_days};

use crate::table::{FIRST_YEAR, LAST_YEAR};

/// Errors from the lunar table or from solar/lunar conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Year outside the table range 1900..=2100.
    InvalidYear(i32),
    /// Month outside 1..=12.
    InvalidMonth(u32),
    /// Day outside 1..=`max` for the resolved month.
    InvalidDay { day: u32, max: u32 },
    /// Leap flag set but the year has no leap month with this number.
    InvalidLeapMonth { year: i32, month: u32 },
    /// Gregorian date earlier than 1900-01-31 (lunar 1900-01-01).
    DateBeforeEpoch,
    /// Gregorian date parsing failed.
    Time(TimeError),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidYear(y) => {
                write!(f, "invalid year: {y} ({FIRST_YEAR}-{LAST_YEAR})")
            }
            Self::InvalidMonth(m) => write!(f, "invalid month: {m} (1-12)"),
            Self::InvalidDay { day, max } => write!(f, "invalid day: {day} (1-{max})"),
            Self::InvalidLeapMonth { year, month } => {
                write!(f, "lunar year {year} has no leap month {month}")
            }
            Self::DateBeforeEpoch => write!(f, "date is before 1900-01-31"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for CalendarError {}

impl From<TimeError> for CalendarError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::InvalidMonth(m) => Self::InvalidMonth(m),
            TimeError::InvalidDay { year, month, day } => Self::InvalidDay {
                day,
                max: gregorian_month_days(year, month).unwrap_or(0),
            },
            TimeError::YearOutOfRange(y) => Self::InvalidYear(y),
            other => Self::Time(other),
        }
    }
}
