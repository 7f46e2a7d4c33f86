//! Error types for Gregorian date construction and parsing.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Gregorian date validation or ISO date parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Year outside the supported `1..=9999` range.
    YearOutOfRange(i32),
    /// Month outside 1..=12.
    InvalidMonth(u32),
    /// Day outside the length of the given month.
    InvalidDay { year: i32, month: u32, day: u32 },
    /// Text is not a `YYYY-MM-DD` date.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearOutOfRange(y) => write!(f, "year out of range: {y} (1-9999)"),
            Self::InvalidMonth(m) => write!(f, "invalid month: {m} (1-12)"),
            Self::InvalidDay { year, month, day } => {
                write!(f, "invalid day: {year:04}-{month:02} has no day {day}")
            }
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
