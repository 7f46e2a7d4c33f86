//! Error types for birthday date arithmetic.

use std::error::Error;
use std::fmt::{Display, Formatter};

use nongli_lunar::CalendarError;
use nongli_time::TimeError;

/// Errors from countdown, age or record handling.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReminderError {
    /// Error from the lunar calendar engine.
    Calendar(CalendarError),
    /// Error from Gregorian date construction or parsing.
    Time(TimeError),
}

impl Display for ReminderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for ReminderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Calendar(e) => Some(e),
            Self::Time(e) => Some(e),
        }
    }
}

impl From<CalendarError> for ReminderError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}

impl From<TimeError> for ReminderError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
