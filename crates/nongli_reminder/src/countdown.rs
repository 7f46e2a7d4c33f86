//! Days until the next occurrence of a yearly month/day.
//!
//! Solar month/days recur on the same Gregorian date; lunar month/days are
//! resolved against the lunar year numbered like today's Gregorian year, and
//! the following one once that occurrence has passed.

use nongli_lunar::{CalendarError, lunar_to_solar, month_days};
use nongli_time::SolarDate;
use tracing::{debug, warn};

use crate::countdown_types::DateKind;
use crate::error::ReminderError;

/// Gregorian date of the first occurrence of `(month, day)` on or after
/// `today`.
pub fn next_occurrence(
    month: u32,
    day: u32,
    kind: DateKind,
    today: SolarDate,
) -> Result<SolarDate, ReminderError> {
    let this_year = today.year();
    let occurrence = occurrence_in(this_year, month, day, kind)?;
    if occurrence >= today {
        return Ok(occurrence);
    }
    occurrence_in(this_year + 1, month, day, kind)
}

/// Whole days from `today` to the next occurrence of `(month, day)`.
///
/// 0 means the occurrence is today.
pub fn days_until_next_occurrence(
    month: u32,
    day: u32,
    kind: DateKind,
    today: SolarDate,
) -> Result<u32, ReminderError> {
    let next = next_occurrence(month, day, kind, today)?;
    Ok(next.days_since(today).max(0) as u32)
}

/// Occurrence of `(month, day)` in (Gregorian or lunar) `year`.
fn occurrence_in(
    year: i32,
    month: u32,
    day: u32,
    kind: DateKind,
) -> Result<SolarDate, ReminderError> {
    match kind {
        DateKind::Solar => Ok(solar_occurrence(year, month, day)?),
        DateKind::Lunar => match lunar_occurrence(year, month, day) {
            Err(CalendarError::InvalidYear(_)) => {
                warn!(year, month, day, "lunar table does not cover year, using solar date");
                Ok(solar_occurrence(year, month, day)?)
            }
            other => Ok(other?),
        },
    }
}

/// Gregorian occurrence; a day past the month's end spills into the next
/// month, so Feb 29 falls on Mar 1 in common years.
fn solar_occurrence(year: i32, month: u32, day: u32) -> Result<SolarDate, ReminderError> {
    Ok(SolarDate::new_overflowing(year, month, day)?)
}

/// Gregorian date of ordinary lunar month/day in lunar `year`, clamped to
/// the month's last day when the day does not exist that year.
pub fn lunar_occurrence(year: i32, month: u32, day: u32) -> Result<SolarDate, CalendarError> {
    match lunar_to_solar(year, month, day, false) {
        Err(CalendarError::InvalidDay { .. } | CalendarError::InvalidLeapMonth { .. }) if day > 0 => {
            let last = month_days(year, month)?;
            debug!(year, month, day, last, "lunar day missing, using last day of month");
            lunar_to_solar(year, month, day.min(last), false)
        }
        other => other,
    }
}
