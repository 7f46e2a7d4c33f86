//! Gregorian calendar rules and serial day numbers.
//!
//! Day numbers are Julian Day Numbers (JDN): the integer day count whose
//! noon-to-noon day contains the given civil date. Only differences between
//! day numbers matter to callers; the JDN origin is kept so values can be
//! checked against published tables.
//!
//! Conversion formulas: Fliegel & Van Flandern (1968), integer arithmetic,
//! exact for every proleptic Gregorian date with a positive JDN.

use crate::error::TimeError;

/// Day lengths of the twelve months in a common year.
const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap-year test: divisible by 4 and (not by 100, or by 400).
pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month, February adjusted for leap years.
pub fn gregorian_month_days(year: i32, month: u32) -> Result<u32, TimeError> {
    match month {
        2 if is_gregorian_leap_year(year) => Ok(29),
        1..=12 => Ok(MONTH_DAYS[(month - 1) as usize]),
        _ => Err(TimeError::InvalidMonth(month)),
    }
}

/// Julian Day Number of a Gregorian calendar date.
///
/// No validation; out-of-range components are folded arithmetically.
pub const fn day_number_from_civil(year: i32, month: u32, day: u32) -> i64 {
    let (y, m, d) = (year as i64, month as i64, day as i64);
    let a = (m - 14) / 12;
    (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
        - (3 * ((y + 4900 + a) / 100)) / 4
        + d
        - 32075
}

/// Gregorian `(year, month, day)` of a Julian Day Number.
pub fn civil_from_day_number(jdn: i64) -> (i32, u32, u32) {
    let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
    (year as i32, month as u32, day as u32)
}
