//! Solar ↔ lunar date conversion.
//!
//! Both directions count days from the epoch 1900-01-31, which is lunar
//! 1900-01-01. Solar → lunar walks the table forward consuming whole years
//! and then whole months; lunar → solar sums the lengths that precede the
//! target date.

use nongli_time::{SolarDate, day_number_from_civil};

use crate::error::CalendarError;
use crate::lunar_date::LunarDate;
use crate::table::{FIRST_YEAR, LAST_YEAR, YearEncoding, new_year_offset, year_days, year_encoding};

/// Gregorian date of lunar 1900-01-01.
pub const EPOCH: (i32, u32, u32) = (1900, 1, 31);

/// Julian Day Number of [`EPOCH`].
pub const EPOCH_DAY_NUMBER: i64 = day_number_from_civil(EPOCH.0, EPOCH.1, EPOCH.2);

/// Convert a Gregorian date to the lunar calendar.
///
/// Fails with `InvalidYear` outside 1900..=2100 and `DateBeforeEpoch` for
/// 1900-01-01..=1900-01-30.
pub fn solar_to_lunar(date: SolarDate) -> Result<LunarDate, CalendarError> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&date.year()) {
        return Err(CalendarError::InvalidYear(date.year()));
    }
    let offset = date.day_number() - EPOCH_DAY_NUMBER;
    if offset < 0 {
        return Err(CalendarError::DateBeforeEpoch);
    }

    let (year, rest) = consume_years(offset)?;
    let (month, day, is_leap) = consume_months(&year_encoding(year)?, rest)?;

    Ok(LunarDate {
        year,
        month,
        day,
        is_leap,
        solar: Some(date),
    })
}

/// [`solar_to_lunar`] from raw Gregorian components.
pub fn solar_to_lunar_ymd(year: i32, month: u32, day: u32) -> Result<LunarDate, CalendarError> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return Err(CalendarError::InvalidYear(year));
    }
    solar_to_lunar(SolarDate::new(year, month, day)?)
}

/// Strip whole lunar years off `offset`; returns the lunar year and the
/// remaining 0-based day offset within it.
fn consume_years(mut offset: i64) -> Result<(i32, i64), CalendarError> {
    let mut year = FIRST_YEAR;
    let mut last = 0;
    while year <= LAST_YEAR && offset > 0 {
        last = i64::from(year_days(year)?);
        offset -= last;
        year += 1;
    }
    // overshot into the next year
    if offset < 0 {
        offset += last;
        year -= 1;
    }
    if year > LAST_YEAR {
        return Err(CalendarError::InvalidYear(year));
    }
    Ok((year, offset))
}

/// Strip whole months off `offset` within one lunar year; returns
/// `(month, day, is_leap)`.
///
/// The leap month is scanned at index `leap + 1` before the ordinary month
/// of that number: the index is stepped back and the leap flag set, and the
/// flag clears when the scan enters ordinary month `leap + 1`.
fn consume_months(
    enc: &YearEncoding,
    mut offset: i64,
) -> Result<(u32, u32, bool), CalendarError> {
    let leap = enc.leap_month;
    let mut is_leap = false;
    let mut month: u32 = 1;
    let mut last = 0;

    while month < 13 && offset > 0 {
        if leap > 0 && month == leap + 1 && !is_leap {
            month -= 1;
            is_leap = true;
            last = i64::from(enc.leap_month_days());
        } else {
            last = i64::from(enc.month_days(month)?);
        }
        if is_leap && month == leap + 1 {
            is_leap = false;
        }
        offset -= last;
        month += 1;
    }

    // Exhausted a month exactly at the leap boundary: the date is the first
    // day of whichever of the pair was not being consumed.
    if offset == 0 && leap > 0 && month == leap + 1 {
        if is_leap {
            is_leap = false;
        } else {
            is_leap = true;
            month -= 1;
        }
    }
    if offset < 0 {
        offset += last;
        month -= 1;
    }

    Ok((month, offset as u32 + 1, is_leap))
}

/// Convert a lunar date to the Gregorian calendar.
///
/// Fails with `InvalidYear`, `InvalidMonth`, `InvalidLeapMonth` when
/// `is_leap_month` is set but `month` is not the year's leap month, or
/// `InvalidDay` when `day` exceeds the month length. Dates at the end of
/// lunar 2100 land in Gregorian 2101.
pub fn lunar_to_solar(
    year: i32,
    month: u32,
    day: u32,
    is_leap_month: bool,
) -> Result<SolarDate, CalendarError> {
    let enc = year_encoding(year)?;
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    if is_leap_month && enc.leap_month != month {
        return Err(CalendarError::InvalidLeapMonth { year, month });
    }
    let max = if is_leap_month {
        enc.leap_month_days()
    } else {
        enc.month_days(month)?
    };
    if day == 0 || day > max {
        return Err(CalendarError::InvalidDay { day, max });
    }

    let mut offset = i64::from(new_year_offset(year)?);
    for m in 1..month {
        offset += i64::from(enc.month_days(m)?);
        if m == enc.leap_month {
            offset += i64::from(enc.leap_month_days());
        }
    }
    // the leap month follows its ordinary twin
    if is_leap_month {
        offset += i64::from(enc.month_days(month)?);
    }
    offset += i64::from(day) - 1;

    Ok(SolarDate::from_day_number(EPOCH_DAY_NUMBER + offset)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunar(y: i32, m: u32, d: u32) -> (i32, u32, u32, bool) {
        solar_to_lunar_ymd(y, m, d).unwrap().components()
    }

    fn solar(y: i32, m: u32, d: u32, leap: bool) -> String {
        lunar_to_solar(y, m, d, leap).unwrap().to_string()
    }

    #[test]
    fn epoch_fixed_point() {
        assert_eq!(lunar(1900, 1, 31), (1900, 1, 1, false));
        assert_eq!(solar(1900, 1, 1, false), "1900-01-31");
    }

    #[test]
    fn before_epoch_rejected() {
        assert_eq!(
            solar_to_lunar_ymd(1900, 1, 30),
            Err(CalendarError::DateBeforeEpoch)
        );
        assert_eq!(
            solar_to_lunar_ymd(1899, 12, 31),
            Err(CalendarError::InvalidYear(1899))
        );
    }

    #[test]
    fn after_range_rejected() {
        assert_eq!(
            solar_to_lunar_ymd(2101, 1, 1),
            Err(CalendarError::InvalidYear(2101))
        );
        assert_eq!(lunar(2100, 12, 31), (2100, 12, 1, false));
    }

    #[test]
    fn invalid_gregorian_input() {
        assert_eq!(
            solar_to_lunar_ymd(2023, 2, 29),
            Err(CalendarError::InvalidDay { day: 29, max: 28 })
        );
        assert_eq!(
            solar_to_lunar_ymd(2023, 13, 1),
            Err(CalendarError::InvalidMonth(13))
        );
    }

    #[test]
    fn lunar_new_years() {
        assert_eq!(lunar(2023, 1, 22), (2023, 1, 1, false));
        assert_eq!(lunar(2024, 2, 10), (2024, 1, 1, false));
        assert_eq!(lunar(2024, 2, 9), (2023, 12, 30, false));
        assert_eq!(lunar(1901, 2, 19), (1901, 1, 1, false));
    }

    #[test]
    fn year_boundary_into_previous_lunar_year() {
        assert_eq!(lunar(2000, 1, 1), (1999, 11, 25, false));
    }

    #[test]
    fn leap_month_boundaries_2023() {
        // 二月 has 30 days, 闰二月 29
        assert_eq!(lunar(2023, 3, 21), (2023, 2, 30, false));
        assert_eq!(lunar(2023, 3, 22), (2023, 2, 1, true));
        assert_eq!(lunar(2023, 4, 19), (2023, 2, 29, true));
        assert_eq!(lunar(2023, 4, 20), (2023, 3, 1, false));
    }

    #[test]
    fn leap_month_boundaries_2020() {
        assert_eq!(lunar(2020, 5, 22), (2020, 4, 30, false));
        assert_eq!(lunar(2020, 5, 23), (2020, 4, 1, true));
        assert_eq!(lunar(2020, 6, 21), (2020, 5, 1, false));
    }

    #[test]
    fn long_leap_month_2017() {
        assert_eq!(lunar(2017, 7, 23), (2017, 6, 1, true));
        assert_eq!(lunar(2017, 8, 21), (2017, 6, 30, true));
        assert_eq!(lunar(2017, 8, 22), (2017, 7, 1, false));
    }

    #[test]
    fn lunar_to_solar_known_dates() {
        assert_eq!(solar(2023, 2, 1, true), "2023-03-22");
        assert_eq!(solar(2023, 3, 1, false), "2023-04-20");
        assert_eq!(solar(2024, 1, 1, false), "2024-02-10");
        assert_eq!(solar(2026, 9, 9, false), "2026-10-18");
    }

    #[test]
    fn lunar_to_solar_validation() {
        assert_eq!(
            lunar_to_solar(1899, 1, 1, false),
            Err(CalendarError::InvalidYear(1899))
        );
        assert_eq!(
            lunar_to_solar(2023, 13, 1, false),
            Err(CalendarError::InvalidMonth(13))
        );
        assert_eq!(
            lunar_to_solar(2023, 0, 1, false),
            Err(CalendarError::InvalidMonth(0))
        );
        assert_eq!(
            lunar_to_solar(2023, 2, 30, true),
            Err(CalendarError::InvalidDay { day: 30, max: 29 })
        );
        assert_eq!(
            lunar_to_solar(2023, 1, 30, false),
            Err(CalendarError::InvalidDay { day: 30, max: 29 })
        );
        assert_eq!(
            lunar_to_solar(2023, 1, 0, false),
            Err(CalendarError::InvalidDay { day: 0, max: 29 })
        );
        assert_eq!(
            lunar_to_solar(2024, 2, 1, true),
            Err(CalendarError::InvalidLeapMonth {
                year: 2024,
                month: 2
            })
        );
    }

    #[test]
    fn end_of_lunar_2100_lands_in_2101() {
        assert_eq!(solar(2100, 12, 29, false), "2101-01-28");
    }

    #[test]
    fn epoch_day_number() {
        assert_eq!(EPOCH_DAY_NUMBER, 2_415_051);
    }
}
