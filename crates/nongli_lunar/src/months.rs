//! Month enumeration for a lunar year, leap month included.

use crate::error::CalendarError;
use crate::fmt::month_name;
use crate::table::year_encoding;

/// One month of a lunar year, as listed by a month picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthInfo {
    /// Month number 1..=12 (a leap month repeats its ordinary twin's number).
    pub month: u32,
    /// Display name, e.g. 闰二月.
    pub name: String,
    pub is_leap: bool,
    /// 29 or 30.
    pub days: u32,
}

/// All months of lunar `year` in calendar order: twelve ordinary months with
/// the leap month, if any, directly after the ordinary month it follows.
pub fn months_of_year(year: i32) -> Result<Vec<MonthInfo>, CalendarError> {
    let enc = year_encoding(year)?;
    let mut months = Vec::with_capacity(if enc.has_leap_month() { 13 } else { 12 });
    for month in 1..=12 {
        months.push(MonthInfo {
            month,
            name: month_name(month, false),
            is_leap: false,
            days: enc.month_days(month)?,
        });
        if month == enc.leap_month {
            months.push(MonthInfo {
                month,
                name: month_name(month, true),
                is_leap: true,
                days: enc.leap_month_days(),
            });
        }
    }
    Ok(months)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{FIRST_YEAR, LAST_YEAR, leap_month, year_days};

    #[test]
    fn leap_year_has_13_months() {
        let months = months_of_year(2023).unwrap();
        assert_eq!(months.len(), 13);
        assert_eq!(months[1].month, 2);
        assert!(!months[1].is_leap);
        assert_eq!(months[2].month, 2);
        assert!(months[2].is_leap);
        assert_eq!(months[2].name, "闰二月");
        assert_eq!(months[2].days, 29);
        assert_eq!(months[3].name, "三月");
    }

    #[test]
    fn common_year_has_12_months() {
        let months = months_of_year(2024).unwrap();
        assert_eq!(months.len(), 12);
        assert!(months.iter().all(|m| !m.is_leap));
        assert_eq!(months[0].name, "正月");
        assert_eq!(months[11].name, "腊月");
    }

    #[test]
    fn leap_entry_follows_its_twin_every_year() {
        for year in FIRST_YEAR..=LAST_YEAR {
            let months = months_of_year(year).unwrap();
            let leap = leap_month(year).unwrap();
            assert_eq!(months.len(), if leap > 0 { 13 } else { 12 }, "{year}");
            for (i, m) in months.iter().enumerate() {
                if m.is_leap {
                    assert_eq!(m.month, leap, "{year}");
                    assert_eq!(months[i - 1].month, m.month, "{year}");
                    assert!(!months[i - 1].is_leap, "{year}");
                }
            }
            let total: u32 = months.iter().map(|m| m.days).sum();
            assert_eq!(total, year_days(year).unwrap(), "{year}");
        }
    }

    #[test]
    fn out_of_range_year() {
        assert_eq!(months_of_year(2101), Err(CalendarError::InvalidYear(2101)));
    }
}
