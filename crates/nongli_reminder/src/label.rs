//! Display text for birthdays.

use nongli_lunar::{CalendarError, day_name, month_name, year_to_chinese_numeral};

use crate::countdown_types::DateKind;
use crate::error::ReminderError;
use crate::record::BirthdayRecord;

/// Render the stored birthday.
///
/// Lunar: `农历 二〇二三年 二月 初一`. Solar: `1990年5月12日`. Lunar
/// components outside month 1..=12 or day 1..=30 cannot be named and are
/// rejected.
pub fn format_birthday(record: &BirthdayRecord) -> Result<String, ReminderError> {
    let d = record.date;
    match record.kind {
        DateKind::Solar => Ok(format!("{}年{}月{}日", d.year, d.month, d.day)),
        DateKind::Lunar => {
            if !(1..=12).contains(&d.month) {
                return Err(CalendarError::InvalidMonth(d.month).into());
            }
            if !(1..=30).contains(&d.day) {
                return Err(CalendarError::InvalidDay { day: d.day, max: 30 }.into());
            }
            Ok(format!(
                "农历 {}年 {} {}",
                year_to_chinese_numeral(d.year),
                month_name(d.month, false),
                day_name(d.day)
            ))
        }
    }
}
