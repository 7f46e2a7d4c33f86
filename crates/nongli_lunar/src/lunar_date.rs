//! Lunar calendar date value.

use std::fmt::{Display, Formatter};

use nongli_time::SolarDate;

use crate::convert::lunar_to_solar;
use crate::cycle::{StemBranch, ZodiacAnimal};
use crate::error::CalendarError;
use crate::fmt::{day_name, month_name, year_to_chinese_numeral};

/// A date in the Chinese lunar calendar.
///
/// Produced by [`crate::solar_to_lunar`] (with `solar` set to the Gregorian
/// input) or validated through [`LunarDate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    /// Lunar year, 1900..=2100.
    pub year: i32,
    /// Month number 1..=12; for a leap month, the ordinary month it follows.
    pub month: u32,
    /// Day of month, 1..=30.
    pub day: u32,
    /// Whether `month` is the intercalary (leap) month.
    pub is_leap: bool,
    /// Gregorian date this value was converted from, if any.
    pub solar: Option<SolarDate>,
}

impl LunarDate {
    /// Create a lunar date, validating it against the table.
    pub fn new(year: i32, month: u32, day: u32, is_leap: bool) -> Result<Self, CalendarError> {
        let solar = lunar_to_solar(year, month, day, is_leap)?;
        Ok(Self {
            year,
            month,
            day,
            is_leap,
            solar: Some(solar),
        })
    }

    /// `(year, month, day, is_leap)` without the Gregorian pass-through.
    pub fn components(&self) -> (i32, u32, u32, bool) {
        (self.year, self.month, self.day, self.is_leap)
    }

    /// Gregorian date of this lunar date.
    pub fn to_solar(&self) -> Result<SolarDate, CalendarError> {
        match self.solar {
            Some(s) => Ok(s),
            None => lunar_to_solar(self.year, self.month, self.day, self.is_leap),
        }
    }

    /// Month name, e.g. 闰二月.
    pub fn month_name(&self) -> String {
        month_name(self.month, self.is_leap)
    }

    /// Day name, e.g. 初一.
    pub fn day_name(&self) -> &'static str {
        day_name(self.day)
    }

    /// Year numeral, e.g. 二〇二三.
    pub fn year_numeral(&self) -> String {
        year_to_chinese_numeral(self.year)
    }

    pub fn zodiac(&self) -> ZodiacAnimal {
        ZodiacAnimal::from_year(self.year)
    }

    pub fn stem_branch(&self) -> StemBranch {
        StemBranch::from_year(self.year)
    }
}

impl Display for LunarDate {
    /// `二〇二三年闰二月初一`
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}年{}{}",
            self.year_numeral(),
            self.month_name(),
            self.day_name()
        )
    }
}
