//! Chinese lunar calendar for 1900..=2100.
//!
//! This crate provides:
//! - The precomputed 201-year table with its decoders (leap month, month and
//!   year lengths)
//! - Solar ↔ lunar date conversion anchored on 1900-01-31 = lunar 1900-01-01
//! - Chinese rendering of year numerals, month and day names
//! - Zodiac animals and stem-branch year names
//! - Month enumeration for date pickers
//!
//! All data is compile-time constant; every function is pure.
//!
//! ```
//! use nongli_lunar::{lunar_to_solar, solar_to_lunar_ymd};
//!
//! let d = solar_to_lunar_ymd(2023, 3, 22).unwrap();
//! assert_eq!((d.year, d.month, d.day, d.is_leap), (2023, 2, 1, true));
//! assert_eq!(d.to_string(), "二〇二三年闰二月初一");
//!
//! let s = lunar_to_solar(2023, 2, 1, true).unwrap();
//! assert_eq!(s.to_string(), "2023-03-22");
//! ```

pub mod convert;
pub mod cycle;
pub mod error;
pub mod fmt;
pub mod lunar_date;
pub mod months;
pub mod table;

pub use convert::{EPOCH, lunar_to_solar, solar_to_lunar, solar_to_lunar_ymd};
pub use cycle::{
    ALL_ANIMALS, ALL_BRANCHES, ALL_STEMS, EarthlyBranch, HeavenlyStem, StemBranch, ZodiacAnimal,
    stem_branch_year_name, zodiac_animal,
};
pub use error::CalendarError;
pub use fmt::{day_name, month_name, year_to_chinese_numeral};
pub use lunar_date::LunarDate;
pub use months::{MonthInfo, months_of_year};
pub use table::{
    FIRST_YEAR, LAST_YEAR, YearEncoding, gregorian_month_days, is_gregorian_leap_year,
    leap_month, leap_month_days, month_days, year_days, year_encoding,
};

// Re-export the Gregorian date type so callers don't need nongli_time directly.
pub use nongli_time::SolarDate;
