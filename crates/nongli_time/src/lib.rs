//! Gregorian (solar) calendar primitives.
//!
//! This crate provides:
//! - `SolarDate`, a validated proleptic Gregorian calendar date
//! - Leap-year and month-length rules
//! - Day-number arithmetic (serial day ↔ calendar conversions)
//! - ISO `YYYY-MM-DD` parsing and formatting

pub mod error;
pub mod gregorian;
pub mod solar_date;

pub use error::TimeError;
pub use gregorian::{
    civil_from_day_number, day_number_from_civil, gregorian_month_days, is_gregorian_leap_year,
};
pub use solar_date::{MAX_YEAR, MIN_YEAR, SolarDate, parse_ymd};
