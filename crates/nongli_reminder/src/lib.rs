//! Birthday date arithmetic on top of the lunar calendar engine.
//!
//! This crate provides:
//! - Days until the next solar or lunar occurrence of a month/day
//! - Age in completed years and Western zodiac signs
//! - Birthday records in their persisted `YYYY-MM-DD` + lunar-flag shape
//! - Countdown labels, display text and summary counts
//!
//! Lunar birthdays are stored without a leap flag and always resolve to the
//! ordinary month; a day missing in the target year falls back to the
//! month's last day.
//!
//! ```
//! use nongli_reminder::{DateKind, days_until_next_occurrence};
//! use nongli_time::SolarDate;
//!
//! let today = SolarDate::new(2026, 10, 18).unwrap();
//! assert_eq!(days_until_next_occurrence(10, 19, DateKind::Solar, today).unwrap(), 1);
//! // 2026-10-18 is lunar 九月初九
//! assert_eq!(days_until_next_occurrence(9, 9, DateKind::Lunar, today).unwrap(), 0);
//! ```

pub mod age;
pub mod config;
pub mod countdown;
pub mod countdown_types;
pub mod error;
pub mod label;
pub mod record;
pub mod summary;
pub mod zodiac;

pub use age::age;
pub use config::{DEFAULT_SOON_DAYS, ReminderConfig};
pub use countdown::{days_until_next_occurrence, lunar_occurrence, next_occurrence};
pub use countdown_types::{CountdownLabel, DateKind};
pub use error::ReminderError;
pub use label::format_birthday;
pub use record::{BirthdayRecord, StoredDate};
pub use summary::{Summary, filter_by_relation, sort_by_next_occurrence};
pub use zodiac::{ALL_SIGNS, ZodiacSign, zodiac_sign};
