//! Birthday records as persisted: a `YYYY-MM-DD` string plus a lunar flag.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use nongli_time::{SolarDate, TimeError, parse_ymd};

use crate::age::age;
use crate::countdown::days_until_next_occurrence;
use crate::countdown_types::DateKind;
use crate::error::ReminderError;
use crate::zodiac::{ZodiacSign, zodiac_sign};

/// Year/month/day as stored, without calendar validation.
///
/// For lunar records the components are a lunar date; whether the month was
/// a leap month is not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoredDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl StoredDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Read the components as a Gregorian date.
    pub fn to_solar(self) -> Result<SolarDate, TimeError> {
        SolarDate::new(self.year, self.month, self.day)
    }
}

impl FromStr for StoredDate {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s)?;
        Ok(Self { year, month, day })
    }
}

impl Display for StoredDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// One person's birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayRecord {
    pub name: String,
    pub date: StoredDate,
    pub kind: DateKind,
    pub relation: Option<String>,
}

impl BirthdayRecord {
    pub fn new(name: impl Into<String>, date: StoredDate, kind: DateKind) -> Self {
        Self {
            name: name.into(),
            date,
            kind,
            relation: None,
        }
    }

    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = Some(relation.into());
        self
    }

    pub fn is_lunar(&self) -> bool {
        self.kind.is_lunar()
    }

    /// Days from `today` to the next birthday, 0 when it is today.
    pub fn days_until(&self, today: SolarDate) -> Result<u32, ReminderError> {
        days_until_next_occurrence(self.date.month, self.date.day, self.kind, today)
    }

    /// Age in completed years.
    ///
    /// The stored components are read as a Gregorian date for lunar records
    /// too, so their age can be off by one around the new year.
    pub fn age(&self, today: SolarDate) -> Result<i32, ReminderError> {
        Ok(age(self.date.to_solar()?, today))
    }

    /// Western sign of the stored month/day.
    pub fn zodiac_sign(&self) -> ZodiacSign {
        zodiac_sign(self.date.month, self.date.day)
    }
}
