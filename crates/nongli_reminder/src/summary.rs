//! Aggregates over a list of birthday records.

use nongli_lunar::lunar_to_solar;
use nongli_time::SolarDate;
use tracing::{debug, warn};

use crate::config::ReminderConfig;
use crate::countdown_types::DateKind;
use crate::record::BirthdayRecord;

/// Counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of records.
    pub total: usize,
    /// Birthdays falling today.
    pub today: usize,
    /// Birthdays in `1..=soon_days` days.
    pub upcoming: usize,
    /// Birthdays whose occurrence this year falls in today's Gregorian month.
    pub this_month: usize,
}

impl Summary {
    /// Compute the counts as of `today`.
    ///
    /// Records whose countdown cannot be computed are logged and left out of
    /// the today/upcoming counts.
    pub fn compute(records: &[BirthdayRecord], today: SolarDate, config: &ReminderConfig) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            match record.days_until(today) {
                Ok(0) => summary.today += 1,
                Ok(d) if d <= config.soon_days => summary.upcoming += 1,
                Ok(_) => {}
                Err(e) => warn!(name = %record.name, date = %record.date, "skipping record: {e}"),
            }
            if falls_in_month(record, today) {
                summary.this_month += 1;
            }
        }
        summary
    }
}

/// Whether the record's birthday in today's year lands in today's month.
///
/// Lunar dates are converted as ordinary months of the lunar year numbered
/// like today's Gregorian year; dates that do not exist that year are not
/// counted.
fn falls_in_month(record: &BirthdayRecord, today: SolarDate) -> bool {
    let d = record.date;
    match record.kind {
        DateKind::Solar => d.month == today.month(),
        DateKind::Lunar => match lunar_to_solar(today.year(), d.month, d.day, false) {
            Ok(solar) => solar.month() == today.month(),
            Err(e) => {
                debug!(name = %record.name, date = %d, "lunar date not in this year: {e}");
                false
            }
        },
    }
}

/// Order records by days until their next birthday, soonest first.
///
/// The sort is stable; records whose countdown fails go last.
pub fn sort_by_next_occurrence(records: &mut [BirthdayRecord], today: SolarDate) {
    records.sort_by_cached_key(|r| r.days_until(today).unwrap_or(u32::MAX));
}

/// Records whose relation equals `relation`.
pub fn filter_by_relation<'a>(
    records: &'a [BirthdayRecord],
    relation: &str,
) -> Vec<&'a BirthdayRecord> {
    records
        .iter()
        .filter(|r| r.relation.as_deref() == Some(relation))
        .collect()
}
