//! Age in whole years.

use nongli_time::SolarDate;

/// Completed years between `birth` and `today`.
///
/// A birthday later in the year than today does not count yet. Negative when
/// `birth` lies in the future.
pub fn age(birth: SolarDate, today: SolarDate) -> i32 {
    let years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years - 1
    } else {
        years
    }
}
