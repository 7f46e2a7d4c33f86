//! Tunables for countdown classification.

/// Default window, in days, for a birthday to count as "soon".
pub const DEFAULT_SOON_DAYS: u32 = 7;

/// Configuration for countdown labels and summary statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderConfig {
    /// Countdowns in `1..=soon_days` are labelled soon and counted as
    /// upcoming.
    pub soon_days: u32,
}

impl ReminderConfig {
    pub fn new(soon_days: u32) -> Self {
        Self { soon_days }
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            soon_days: DEFAULT_SOON_DAYS,
        }
    }
}
