//! Types for birthday countdowns.

use std::fmt::{Display, Formatter};

use crate::config::ReminderConfig;

/// Calendar a stored month/day belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateKind {
    /// Gregorian month/day.
    Solar,
    /// Lunar month/day, always an ordinary (non-leap) month.
    Lunar,
}

impl DateKind {
    /// Map the persisted `lunar` flag (0/1) onto a kind.
    pub fn from_lunar_flag(lunar: bool) -> Self {
        if lunar { Self::Lunar } else { Self::Solar }
    }

    pub fn is_lunar(self) -> bool {
        matches!(self, Self::Lunar)
    }
}

/// Display classification of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownLabel {
    /// The occurrence is today.
    Today,
    /// Within the configured "soon" window.
    Soon(u32),
    /// Further away.
    Later(u32),
}

impl CountdownLabel {
    /// Classify a day count.
    pub fn from_days(days: u32, config: &ReminderConfig) -> Self {
        match days {
            0 => Self::Today,
            d if d <= config.soon_days => Self::Soon(d),
            d => Self::Later(d),
        }
    }

    /// Short category key: `today`, `soon` or `normal`.
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Soon(_) => "soon",
            Self::Later(_) => "normal",
        }
    }

    pub const fn days(self) -> u32 {
        match self {
            Self::Today => 0,
            Self::Soon(d) | Self::Later(d) => d,
        }
    }
}

impl Display for CountdownLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Today => write!(f, "今天生日！🎉"),
            Self::Soon(d) | Self::Later(d) => write!(f, "{d} 天后"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_default_window() {
        let cfg = ReminderConfig::default();
        assert_eq!(CountdownLabel::from_days(0, &cfg), CountdownLabel::Today);
        assert_eq!(CountdownLabel::from_days(1, &cfg), CountdownLabel::Soon(1));
        assert_eq!(CountdownLabel::from_days(7, &cfg), CountdownLabel::Soon(7));
        assert_eq!(CountdownLabel::from_days(8, &cfg), CountdownLabel::Later(8));
    }

    #[test]
    fn classify_custom_window() {
        let cfg = ReminderConfig::new(30);
        assert_eq!(CountdownLabel::from_days(30, &cfg).kind(), "soon");
        assert_eq!(CountdownLabel::from_days(31, &cfg).kind(), "normal");
    }

    #[test]
    fn label_text() {
        let cfg = ReminderConfig::default();
        assert_eq!(CountdownLabel::from_days(0, &cfg).to_string(), "今天生日！🎉");
        assert_eq!(CountdownLabel::from_days(3, &cfg).to_string(), "3 天后");
        assert_eq!(CountdownLabel::from_days(100, &cfg).to_string(), "100 天后");
        assert_eq!(CountdownLabel::from_days(100, &cfg).days(), 100);
    }

    #[test]
    fn lunar_flag() {
        assert_eq!(DateKind::from_lunar_flag(true), DateKind::Lunar);
        assert!(!DateKind::from_lunar_flag(false).is_lunar());
    }
}
