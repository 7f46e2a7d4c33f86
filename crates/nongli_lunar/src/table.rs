//! Static lunar calendar table for 1900..=2100 and its decoders.
//!
//! Each year is packed into 17 bits:
//!
//! | Bits   | Meaning                                              |
//! |--------|------------------------------------------------------|
//! | 0..=3  | leap month number, 0 = no leap month                 |
//! | 4..=15 | ordinary month lengths, month 1 at bit 15, 1 = 30 d  |
//! | 16     | leap month length, 1 = 30 days, 0 = 29 days          |
//!
//! Data: Hong Kong Observatory tables as distributed with common
//! lunisolar converters.

use crate::error::CalendarError;

/// First year covered by the table.
pub const FIRST_YEAR: i32 = 1900;
/// Last year covered by the table.
pub const LAST_YEAR: i32 = 2100;
/// Number of years in the table.
pub const YEAR_COUNT: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize;

const LEAP_MONTH_MASK: u32 = 0xf;
const MONTH_BITS_MASK: u32 = 0xfff0;
const LONG_LEAP_BIT: u32 = 0x1_0000;

/// Packed year records, index 0 = 1900.
#[rustfmt::skip]
const LUNAR_INFO: [u32; YEAR_COUNT] = [
    0x0_4bd8, 0x0_4ae0, 0x0_a570, 0x0_54d5, 0x0_d260, 0x0_d950, 0x1_6554, 0x0_56a0, 0x0_9ad0, 0x0_55d2, // 1900-1909
    0x0_4ae0, 0x0_a5b6, 0x0_a4d0, 0x0_d250, 0x1_d255, 0x0_b540, 0x0_d6a0, 0x0_ada2, 0x0_95b0, 0x1_4977, // 1910-1919
    0x0_4970, 0x0_a4b0, 0x0_b4b5, 0x0_6a50, 0x0_6d40, 0x1_ab54, 0x0_2b60, 0x0_9570, 0x0_52f2, 0x0_4970, // 1920-1929
    0x0_6566, 0x0_d4a0, 0x0_ea50, 0x0_6e95, 0x0_5ad0, 0x0_2b60, 0x1_86e3, 0x0_92e0, 0x1_c8d7, 0x0_c950, // 1930-1939
    0x0_d4a0, 0x1_d8a6, 0x0_b550, 0x0_56a0, 0x1_a5b4, 0x0_25d0, 0x0_92d0, 0x0_d2b2, 0x0_a950, 0x0_b557, // 1940-1949
    0x0_6ca0, 0x0_b550, 0x1_5355, 0x0_4da0, 0x0_a5b0, 0x1_4573, 0x0_52b0, 0x0_a9a8, 0x0_e950, 0x0_6aa0, // 1950-1959
    0x0_aea6, 0x0_ab50, 0x0_4b60, 0x0_aae4, 0x0_a570, 0x0_5260, 0x0_f263, 0x0_d950, 0x0_5b57, 0x0_56a0, // 1960-1969
    0x0_96d0, 0x0_4dd5, 0x0_4ad0, 0x0_a4d0, 0x0_d4d4, 0x0_d250, 0x0_d558, 0x0_b540, 0x0_b6a0, 0x1_95a6, // 1970-1979
    0x0_95b0, 0x0_49b0, 0x0_a974, 0x0_a4b0, 0x0_b27a, 0x0_6a50, 0x0_6d40, 0x0_af46, 0x0_ab60, 0x0_9570, // 1980-1989
    0x0_4af5, 0x0_4970, 0x0_64b0, 0x0_74a3, 0x0_ea50, 0x0_6b58, 0x0_5ac0, 0x0_ab60, 0x0_96d5, 0x0_92e0, // 1990-1999
    0x0_c960, 0x0_d954, 0x0_d4a0, 0x0_da50, 0x0_7552, 0x0_56a0, 0x0_abb7, 0x0_25d0, 0x0_92d0, 0x0_cab5, // 2000-2009
    0x0_a950, 0x0_b4a0, 0x0_baa4, 0x0_ad50, 0x0_55d9, 0x0_4ba0, 0x0_a5b0, 0x1_5176, 0x0_52b0, 0x0_a930, // 2010-2019
    0x0_7954, 0x0_6aa0, 0x0_ad50, 0x0_5b52, 0x0_4b60, 0x0_a6e6, 0x0_a4e0, 0x0_d260, 0x0_ea65, 0x0_d530, // 2020-2029
    0x0_5aa0, 0x0_76a3, 0x0_96d0, 0x0_4afb, 0x0_4ad0, 0x0_a4d0, 0x1_d0b6, 0x0_d250, 0x0_d520, 0x0_dd45, // 2030-2039
    0x0_b5a0, 0x0_56d0, 0x0_55b2, 0x0_49b0, 0x0_a577, 0x0_a4b0, 0x0_aa50, 0x1_b255, 0x0_6d20, 0x0_ada0, // 2040-2049
    0x1_4b63, 0x0_9370, 0x0_49f8, 0x0_4970, 0x0_64b0, 0x1_68a6, 0x0_ea50, 0x0_6b20, 0x1_a6c4, 0x0_aae0, // 2050-2059
    0x0_92e0, 0x0_d2e3, 0x0_c960, 0x0_d557, 0x0_d4a0, 0x0_da50, 0x0_5d55, 0x0_56a0, 0x0_a6d0, 0x0_55d4, // 2060-2069
    0x0_52d0, 0x0_a9b8, 0x0_a950, 0x0_b4a0, 0x0_b6a6, 0x0_ad50, 0x0_55a0, 0x0_aba4, 0x0_a5b0, 0x0_52b0, // 2070-2079
    0x0_b273, 0x0_6930, 0x0_7337, 0x0_6aa0, 0x0_ad50, 0x1_4b55, 0x0_4b60, 0x0_a570, 0x0_54e4, 0x0_d160, // 2080-2089
    0x0_e968, 0x0_d520, 0x0_daa0, 0x1_6aa6, 0x0_56d0, 0x0_4ae0, 0x0_a9d4, 0x0_a4d0, 0x0_d150, 0x0_f252, // 2090-2099
    0x0_d520, // 2100
];

/// Unpacked lunar year record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearEncoding {
    /// Leap month number (1..=12), or 0 when the year has none.
    pub leap_month: u32,
    /// Leap month has 30 days (meaningless when `leap_month == 0`).
    pub leap_month_is_long: bool,
    /// Ordinary month lengths, index 0 = month 1; `true` = 30 days.
    pub month_is_long: [bool; 12],
}

impl YearEncoding {
    /// Unpack a table record.
    pub const fn from_bits(bits: u32) -> Self {
        let mut month_is_long = [false; 12];
        let mut i = 0;
        while i < 12 {
            month_is_long[i] = bits & (0x8000 >> i) != 0;
            i += 1;
        }
        Self {
            leap_month: bits & LEAP_MONTH_MASK,
            leap_month_is_long: bits & LONG_LEAP_BIT != 0,
            month_is_long,
        }
    }

    /// Whether the year contains a leap month.
    pub const fn has_leap_month(&self) -> bool {
        self.leap_month != 0
    }

    /// Leap month length: 0, 29 or 30.
    pub const fn leap_month_days(&self) -> u32 {
        match (self.leap_month, self.leap_month_is_long) {
            (0, _) => 0,
            (_, true) => 30,
            (_, false) => 29,
        }
    }

    /// Length of ordinary month `month` (1..=12): 29 or 30.
    pub fn month_days(&self, month: u32) -> Result<u32, CalendarError> {
        let idx = month
            .checked_sub(1)
            .filter(|i| *i < 12)
            .ok_or(CalendarError::InvalidMonth(month))?;
        Ok(if self.month_is_long[idx as usize] { 30 } else { 29 })
    }

    /// Total days in the year, leap month included.
    pub fn year_days(&self) -> u32 {
        let long = self.month_is_long.iter().filter(|l| **l).count() as u32;
        12 * 29 + long + self.leap_month_days()
    }
}

const fn packed_year_days(bits: u32) -> u32 {
    let leap = if bits & LEAP_MONTH_MASK == 0 {
        0
    } else if bits & LONG_LEAP_BIT != 0 {
        30
    } else {
        29
    };
    12 * 29 + (bits & MONTH_BITS_MASK).count_ones() + leap
}

/// Days from the epoch (lunar 1900-01-01) to each lunar new year.
///
/// Entry `i` is the offset of year `FIRST_YEAR + i`; the final entry is the
/// offset one past the end of `LAST_YEAR`.
const NEW_YEAR_OFFSETS: [u32; YEAR_COUNT + 1] = {
    let mut offsets = [0u32; YEAR_COUNT + 1];
    let mut i = 0;
    while i < YEAR_COUNT {
        offsets[i + 1] = offsets[i] + packed_year_days(LUNAR_INFO[i]);
        i += 1;
    }
    offsets
};

fn packed(year: i32) -> Result<u32, CalendarError> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return Err(CalendarError::InvalidYear(year));
    }
    Ok(LUNAR_INFO[(year - FIRST_YEAR) as usize])
}

/// Unpacked table record for `year`.
pub fn year_encoding(year: i32) -> Result<YearEncoding, CalendarError> {
    packed(year).map(YearEncoding::from_bits)
}

/// Leap month of `year` (1..=12), or 0 when there is none.
pub fn leap_month(year: i32) -> Result<u32, CalendarError> {
    Ok(packed(year)? & LEAP_MONTH_MASK)
}

/// Length of the leap month of `year`: 0, 29 or 30.
pub fn leap_month_days(year: i32) -> Result<u32, CalendarError> {
    Ok(year_encoding(year)?.leap_month_days())
}

/// Length of ordinary month `month` of `year`: 29 or 30.
pub fn month_days(year: i32, month: u32) -> Result<u32, CalendarError> {
    year_encoding(year)?.month_days(month)
}

/// Total days in lunar `year`.
pub fn year_days(year: i32) -> Result<u32, CalendarError> {
    Ok(packed_year_days(packed(year)?))
}

/// Days from the epoch to lunar new year's day of `year`.
pub fn new_year_offset(year: i32) -> Result<u32, CalendarError> {
    packed(year)?;
    Ok(NEW_YEAR_OFFSETS[(year - FIRST_YEAR) as usize])
}

/// Days from the epoch to the day after the last day of `LAST_YEAR`.
pub fn table_span_days() -> u32 {
    NEW_YEAR_OFFSETS[YEAR_COUNT]
}

pub use nongli_time::is_gregorian_leap_year;

/// Gregorian month length, February adjusted for leap years.
pub fn gregorian_month_days(year: i32, month: u32) -> Result<u32, CalendarError> {
    Ok(nongli_time::gregorian_month_days(year, month)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_201_years() {
        assert_eq!(LUNAR_INFO.len(), 201);
        assert_eq!(YEAR_COUNT, 201);
    }

    #[test]
    fn out_of_range_years_rejected() {
        assert_eq!(leap_month(1899), Err(CalendarError::InvalidYear(1899)));
        assert_eq!(year_days(2101), Err(CalendarError::InvalidYear(2101)));
        assert_eq!(month_days(2101, 1), Err(CalendarError::InvalidYear(2101)));
        assert_eq!(leap_month_days(1800), Err(CalendarError::InvalidYear(1800)));
        assert!(leap_month(1900).is_ok());
        assert!(leap_month(2100).is_ok());
    }

    #[test]
    fn known_leap_months() {
        assert_eq!(leap_month(1900), Ok(8));
        assert_eq!(leap_month(2017), Ok(6));
        assert_eq!(leap_month(2020), Ok(4));
        assert_eq!(leap_month(2023), Ok(2));
        assert_eq!(leap_month(2024), Ok(0));
        assert_eq!(leap_month(2025), Ok(6));
        assert_eq!(leap_month(2033), Ok(11));
    }

    #[test]
    fn leap_month_lengths() {
        assert_eq!(leap_month_days(2017), Ok(30));
        assert_eq!(leap_month_days(2023), Ok(29));
        assert_eq!(leap_month_days(2024), Ok(0));
    }

    #[test]
    fn month_lengths_2023() {
        let expected = [29, 30, 29, 30, 30, 29, 30, 30, 29, 30, 29, 30];
        for (m, days) in (1..=12).zip(expected) {
            assert_eq!(month_days(2023, m), Ok(days), "month {m}");
        }
    }

    #[test]
    fn month_out_of_range() {
        assert_eq!(month_days(2023, 0), Err(CalendarError::InvalidMonth(0)));
        assert_eq!(month_days(2023, 13), Err(CalendarError::InvalidMonth(13)));
    }

    #[test]
    fn known_year_lengths() {
        assert_eq!(year_days(1900), Ok(384));
        assert_eq!(year_days(1901), Ok(354));
        assert_eq!(year_days(2023), Ok(384));
        assert_eq!(year_days(2024), Ok(354));
        assert_eq!(year_days(2100), Ok(354));
    }

    #[test]
    fn year_lengths_within_lunar_bounds() {
        for year in FIRST_YEAR..=LAST_YEAR {
            let days = year_days(year).unwrap();
            assert!((353..=385).contains(&days), "{year}: {days}");
            let enc = year_encoding(year).unwrap();
            assert_eq!(enc.year_days(), days, "{year}");
            let expected_leap = if enc.has_leap_month() { 383..=385 } else { 353..=355 };
            assert!(expected_leap.contains(&days), "{year}: {days}");
        }
    }

    #[test]
    fn leap_month_numbers_in_range() {
        let mut count = 0;
        for year in FIRST_YEAR..=LAST_YEAR {
            let leap = leap_month(year).unwrap();
            assert!(leap <= 12);
            if leap != 0 {
                count += 1;
            }
        }
        assert_eq!(count, 74);
    }

    #[test]
    fn decoded_record_matches_accessors() {
        let enc = year_encoding(2023).unwrap();
        assert_eq!(enc.leap_month, 2);
        assert!(!enc.leap_month_is_long);
        assert!(!enc.month_is_long[0]);
        assert!(enc.month_is_long[1]);
        assert!(enc.month_is_long[11]);
    }

    #[test]
    fn new_year_offsets_accumulate_year_lengths() {
        let mut sum = 0;
        for year in FIRST_YEAR..=LAST_YEAR {
            assert_eq!(new_year_offset(year), Ok(sum), "{year}");
            sum += year_days(year).unwrap();
        }
        assert_eq!(table_span_days(), sum);
        assert_eq!(sum, 73_412);
    }

    #[test]
    fn gregorian_helpers() {
        assert!(is_gregorian_leap_year(2000));
        assert!(!is_gregorian_leap_year(1900));
        assert_eq!(gregorian_month_days(2024, 2), Ok(29));
        assert_eq!(gregorian_month_days(2024, 13), Err(CalendarError::InvalidMonth(13)));
    }
}
