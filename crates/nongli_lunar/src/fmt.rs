//! Chinese textual rendering of lunar years, months and days.
//!
//! Inputs are assumed to come from the table or a validated conversion;
//! out-of-range month and day numbers panic.

/// Digit glyphs 0..=9 used for year numerals.
pub const DIGITS: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

/// Month name stems, index 0 = month 1 (正月), 11 = 腊月.
pub const MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

/// Day names, index 0 = day 1.
pub const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十",
    "十一", "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十",
    "廿一", "廿二", "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// Prefix marking a leap month.
pub const LEAP_PREFIX: &str = "闰";

/// Year written digit by digit, e.g. 2026 → 二〇二六.
///
/// This is not the positional number reading (二千零二十六).
pub fn year_to_chinese_numeral(year: i32) -> String {
    let mut s = String::new();
    if year < 0 {
        s.push('-');
    }
    for c in year.unsigned_abs().to_string().chars() {
        if let Some(d) = c.to_digit(10) {
            s.push(DIGITS[d as usize]);
        }
    }
    s
}

/// Month name with 月 suffix; leap months get the 闰 prefix.
///
/// # Panics
///
/// If `month` is not in `1..=12`.
pub fn month_name(month: u32, is_leap: bool) -> String {
    let stem = MONTH_NAMES[month as usize - 1];
    let mut s = String::with_capacity(9);
    if is_leap {
        s.push_str(LEAP_PREFIX);
    }
    s.push_str(stem);
    s.push('月');
    s
}

/// Day name, 初一 through 三十.
///
/// # Panics
///
/// If `day` is not in `1..=30`.
pub fn day_name(day: u32) -> &'static str {
    DAY_NAMES[day as usize - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_numerals() {
        assert_eq!(year_to_chinese_numeral(2026), "二〇二六");
        assert_eq!(year_to_chinese_numeral(1900), "一九〇〇");
        assert_eq!(year_to_chinese_numeral(2100), "二一〇〇");
    }

    #[test]
    fn month_names() {
        assert_eq!(month_name(1, false), "正月");
        assert_eq!(month_name(10, false), "十月");
        assert_eq!(month_name(11, false), "冬月");
        assert_eq!(month_name(12, false), "腊月");
        assert_eq!(month_name(2, true), "闰二月");
    }

    #[test]
    fn day_names() {
        for (expected, d) in [
            ("初一", 1),
            ("初十", 10),
            ("十一", 11),
            ("二十", 20),
            ("廿一", 21),
            ("廿九", 29),
            ("三十", 30),
        ] {
            assert_eq!(day_name(d), expected);
        }
    }

    #[test]
    #[should_panic]
    fn day_zero_panics() {
        day_name(0);
    }
}
