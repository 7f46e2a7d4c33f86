//! Exhaustive round-trip and golden-date tests over the whole table range.

use nongli_lunar::{
    CalendarError, FIRST_YEAR, LAST_YEAR, SolarDate, leap_month, lunar_to_solar, months_of_year,
    solar_to_lunar, solar_to_lunar_ymd,
};

#[test]
fn every_lunar_date_round_trips() {
    let last_solar = SolarDate::new(LAST_YEAR, 12, 31).unwrap();
    let mut checked = 0;
    for year in FIRST_YEAR..=LAST_YEAR {
        for m in months_of_year(year).unwrap() {
            for day in 1..=m.days {
                let solar = lunar_to_solar(year, m.month, day, m.is_leap).unwrap();
                if solar > last_solar {
                    continue;
                }
                let back = solar_to_lunar(solar).unwrap();
                assert_eq!(
                    back.components(),
                    (year, m.month, day, m.is_leap),
                    "lunar {year}-{}-{day} leap={} via {solar}",
                    m.month,
                    m.is_leap
                );
                checked += 1;
            }
        }
    }
    assert_eq!(checked, 73_384);
}

#[test]
fn every_solar_date_round_trips() {
    let mut date = SolarDate::new(1900, 1, 31).unwrap();
    let last = SolarDate::new(LAST_YEAR, 12, 31).unwrap();
    let mut prev: Option<(i32, u32, u32, bool)> = None;
    loop {
        let l = solar_to_lunar(date).unwrap();
        assert_eq!(l.solar, Some(date));
        let back = lunar_to_solar(l.year, l.month, l.day, l.is_leap).unwrap();
        assert_eq!(back, date, "{date} -> {l:?}");

        // consecutive days either advance the lunar day or start a new month
        if let Some((_, _, pd, _)) = prev {
            assert!(l.day == pd + 1 || l.day == 1, "{date}: {pd} -> {}", l.day);
        }
        prev = Some(l.components());

        if date == last {
            break;
        }
        date = date.add_days(1).unwrap();
    }
}

#[test]
fn lunar_new_year_golden() {
    let golden = [
        (1900, "1900-01-31"),
        (1949, "1949-01-29"),
        (1976, "1976-01-31"),
        (2000, "2000-02-05"),
        (2008, "2008-02-07"),
        (2033, "2033-01-31"),
        (2050, "2050-01-23"),
        (2099, "2099-01-21"),
        (2100, "2100-02-09"),
    ];
    for (year, expected) in golden {
        let solar = lunar_to_solar(year, 1, 1, false).unwrap();
        assert_eq!(solar.to_string(), expected, "lunar new year {year}");
    }
}

#[test]
fn leap_month_starts_golden() {
    let golden = [
        (1900, 8, "1900-09-24"),
        (2017, 6, "2017-07-23"),
        (2020, 4, "2020-05-23"),
        (2023, 2, "2023-03-22"),
        (2025, 6, "2025-07-25"),
        (2033, 11, "2033-12-22"),
    ];
    for (year, month, expected) in golden {
        assert_eq!(leap_month(year), Ok(month));
        let solar = lunar_to_solar(year, month, 1, true).unwrap();
        assert_eq!(solar.to_string(), expected, "leap {year}-{month}");
        let back = solar_to_lunar(solar).unwrap();
        assert!(back.is_leap);
        assert_eq!(back.month, month);
    }
}

#[test]
fn exact_zero_boundary_pins() {
    // Offset exhausted exactly at the end of ordinary 二月: first day of 闰二月.
    let l = solar_to_lunar_ymd(2023, 3, 22).unwrap();
    assert_eq!(l.components(), (2023, 2, 1, true));
    // Offset exhausted exactly at the end of 闰二月: first day of 三月.
    let l = solar_to_lunar_ymd(2023, 4, 20).unwrap();
    assert_eq!(l.components(), (2023, 3, 1, false));
    // The days either side stay in their own months.
    let l = solar_to_lunar_ymd(2023, 3, 21).unwrap();
    assert_eq!(l.components(), (2023, 2, 30, false));
    let l = solar_to_lunar_ymd(2023, 4, 19).unwrap();
    assert_eq!(l.components(), (2023, 2, 29, true));
}

#[test]
fn invalid_inputs() {
    assert_eq!(
        lunar_to_solar(1899, 1, 1, false),
        Err(CalendarError::InvalidYear(1899))
    );
    assert!(lunar_to_solar(2023, 2, 30, true).is_err());
    assert_eq!(
        solar_to_lunar_ymd(1900, 1, 1),
        Err(CalendarError::DateBeforeEpoch)
    );
}
