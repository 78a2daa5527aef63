use pascha_calendar::{Calendar, CalendarError, CivilDate};

/// Walks every day of `year` in `calendar`.
fn days_of_year(calendar: Calendar, year: i64) -> Vec<CivilDate> {
    let mut out = Vec::new();
    for month in 1..=12u8 {
        let max_day = calendar.days_in_month(year, month).unwrap();
        for day in 1..=max_day {
            out.push(CivilDate::new(calendar, year, month, day).unwrap());
        }
    }
    out
}

#[test]
fn roundtrip_between_all_calendars() {
    for from in Calendar::ALL {
        for to in Calendar::ALL {
            for year in [1, 325, 1582, 1600, 1900, 2000, 2024, 2100, 2800, 3000] {
                for date in days_of_year(from, year) {
                    let there = from.convert(date, to).unwrap();
                    let back = to.convert(there, from).unwrap();
                    assert_eq!(
                        back, date,
                        "{from} -> {to} -> {from} changed {date} (via {there})"
                    );
                }
            }
        }
    }
}

#[test]
fn roundtrip_negative_years() {
    for from in Calendar::ALL {
        for to in Calendar::ALL {
            for date in days_of_year(from, -500) {
                let there = from.convert(date, to).unwrap();
                assert_eq!(to.convert(there, from).unwrap(), date);
            }
        }
    }
}

#[test]
fn consecutive_days_have_consecutive_numbers() {
    for calendar in Calendar::ALL {
        for year in [-1, 0, 1, 1999, 2000] {
            let days = days_of_year(calendar, year);
            let numbers: Vec<i64> = days.iter().map(|d| calendar.to_jdn(*d).unwrap()).collect();
            for pair in numbers.windows(2) {
                assert_eq!(pair[1] - pair[0], 1, "{calendar} {year}");
            }
            let next = CivilDate::new(calendar, year + 1, 1, 1).unwrap();
            assert_eq!(
                calendar.to_jdn(next).unwrap() - numbers[numbers.len() - 1],
                1,
                "{calendar} year boundary after {year}"
            );
        }
    }
}

#[test]
fn julian_gregorian_gap_grows_by_century() {
    // (Gregorian year of March 1, expected Julian lag in days)
    let cases: &[(i64, i64)] = &[(1582, 10), (1700, 11), (1800, 12), (1900, 13), (2100, 14)];
    for &(year, lag) in cases {
        let greg = CivilDate::new(Calendar::Gregorian, year, 3, 1).unwrap();
        let julian = Calendar::Gregorian.convert(greg, Calendar::Julian).unwrap();
        let greg_jdn = Calendar::Gregorian.to_jdn(greg).unwrap();
        let same_label_julian = CivilDate::new(Calendar::Julian, year, 3, 1).unwrap();
        assert_eq!(
            Calendar::Julian.to_jdn(same_label_julian).unwrap() - greg_jdn,
            lag,
            "lag in {year}"
        );
        assert_eq!(Calendar::Julian.to_jdn(julian).unwrap(), greg_jdn);
    }
}

#[test]
fn revised_julian_equals_gregorian_for_modern_dates() {
    for year in [1700, 1900, 2000, 2024, 2400, 2799] {
        for date in days_of_year(Calendar::Gregorian, year) {
            assert_eq!(
                Calendar::Gregorian.convert(date, Calendar::RevisedJulian).unwrap(),
                date
            );
        }
    }
}

#[test]
fn conversion_of_unrepresentable_source_is_date_range() {
    let far = CivilDate::new(Calendar::Julian, i64::MAX, 6, 1).unwrap();
    assert!(matches!(
        Calendar::Julian.convert(far, Calendar::Gregorian),
        Err(CalendarError::DateRange { .. })
    ));
}
