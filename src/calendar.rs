//! Calendar arithmetic and the national-holiday table.
//!
//! Pure date functions used by the planning board for navigation (week
//! numbers, Monday resolution) and risk highlighting (holidays). Weeks run
//! Monday–Sunday per ISO 8601.
//!
//! # Holidays
//! The table covers the nine nationwide German holidays: five fixed dates
//! plus four dates relative to Easter Sunday, which is computed with the
//! anonymous-Gregorian (Gaussian) computus. Exact for Gregorian years ≥ 1583.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

/// Returns the Monday of the ISO week containing `date`.
///
/// Sundays resolve six days back.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// ISO-8601 week number of `date`.
///
/// The week containing the year's first Thursday is week 1.
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Shifts `date` by `weeks` calendar weeks. Negative values shift backwards.
pub fn add_weeks(date: NaiveDate, weeks: i64) -> NaiveDate {
    date + Duration::weeks(weeks)
}

/// Easter Sunday of `year`, via the anonymous-Gregorian computus.
///
/// The result always falls between March 22 and April 25 inclusive.
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;

    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32).unwrap()
}

/// The nine nationwide German holidays of `year`, keyed by date.
pub fn holidays_for_year(year: i32) -> BTreeMap<NaiveDate, String> {
    let mut holidays = BTreeMap::new();
    let fixed = |m: u32, d: u32| NaiveDate::from_ymd_opt(year, m, d).unwrap();

    holidays.insert(fixed(1, 1), "Neujahr".to_string());
    holidays.insert(fixed(5, 1), "Tag der Arbeit".to_string());
    holidays.insert(fixed(10, 3), "Tag der Deutschen Einheit".to_string());
    holidays.insert(fixed(12, 25), "1. Weihnachtstag".to_string());
    holidays.insert(fixed(12, 26), "2. Weihnachtstag".to_string());

    let easter = easter_sunday(year);
    holidays.insert(easter - Duration::days(2), "Karfreitag".to_string());
    holidays.insert(easter + Duration::days(1), "Ostermontag".to_string());
    holidays.insert(easter + Duration::days(39), "Christi Himmelfahrt".to_string());
    holidays.insert(easter + Duration::days(50), "Pfingstmontag".to_string());

    holidays
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monday_of() {
        // Wednesday
        assert_eq!(monday_of(date(2024, 1, 10)), date(2024, 1, 8));
        // Sunday resolves six days back, not forward
        assert_eq!(monday_of(date(2024, 1, 14)), date(2024, 1, 8));
        // Monday is a fixed point
        assert_eq!(monday_of(date(2024, 1, 8)), date(2024, 1, 8));
    }

    #[test]
    fn test_monday_of_year_boundary() {
        // 2024-01-01 is a Monday; the week of 2023-12-31 (Sunday) starts 2023-12-25
        assert_eq!(monday_of(date(2023, 12, 31)), date(2023, 12, 25));
        assert_eq!(monday_of(date(2024, 1, 1)), date(2024, 1, 1));
    }

    #[test]
    fn test_iso_week_number() {
        assert_eq!(iso_week_number(date(2024, 1, 1)), 1);
        // 2023-01-01 is a Sunday and belongs to 2022's week 52
        assert_eq!(iso_week_number(date(2023, 1, 1)), 52);
        // 2021-01-01 belongs to 2020's week 53
        assert_eq!(iso_week_number(date(2021, 1, 1)), 53);
        assert_eq!(iso_week_number(date(2024, 12, 30)), 1); // 2025-W01
    }

    #[test]
    fn test_iso_week_idempotent_under_monday_of() {
        let mut d = date(2023, 1, 1);
        let end = date(2025, 1, 1);
        while d < end {
            assert_eq!(
                iso_week_number(monday_of(d)),
                iso_week_number(d),
                "week mismatch at {d}"
            );
            d += Duration::days(1);
        }
    }

    #[test]
    fn test_add_weeks_rollover() {
        assert_eq!(add_weeks(date(2023, 12, 25), 2), date(2024, 1, 8));
        assert_eq!(add_weeks(date(2024, 1, 8), -2), date(2023, 12, 25));
        assert_eq!(add_weeks(date(2024, 2, 26), 1), date(2024, 3, 4)); // leap February
    }

    #[test]
    fn test_easter_known_years() {
        assert_eq!(easter_sunday(2023), date(2023, 4, 9));
        assert_eq!(easter_sunday(2024), date(2024, 3, 31));
        assert_eq!(easter_sunday(2025), date(2025, 4, 20));
        assert_eq!(easter_sunday(2000), date(2000, 4, 23));
        assert_eq!(easter_sunday(1583), date(1583, 4, 10));
        // Calendar extremes
        assert_eq!(easter_sunday(1818), date(1818, 3, 22));
        assert_eq!(easter_sunday(2038), date(2038, 4, 25));
    }

    #[test]
    fn test_easter_bounds() {
        for year in 1583..=2500 {
            let e = easter_sunday(year);
            let lo = date(year, 3, 22);
            let hi = date(year, 4, 25);
            assert!(e >= lo && e <= hi, "easter {e} out of bounds for {year}");
        }
    }

    #[test]
    fn test_holiday_table_size() {
        for year in [1999, 2024, 2025, 2077] {
            assert_eq!(holidays_for_year(year).len(), 9, "year {year}");
        }
    }

    #[test]
    fn test_holidays_2024() {
        let h = holidays_for_year(2024);
        assert_eq!(h[&date(2024, 1, 1)], "Neujahr");
        assert_eq!(h[&date(2024, 3, 29)], "Karfreitag");
        assert_eq!(h[&date(2024, 4, 1)], "Ostermontag");
        assert_eq!(h[&date(2024, 5, 9)], "Christi Himmelfahrt");
        assert_eq!(h[&date(2024, 5, 20)], "Pfingstmontag");
        assert_eq!(h[&date(2024, 10, 3)], "Tag der Deutschen Einheit");
        assert_eq!(h[&date(2024, 12, 26)], "2. Weihnachtstag");
    }
}
