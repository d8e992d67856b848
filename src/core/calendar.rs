//! ISO-8601 week bucketing.
//!
//! Pure functions: no database access. The store uses them to compute the
//! `week_number` of a new work day and to pre-populate the `Week` table.

use crate::errors::{AppError, AppResult};
use crate::models::{WeekId, WeekRecord};
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// ISO week id (`YYYY-WW`) of `date`.
///
/// Near January 1 the ISO year can differ from the calendar year:
/// 2021-01-01 belongs to `2020-53`, 2025-12-29 to `2026-01`.
/// Dates whose ISO year has no 4-digit form fail with `InvalidWeekId`.
pub fn week_id_for(date: NaiveDate) -> AppResult<WeekId> {
    WeekId::for_date(date)
}

/// First and last calendar day (Monday, Sunday) of `week`.
pub fn week_bounds(week: &WeekId) -> (NaiveDate, NaiveDate) {
    (week.start_date(), week.end_date())
}

/// Generate every week from ISO week 1 of `start_year` up to, but excluding,
/// the first week whose ISO year is `end_year`.
///
/// Consecutive records are adjacent: `prev.end_date + 1 day == next.start_date`.
/// Returns an empty list when `start_year >= end_year`. Every generated
/// year must lie in `WeekId::YEARS`, otherwise nothing is generated and
/// `InvalidWeekId` is returned.
pub fn generate_weeks(start_year: i32, end_year: i32) -> AppResult<Vec<WeekRecord>> {
    let mut out = Vec::new();
    if start_year >= end_year {
        return Ok(out);
    }

    let years = WeekId::YEARS;
    if !years.contains(&start_year) || !years.contains(&(end_year - 1)) {
        return Err(AppError::InvalidWeekId(format!(
            "years {start_year}..{end_year} are outside {}..={}",
            years.start(),
            years.end()
        )));
    }

    let Some(mut cursor) = NaiveDate::from_isoywd_opt(start_year, 1, Weekday::Mon) else {
        return Ok(out);
    };

    while cursor.iso_week().year() < end_year {
        let Some(end_date) = cursor.checked_add_days(Days::new(6)) else {
            break;
        };

        out.push(WeekRecord {
            week_id: week_id_for(cursor)?,
            start_date: cursor,
            end_date,
        });

        match cursor.checked_add_days(Days::new(7)) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn all_weeks(start: i32, end: i32) -> Vec<WeekRecord> {
        generate_weeks(start, end).unwrap()
    }

    fn wid(date: NaiveDate) -> WeekId {
        week_id_for(date).unwrap()
    }

    #[test]
    fn week_id_matches_iso_calendar_at_year_edges() {
        assert_eq!(wid(d(2021, 1, 1)).to_string(), "2020-53");
        assert_eq!(wid(d(2023, 1, 1)).to_string(), "2022-52");
        assert_eq!(wid(d(2025, 12, 29)).to_string(), "2026-01");
        assert_eq!(wid(d(2024, 12, 30)).to_string(), "2025-01");
        assert_eq!(wid(d(2024, 11, 25)).to_string(), "2024-48");
        assert_eq!(wid(d(2024, 1, 1)).to_string(), "2024-01");
    }

    #[test]
    fn every_day_of_a_week_shares_the_id() {
        let monday = d(2024, 11, 25);
        let expected = wid(monday);
        for offset in 0..7 {
            let day = monday + Days::new(offset);
            assert_eq!(wid(day), expected);
        }
        assert_ne!(wid(monday + Days::new(7)), expected);
    }

    #[test]
    fn generate_single_year_yields_its_iso_weeks() {
        let weeks = all_weeks(2024, 2025);
        assert_eq!(weeks.len(), 52);
        assert_eq!(weeks[0].week_id.to_string(), "2024-01");
        assert_eq!(weeks[0].start_date, d(2024, 1, 1));
        assert_eq!(weeks[51].week_id.to_string(), "2024-52");
        assert_eq!(weeks[51].end_date, d(2024, 12, 29));
        assert!(weeks.iter().all(|w| w.week_id.year() == 2024));
    }

    #[test]
    fn generate_long_year_includes_week_53() {
        let weeks = all_weeks(2020, 2021);
        assert_eq!(weeks.len(), 53);
        assert_eq!(weeks.last().unwrap().week_id.to_string(), "2020-53");
        assert_eq!(weeks.last().unwrap().end_date, d(2021, 1, 3));
    }

    #[test]
    fn first_week_may_start_in_previous_calendar_year() {
        let weeks = all_weeks(2026, 2027);
        assert_eq!(weeks[0].start_date, d(2025, 12, 29));
        assert_eq!(weeks[0].week_id.to_string(), "2026-01");
    }

    #[test]
    fn generated_weeks_are_contiguous() {
        let weeks = all_weeks(2023, 2027);
        assert_eq!(weeks.len(), 52 + 52 + 52 + 53);

        for w in &weeks {
            assert_eq!(w.end_date, w.start_date + Days::new(6));
            assert_eq!(w.start_date.weekday(), Weekday::Mon);
            assert_eq!(week_bounds(&w.week_id), (w.start_date, w.end_date));
        }
        for pair in weeks.windows(2) {
            assert_eq!(pair[0].end_date + Days::new(1), pair[1].start_date);
            assert!(pair[0].week_id < pair[1].week_id);
        }
    }

    #[test]
    fn empty_range_generates_nothing() {
        assert!(all_weeks(2025, 2025).is_empty());
        assert!(all_weeks(2026, 2024).is_empty());
    }

    #[test]
    fn generation_stays_within_four_digit_years() {
        let last = all_weeks(9999, 10000);
        assert_eq!(last.last().unwrap().week_id.year(), 9999);
        assert!(last.iter().all(|w| w.week_id.year() == 9999));

        assert!(matches!(
            generate_weeks(9999, 10001),
            Err(AppError::InvalidWeekId(_))
        ));
        assert!(generate_weeks(999, 1001).is_err());
        assert!(generate_weeks(i32::MIN, i32::MAX).is_err());
    }
}
