use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier of one ISO-8601 calendar week, written `YYYY-WW`.
///
/// Ordering is `(iso_year, week)`, which is chronological. The textual form is
/// always zero padded (4-digit year, 2-digit week), so for years 1000..=9999 the
/// string order used by range queries in SQLite agrees with this `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekId {
    year: i32,
    week: u32,
}

impl WeekId {
    /// ISO years representable as a 4-digit `YYYY`.
    pub const YEARS: std::ops::RangeInclusive<i32> = 1000..=9999;

    /// Build a week id, checking that the ISO week exists in `year`.
    pub fn new(year: i32, week: u32) -> AppResult<Self> {
        if !Self::YEARS.contains(&year) {
            return Err(AppError::InvalidWeekId(format!("{year}-{week:02}")));
        }
        if NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).is_none() {
            return Err(AppError::InvalidWeekId(format!("{year}-{week:02}")));
        }
        Ok(Self { year, week })
    }

    /// The ISO week containing `date`.
    /// Fails when the ISO year falls outside `WeekId::YEARS`.
    pub fn for_date(date: NaiveDate) -> AppResult<Self> {
        let iw = date.iso_week();
        Self::new(iw.year(), iw.week())
    }

    /// Week 01 of `year`.
    pub fn first_of(year: i32) -> AppResult<Self> {
        Self::new(year, 1)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    /// Monday of this week.
    pub fn start_date(&self) -> NaiveDate {
        // validated in the constructors
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon).unwrap_or(NaiveDate::MIN)
    }

    /// Sunday of this week.
    pub fn end_date(&self) -> NaiveDate {
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Sun).unwrap_or(NaiveDate::MIN)
    }
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.week)
    }
}

impl FromStr for WeekId {
    type Err = AppError;

    /// Accepts `YYYY-WW`; an unpadded week (`2024-7`) is normalized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (y, w) = s
            .split_once('-')
            .ok_or_else(|| AppError::InvalidWeekId(s.to_string()))?;

        let digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
        if y.len() != 4 || w.is_empty() || w.len() > 2 || !digits(y) || !digits(w) {
            return Err(AppError::InvalidWeekId(s.to_string()));
        }

        let year: i32 = y
            .parse()
            .map_err(|_| AppError::InvalidWeekId(s.to_string()))?;
        let week: u32 = w
            .parse()
            .map_err(|_| AppError::InvalidWeekId(s.to_string()))?;

        Self::new(year, week).map_err(|_| AppError::InvalidWeekId(s.to_string()))
    }
}

impl Serialize for WeekId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl ToSql for WeekId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for WeekId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let s = value.as_str()?;
        s.parse().map_err(|e: AppError| FromSqlError::Other(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_zero_padded() {
        let w = WeekId::new(2024, 7).unwrap();
        assert_eq!(w.to_string(), "2024-07");
    }

    #[test]
    fn parse_normalizes_unpadded_week() {
        let w: WeekId = "2024-7".parse().unwrap();
        assert_eq!(w.to_string(), "2024-07");
    }

    #[test]
    fn parse_rejects_malformed_ids() {
        assert!("2024".parse::<WeekId>().is_err());
        assert!("24-07".parse::<WeekId>().is_err());
        assert!("2024-00".parse::<WeekId>().is_err());
        assert!("2024-123".parse::<WeekId>().is_err());
        assert!("abcd-01".parse::<WeekId>().is_err());
        assert!("2024-+1".parse::<WeekId>().is_err());
        assert!("+024-01".parse::<WeekId>().is_err());
        assert!("2024- 1".parse::<WeekId>().is_err());
    }

    #[test]
    fn for_date_rejects_years_without_four_digits() {
        let late = NaiveDate::from_ymd_opt(10000, 1, 5).unwrap();
        assert!(matches!(WeekId::for_date(late), Err(AppError::InvalidWeekId(_))));

        let early = NaiveDate::from_ymd_opt(999, 6, 1).unwrap();
        assert!(WeekId::for_date(early).is_err());

        // 9999-12-31 is a Friday, still in ISO year 9999
        let last = NaiveDate::from_ymd_opt(9999, 12, 31).unwrap();
        assert_eq!(WeekId::for_date(last).unwrap().year(), 9999);
    }

    #[test]
    fn week_53_only_exists_in_long_years() {
        assert!(WeekId::new(2020, 53).is_ok());
        assert!(WeekId::new(2026, 53).is_ok());
        assert!(WeekId::new(2024, 53).is_err());
    }

    #[test]
    fn order_matches_string_order() {
        let ids = ["2023-52", "2024-01", "2024-09", "2024-10", "2024-52", "2025-01"];
        let parsed: Vec<WeekId> = ids.iter().map(|s| s.parse().unwrap()).collect();

        for pair in parsed.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].to_string() < pair[1].to_string());
        }
    }

    #[test]
    fn bounds_span_monday_to_sunday() {
        let w = WeekId::new(2024, 48).unwrap();
        assert_eq!(w.start_date(), NaiveDate::from_ymd_opt(2024, 11, 25).unwrap());
        assert_eq!(w.end_date(), NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
    }
}
