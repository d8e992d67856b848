use crate::core::calendar::week_id_for;
use crate::db::queries::{get_weekly_count, get_weekly_summary, get_ytd_average};
use crate::errors::{AppError, AppResult};
use crate::models::{WeekId, WeekSummary};
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;

/// Everything a year-to-date attendance report shows.
#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub year: i32,
    pub end_week: WeekId,
    pub ytd_average: Option<f64>,
    pub current_week_count: u32,
    pub weeks: Vec<WeekSummary>,
}

impl ReportData {
    /// Read-only: weekly summary, YTD average and current week count.
    pub fn build(conn: &Connection, year: i32, end_week: WeekId) -> AppResult<Self> {
        let start = WeekId::first_of(year)?;

        Ok(Self {
            year,
            end_week,
            ytd_average: get_ytd_average(conn, year, &end_week)?,
            current_week_count: get_weekly_count(conn, &end_week)?,
            weeks: get_weekly_summary(conn, &start, &end_week)?,
        })
    }

    /// `ytd_average` as displayed: two decimals, or "no data".
    pub fn average_label(&self) -> String {
        match self.ytd_average {
            Some(avg) => format!("{avg:.2}"),
            None => "no data".to_string(),
        }
    }
}

/// Default report range for `today`: its ISO year, up to its ISO week.
pub fn current_range(today: NaiveDate) -> AppResult<(i32, WeekId)> {
    let end = week_id_for(today)?;
    Ok((end.year(), end))
}

/// Resolve the optional `--year` / `--week` arguments of `ytd` and `report`.
///
/// - nothing given → the current ISO year up to the current week
/// - only a week → that week's ISO year
/// - only a past or future year → the whole year (up to its last ISO week)
pub fn resolve_range(
    year: Option<i32>,
    week: Option<WeekId>,
    today: NaiveDate,
) -> AppResult<(i32, WeekId)> {
    let (current_year, current_week) = current_range(today)?;

    match (year, week) {
        (None, None) => Ok((current_year, current_week)),
        (None, Some(w)) => Ok((w.year(), w)),
        (Some(y), Some(w)) => Ok((y, w)),
        (Some(y), None) if y == current_year => Ok((y, current_week)),
        (Some(y), None) => {
            // Dec 28 always falls in the last ISO week of its year
            let dec28 = NaiveDate::from_ymd_opt(y, 12, 28)
                .ok_or_else(|| AppError::InvalidWeekId(format!("{y}-??")))?;
            Ok((y, week_id_for(dec28)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn current_range_uses_iso_year_near_new_year() {
        let (year, end) = current_range(d(2025, 12, 30)).unwrap();
        assert_eq!(year, 2026);
        assert_eq!(end.to_string(), "2026-01");
    }

    #[test]
    fn resolve_range_variants() {
        let today = d(2025, 3, 12);
        let (y, w) = resolve_range(None, None, today).unwrap();
        assert_eq!((y, w.to_string()), (2025, "2025-11".to_string()));

        let wk: WeekId = "2024-48".parse().unwrap();
        let (y, w) = resolve_range(None, Some(wk), today).unwrap();
        assert_eq!((y, w), (2024, wk));

        let (y, w) = resolve_range(Some(2020), None, today).unwrap();
        assert_eq!((y, w.to_string()), (2020, "2020-53".to_string()));

        let (y, w) = resolve_range(Some(2025), None, today).unwrap();
        assert_eq!((y, w.to_string()), (2025, "2025-11".to_string()));
    }
}
