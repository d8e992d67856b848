use crate::errors::{AppError, AppResult};
use crate::models::WeekId;
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// `YYYY-MM-DD` or the keyword `today`.
pub fn parse_work_date(s: &str) -> AppResult<NaiveDate> {
    if s.trim().eq_ignore_ascii_case("today") {
        return Ok(today());
    }
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Optional `YYYY-WW` argument.
pub fn parse_optional_week(input: Option<&String>) -> AppResult<Option<WeekId>> {
    input.map(|s| s.parse::<WeekId>()).transpose()
}
