// src/export/model.rs

use crate::models::WeekSummary;
use serde::Serialize;

/// CSV column names, in `WeekRow` field order.
pub(crate) const CSV_HEADERS: [&str; 4] = ["week", "start_date", "end_date", "office_count"];

/// Flat row used by the CSV report and the HTML table.
#[derive(Serialize, Clone, Debug)]
pub struct WeekRow {
    pub week: String,
    pub start_date: String,
    pub end_date: String,
    pub office_count: u32,
}

impl From<&WeekSummary> for WeekRow {
    fn from(w: &WeekSummary) -> Self {
        Self {
            week: w.week_id.to_string(),
            start_date: w.start_date.format("%Y-%m-%d").to_string(),
            end_date: w.end_date.format("%Y-%m-%d").to_string(),
            office_count: w.office_count,
        }
    }
}

/// Column titles of the HTML report table.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["Week #", "Start Date", "End Date", "Count"]
}

pub(crate) fn week_to_row(w: &WeekRow) -> Vec<String> {
    vec![
        w.week.clone(),
        w.start_date.clone(),
        w.end_date.clone(),
        w.office_count.to_string(),
    ]
}

pub(crate) fn weeks_to_table(weeks: &[WeekSummary]) -> Vec<Vec<String>> {
    weeks.iter().map(|w| week_to_row(&WeekRow::from(w))).collect()
}
