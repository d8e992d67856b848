use crate::models::location::Location;
use crate::models::week_id::WeekId;
use chrono::NaiveDate;
use serde::Serialize;

/// One recorded attendance day (row of `WorkDay`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkDay {
    pub work_date: NaiveDate,
    pub week_id: WeekId,
    pub location: Location,
}

/// Row returned by the recent-days listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentDay {
    pub work_date: NaiveDate,
    pub location: Location,
}

/// One generated calendar week, ready to be stored in `Week`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekRecord {
    pub week_id: WeekId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A week with its number of office days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekSummary {
    pub week_id: WeekId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub office_count: u32,
}
