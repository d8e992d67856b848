//! One-time seed import from a `Year,Month,Day,Location` CSV file.

use crate::core::calendar::week_id_for;
use crate::db::log::audit;
use crate::db::queries::{get_work_day, new_work_day};
use crate::errors::{AppError, AppResult};
use crate::models::Location;
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ImportRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "Day")]
    day: u32,
    #[serde(rename = "Location")]
    location: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: usize,
    pub skipped: usize,
}

/// Import every row through `new_work_day`.
///
/// Dates already recorded are skipped. Any other failure (bad date, unknown
/// location, week not seeded) stops the import; rows before it stay committed.
pub fn import_csv<R: Read>(conn: &Connection, reader: R) -> AppResult<ImportSummary> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut summary = ImportSummary::default();

    for (idx, record) in rdr.deserialize::<ImportRow>().enumerate() {
        // header is line 1
        let line = idx + 2;
        let row = record.map_err(|e| AppError::Import(format!("line {line}: {e}")))?;

        let date = NaiveDate::from_ymd_opt(row.year, row.month, row.day).ok_or_else(|| {
            AppError::InvalidDate(format!(
                "line {line}: {}-{:02}-{:02}",
                row.year, row.month, row.day
            ))
        })?;

        if get_work_day(conn, date)?.is_some() {
            summary.skipped += 1;
            continue;
        }

        let location = Location::normalize(&row.location)?;
        new_work_day(conn, date, &week_id_for(date)?, &location)?;
        summary.inserted += 1;
    }

    Ok(summary)
}

pub fn import_file(conn: &Connection, path: &Path) -> AppResult<ImportSummary> {
    let file = File::open(path)?;
    let summary = import_csv(conn, file)?;

    audit(
        conn,
        "import",
        &path.display().to_string(),
        &format!(
            "Imported {} day(s), skipped {} already recorded",
            summary.inserted, summary.skipped
        ),
    );

    Ok(summary)
}
