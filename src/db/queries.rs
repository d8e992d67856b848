//! Query & mutation engine over the `Week`, `Location` and `WorkDay` tables.
//!
//! Every function works on the single open connection and commits before it
//! returns (SQLite autocommit: one statement, one transaction). Lookups that
//! miss return `None` / an empty `Vec`; constraint failures are returned as
//! `AppError::IntegrityViolation` and written to the internal log.

use crate::core::calendar::week_id_for;
use crate::db::log::audit;
use crate::errors::{AppError, AppResult, Constraint};
use crate::models::{Location, RecentDay, WeekId, WeekSummary, WorkDay};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};

/// Default number of rows returned by `get_recent_days` (about three work weeks).
pub const DEFAULT_RECENT_DAYS: usize = 15;

const DATE_FMT: &str = "%Y-%m-%d";

fn date_to_db(date: NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

fn date_from_row(row: &Row, idx: usize) -> rusqlite::Result<NaiveDate> {
    let date_str: String = row.get(idx)?;
    NaiveDate::parse_from_str(&date_str, DATE_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })
}

fn map_work_day(row: &Row) -> rusqlite::Result<WorkDay> {
    Ok(WorkDay {
        work_date: date_from_row(row, 0)?,
        week_id: row.get(1)?,
        location: row.get(2)?,
    })
}

fn map_week_summary(row: &Row) -> rusqlite::Result<WeekSummary> {
    Ok(WeekSummary {
        week_id: row.get(0)?,
        start_date: date_from_row(row, 1)?,
        end_date: date_from_row(row, 2)?,
        office_count: row.get(3)?,
    })
}

/// Turn a failed mutation into an error, logging integrity violations.
fn mutation_error(conn: &Connection, operation: &'static str, key: String, err: rusqlite::Error) -> AppError {
    let err = AppError::from_mutation(operation, key, err);
    if let AppError::IntegrityViolation {
        operation,
        key,
        message,
        ..
    } = &err
    {
        audit(conn, "integrity_violation", &format!("{operation} {key}"), message);
    }
    err
}

/// Point lookup by date.
pub fn get_work_day(conn: &Connection, work_date: NaiveDate) -> AppResult<Option<WorkDay>> {
    let mut stmt = conn.prepare_cached(
        "SELECT work_date, week_number, location
         FROM WorkDay
         WHERE work_date = ?1",
    )?;

    Ok(stmt
        .query_row([date_to_db(work_date)], map_work_day)
        .optional()?)
}

/// Insert a new work day. Never overwrites: an already recorded date, an
/// unknown week or an unknown location all fail with `IntegrityViolation`.
pub fn new_work_day(
    conn: &Connection,
    work_date: NaiveDate,
    week_id: &WeekId,
    location: &str,
) -> AppResult<()> {
    let date_str = date_to_db(work_date);
    let key = format!("work_date={date_str}, week_id={week_id}, location={location}");

    if week_id_for(work_date)? != *week_id {
        let message = format!("{date_str} is not in week {week_id}");
        audit(
            conn,
            "integrity_violation",
            &format!("new_work_day {key}"),
            &message,
        );
        return Err(AppError::IntegrityViolation {
            operation: "new_work_day",
            key,
            constraint: Constraint::Other,
            message,
        });
    }

    conn.execute(
        "INSERT INTO WorkDay (work_date, week_number, location)
         VALUES (?1, ?2, ?3)",
        params![date_str, week_id, location],
    )
    .map_err(|e| mutation_error(conn, "new_work_day", key, e))?;

    audit(conn, "add", &date_str, &format!("Recorded {location} ({week_id})"));
    Ok(())
}

/// Record `location` for `work_date`, computing its ISO week.
pub fn record_work_day(conn: &Connection, work_date: NaiveDate, location: &str) -> AppResult<WorkDay> {
    let week_id = week_id_for(work_date)?;
    let location = Location::normalize(location)?;

    new_work_day(conn, work_date, &week_id, &location)?;

    get_work_day(conn, work_date)?
        .ok_or_else(|| AppError::Db(rusqlite::Error::QueryReturnedNoRows))
}

/// Change the location of a recorded date.
///
/// Returns `false` (and changes nothing) when the date was never recorded.
/// An unknown `new_location` fails with `IntegrityViolation`, row untouched.
pub fn set_location(conn: &Connection, work_date: NaiveDate, new_location: &str) -> AppResult<bool> {
    let date_str = date_to_db(work_date);
    let key = format!("work_date={date_str}, new_location={new_location}");

    let changed = conn
        .execute(
            "UPDATE WorkDay
             SET location = ?1
             WHERE work_date = ?2",
            params![new_location, date_str],
        )
        .map_err(|e| mutation_error(conn, "set_location", key, e))?;

    if changed > 0 {
        audit(conn, "edit", &date_str, &format!("Location set to {new_location}"));
    }

    Ok(changed > 0)
}

/// The `limit` most recent work days, newest first.
pub fn get_recent_days(conn: &Connection, limit: usize) -> AppResult<Vec<RecentDay>> {
    let mut stmt = conn.prepare_cached(
        "SELECT work_date, location
         FROM WorkDay
         ORDER BY work_date DESC
         LIMIT ?1",
    )?;

    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let rows = stmt.query_map([limit], |row| {
        Ok(RecentDay {
            work_date: date_from_row(row, 0)?,
            location: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Office-day count for every stored week in `[start, end]`, ascending.
///
/// `Week` drives the query (LEFT JOIN), so weeks without any recorded day
/// are still returned with a count of 0.
pub fn get_weekly_summary(
    conn: &Connection,
    start: &WeekId,
    end: &WeekId,
) -> AppResult<Vec<WeekSummary>> {
    let mut stmt = conn.prepare_cached(
        "SELECT w.week_number, w.week_start, w.week_end, COUNT(d.work_date)
         FROM Week w
         LEFT JOIN WorkDay d
                ON d.week_number = w.week_number
               AND d.location = ?3
         WHERE w.week_number BETWEEN ?1 AND ?2
         GROUP BY w.week_number, w.week_start, w.week_end
         ORDER BY w.week_number ASC",
    )?;

    let rows = stmt.query_map(params![start, end, Location::OFFICE], map_week_summary)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Office-day count of a single week (0 when nothing is recorded).
pub fn get_weekly_count(conn: &Connection, week_id: &WeekId) -> AppResult<u32> {
    let count: u32 = conn.query_row(
        "SELECT COUNT(*) FROM WorkDay WHERE week_number = ?1 AND location = ?2",
        params![week_id, Location::OFFICE],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// Mean weekly office count from week 01 of `year` through `end` inclusive.
///
/// `None` when no `Week` row falls in the range (nothing seeded, or `end`
/// before week 01). `Some(0.0)` when weeks exist but no office day was recorded.
pub fn get_ytd_average(conn: &Connection, year: i32, end: &WeekId) -> AppResult<Option<f64>> {
    let start = WeekId::first_of(year)?;

    let avg: Option<f64> = conn.query_row(
        "SELECT AVG(office_count) FROM (
             SELECT COUNT(d.work_date) AS office_count
             FROM Week w
             LEFT JOIN WorkDay d
                    ON d.week_number = w.week_number
                   AND d.location = ?3
             WHERE w.week_number BETWEEN ?1 AND ?2
             GROUP BY w.week_number
         )",
        params![start, end, Location::OFFICE],
        |row| row.get(0),
    )?;
    Ok(avg)
}

/// Append a location to the vocabulary. Returns `true` if it was new.
pub fn add_location(conn: &Connection, name: &str) -> AppResult<bool> {
    let name = Location::normalize(name)?;
    let inserted = conn
        .execute("INSERT OR IGNORE INTO Location (location) VALUES (?1)", [&name])
        .map_err(|e| mutation_error(conn, "add_location", name.clone(), e))?;

    if inserted > 0 {
        audit(conn, "location_add", &name, "Added location");
    }
    Ok(inserted > 0)
}

/// All known locations, alphabetically.
pub fn list_locations(conn: &Connection) -> AppResult<Vec<Location>> {
    let mut stmt = conn.prepare_cached("SELECT location FROM Location ORDER BY location ASC")?;
    let rows = stmt.query_map([], |row| row.get::<_, Location>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
