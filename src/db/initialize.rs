use crate::core::calendar::generate_weeks;
use crate::db::log::audit;
use crate::db::migrate::run_pending_migrations;
use crate::db::queries::add_location;
use crate::errors::AppResult;
use rusqlite::{Connection, params};

/// Rows inserted by `initialize_store`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitSummary {
    pub locations_added: usize,
    pub weeks_added: usize,
}

/// Create the schema. Safe to call on every startup.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}

/// Insert every generated week from `start_year` (inclusive) to `end_year`
/// (exclusive). Existing week ids are left untouched.
///
/// Returns the number of rows actually inserted. Years outside
/// `WeekId::YEARS` are rejected before anything is written.
pub fn fill_week_table(conn: &Connection, start_year: i32, end_year: i32) -> AppResult<usize> {
    let weeks = generate_weeks(start_year, end_year)?;

    let tx = conn.unchecked_transaction()?;
    let mut inserted = 0;
    {
        let mut stmt = tx.prepare_cached(
            "INSERT OR IGNORE INTO Week (week_number, week_start, week_end)
             VALUES (?1, ?2, ?3)",
        )?;

        for w in &weeks {
            inserted += stmt.execute(params![
                w.week_id,
                w.start_date.format("%Y-%m-%d").to_string(),
                w.end_date.format("%Y-%m-%d").to_string(),
            ])?;
        }
    }
    tx.commit()?;

    Ok(inserted)
}

/// Schema + location vocabulary + weeks for `[start_year, end_year)`.
pub fn initialize_store(
    conn: &Connection,
    locations: &[String],
    start_year: i32,
    end_year: i32,
) -> AppResult<InitSummary> {
    init_db(conn)?;

    let mut summary = InitSummary::default();
    for name in locations {
        if add_location(conn, name)? {
            summary.locations_added += 1;
        }
    }

    summary.weeks_added = fill_week_table(conn, start_year, end_year)?;

    audit(
        conn,
        "init",
        &format!("{start_year}..{end_year}"),
        &format!(
            "Store initialized: {} location(s), {} week(s) added",
            summary.locations_added, summary.weeks_added
        ),
    );

    Ok(summary)
}
