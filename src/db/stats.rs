use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Row counts and recorded date range of the store.
#[derive(Debug, Clone, Default)]
pub struct StoreStats {
    pub weeks: i64,
    pub locations: i64,
    pub work_days: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub first_week: Option<String>,
    pub last_week: Option<String>,
}

pub fn collect(pool: &DbPool) -> AppResult<StoreStats> {
    let conn = &pool.conn;
    let count = |table: &str| -> rusqlite::Result<i64> {
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
    };

    let (first_date, last_date): (Option<String>, Option<String>) = conn
        .query_row("SELECT MIN(work_date), MAX(work_date) FROM WorkDay", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?
        .unwrap_or((None, None));

    let (first_week, last_week): (Option<String>, Option<String>) = conn
        .query_row("SELECT MIN(week_number), MAX(week_number) FROM Week", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?
        .unwrap_or((None, None));

    Ok(StoreStats {
        weeks: count("Week")?,
        locations: count("Location")?,
        work_days: count("WorkDay")?,
        first_date,
        last_date,
        first_week,
        last_week,
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let stats = collect(pool)?;
    println!("{}• Work days:{} {}{}{}", CYAN, RESET, GREEN, stats.work_days, RESET);
    println!("{}• Weeks:{} {}", CYAN, RESET, stats.weeks);
    println!("{}• Locations:{} {}", CYAN, RESET, stats.locations);

    //
    // 3) RANGES
    //
    let dash = || format!("{GREY}--{RESET}");
    println!("{}• Recorded dates:{}", CYAN, RESET);
    println!("    from: {}", stats.first_date.unwrap_or_else(dash));
    println!("    to:   {}", stats.last_date.unwrap_or_else(dash));
    println!("{}• Seeded weeks:{}", CYAN, RESET);
    println!("    from: {}", stats.first_week.unwrap_or_else(dash));
    println!("    to:   {}", stats.last_week.unwrap_or_else(dash));

    println!();
    Ok(())
}
