//! Schema setup. Every step is idempotent and safe to run on each startup.

use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Calendar weeks, keyed by `YYYY-WW`.
fn create_week_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS Week (
            week_number TEXT NOT NULL,
            week_start  TEXT NOT NULL,
            week_end    TEXT NOT NULL,
            PRIMARY KEY (week_number)
        );
        "#,
    )?;
    Ok(())
}

/// Controlled vocabulary of work locations.
fn create_location_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS Location (
            location TEXT NOT NULL PRIMARY KEY
        );
        "#,
    )?;
    Ok(())
}

/// One row per recorded calendar date.
fn create_workday_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS WorkDay (
            work_date   TEXT NOT NULL,
            week_number TEXT NOT NULL,
            location    TEXT NOT NULL,
            notes       TEXT NULL,
            PRIMARY KEY (work_date),
            FOREIGN KEY (week_number) REFERENCES Week (week_number),
            FOREIGN KEY (location) REFERENCES Location (location)
        );
        "#,
    )?;
    Ok(())
}

/// Index used by the weekly aggregates (join on `week_number`).
fn migrate_add_workday_week_index(conn: &Connection) -> Result<()> {
    let version = "20241201_0001_workday_week_index";

    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_workday_week ON WorkDay(week_number, location);",
    )?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added WorkDay(week_number, location) index')",
        [version],
    )?;

    success(format!("Migration applied: {version}"));
    Ok(())
}

/// Public entry point: create any missing table and apply pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    let fresh = !table_exists(conn, "WorkDay")?;

    create_week_table(conn)?;
    create_location_table(conn)?;
    create_workday_table(conn)?;

    if fresh {
        success("Created Week, Location and WorkDay tables.");
    }

    migrate_add_workday_week_index(conn)?;
    Ok(())
}
