pub mod add;
pub mod config;
pub mod db;
pub mod import;
pub mod init;
pub mod locations;
pub mod log;
pub mod recent;
pub mod report;
pub mod set;
pub mod show;
pub mod summary;
pub mod ytd;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::list_locations;
use crate::errors::{AppError, AppResult};
use crate::models::Location;
use rusqlite::Connection;

/// Open the configured store and make sure the schema exists.
pub(crate) fn open_store(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// Validate a user supplied location against the `Location` table.
pub(crate) fn resolve_location(conn: &Connection, name: &str) -> AppResult<Location> {
    if let Some(loc) = Location::lookup(conn, name)? {
        return Ok(loc);
    }

    let known: Vec<String> = list_locations(conn)?
        .into_iter()
        .map(|l| l.to_string())
        .collect();

    Err(AppError::InvalidLocation(format!(
        "'{}' (known locations: {})",
        name,
        if known.is_empty() {
            "none, run `worklocation init`".to_string()
        } else {
            known.join(", ")
        }
    )))
}
