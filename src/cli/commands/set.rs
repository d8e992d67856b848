use crate::cli::commands::{open_store, resolve_location};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::set_location;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date;

/// Revise the location of an existing work day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set { date, location } = cmd {
        let d = date::parse_work_date(date)?;

        let pool = open_store(cfg)?;
        let loc = resolve_location(&pool.conn, location)?;

        if set_location(&pool.conn, d, loc.as_str())? {
            success(format!("Location of {d} set to {loc}"));
        } else {
            warning(format!("No work day recorded for {d}: nothing changed."));
        }

        pool.close()?;
    }

    Ok(())
}
