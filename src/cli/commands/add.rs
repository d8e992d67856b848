use crate::cli::commands::{open_store, resolve_location};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::{get_work_day, record_work_day};
use crate::errors::{AppError, AppResult, Constraint};
use crate::ui::messages::{success, warning};
use crate::utils::date;

/// Record the location of a new work day.
///
/// Failures print a hint and return the error; `main` reports the error itself.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { date, location } = cmd {
        let d = date::parse_work_date(date)?;

        let pool = open_store(cfg)?;
        let loc = resolve_location(&pool.conn, location)?;

        match record_work_day(&pool.conn, d, loc.as_str()) {
            Ok(day) => {
                success(format!(
                    "Recorded {} for {} (week {})",
                    day.location, day.work_date, day.week_id
                ));
            }
            Err(e) if e.is_duplicate() => {
                let current = get_work_day(&pool.conn, d)?
                    .map(|w| w.location.to_string())
                    .unwrap_or_default();
                warning(format!(
                    "A location is already recorded for {d} ({current}). Use `set` to revise it."
                ));
                return Err(e);
            }
            Err(e @ AppError::IntegrityViolation {
                constraint: Constraint::ForeignKey,
                ..
            }) => {
                warning(format!(
                    "The week of {d} is not in the database. Run `worklocation init --start-year {}`.",
                    d.format("%G")
                ));
                return Err(e);
            }
            Err(e) => return Err(e),
        }

        pool.close()?;
    }

    Ok(())
}
