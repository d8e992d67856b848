use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::initialize::initialize_store;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use chrono::Datelike;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database file and schema
///  - the location vocabulary
///  - the Week table for the configured span of years
pub fn handle(cli: &Cli) -> AppResult<()> {
    let Commands::Init { start_year, years } = &cli.command else {
        return Ok(());
    };

    let mut cfg = Config::init_all(cli.db.clone(), cli.test)?;

    if let Some(y) = start_year {
        cfg.start_year = Some(*y);
    }
    if let Some(n) = years {
        if *n == 0 {
            return Err(AppError::Config("--years must be at least 1".to_string()));
        }
        cfg.year_span = *n;
    }

    let (first, end) = cfg.week_span(chrono::Local::now().year())?;

    println!("⚙️  Initializing worklocation…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &cfg.database);
    println!("📅 Weeks      : {}-01 .. {} (exclusive)", first, end);

    let pool = DbPool::new(&cfg.database)?;
    let summary = initialize_store(&pool.conn, &cfg.locations, first, end)?;
    pool.close()?;

    success(format!(
        "Database initialized: {} new location(s), {} new week(s)",
        summary.locations_added, summary.weeks_added
    ));
    println!("🎉 worklocation initialization completed!");
    Ok(())
}
