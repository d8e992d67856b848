use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::get_recent_days;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::paint_location;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recent { limit } = cmd {
        let pool = open_store(cfg)?;
        let days = get_recent_days(&pool.conn, limit.unwrap_or(cfg.recent_days))?;
        pool.close()?;

        if days.is_empty() {
            info("No work days recorded yet.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("Date", 10),
            Column::new("Day", 9),
            Column::new("Location", 10),
        ]);
        for d in &days {
            table.add_row(vec![
                d.work_date.to_string(),
                d.work_date.format("%A").to_string(),
                paint_location(&d.location),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
