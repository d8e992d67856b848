use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::get_work_day;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, RESET};
use crate::utils::date;
use crate::utils::formatting::paint_location;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date } = cmd {
        let d = date::parse_work_date(date)?;
        let pool = open_store(cfg)?;

        match get_work_day(&pool.conn, d)? {
            Some(day) => {
                println!("{CYAN}• Date:{RESET}     {} ({})", day.work_date, day.work_date.format("%A"));
                println!("{CYAN}• Week:{RESET}     {}", day.week_id);
                println!("{CYAN}• Location:{RESET} {}", paint_location(&day.location));
            }
            None => info(format!("No work day recorded for {d}")),
        }

        pool.close()?;
    }

    Ok(())
}
