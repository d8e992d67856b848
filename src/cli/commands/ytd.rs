use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::resolve_range;
use crate::db::queries::{get_weekly_count, get_ytd_average};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, RESET, colorize_optional};
use crate::utils::date::{self, parse_optional_week};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ytd { year, week } = cmd {
        let week = parse_optional_week(week.as_ref())?;
        let (year, end) = resolve_range(*year, week, date::today())?;

        let pool = open_store(cfg)?;
        let average = get_ytd_average(&pool.conn, year, &end)?;
        let count = get_weekly_count(&pool.conn, &end)?;
        pool.close()?;

        let avg_label = match average {
            Some(avg) => format!("{avg:.2}"),
            None => "no data".to_string(),
        };

        println!("{CYAN}• Range:{RESET}              {year}-01 .. {end}");
        println!("{CYAN}• YTD average:{RESET}        {}", colorize_optional(&avg_label));
        println!("{CYAN}• Week {end} count:{RESET}  {count}");
    }

    Ok(())
}
