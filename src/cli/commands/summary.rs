use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::current_range;
use crate::db::queries::get_weekly_summary;
use crate::errors::AppResult;
use crate::models::WeekId;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{RESET, color_for_count};
use crate::utils::date::{self, parse_optional_week};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { from, to } = cmd {
        let (_, current_week) = current_range(date::today())?;

        let end = parse_optional_week(to.as_ref())?.unwrap_or(current_week);
        let start = match parse_optional_week(from.as_ref())? {
            Some(w) => w,
            None => WeekId::first_of(end.year())?,
        };

        let pool = open_store(cfg)?;
        let weeks = get_weekly_summary(&pool.conn, &start, &end)?;
        pool.close()?;

        if weeks.is_empty() {
            warning(format!("No weeks between {start} and {end}."));
            return Ok(());
        }

        header(format!("Weekly summary {start} .. {end}"));

        let mut table = Table::new(vec![
            Column::new("Week #", 7),
            Column::new("Start Date", 10),
            Column::new("End Date", 10),
            Column::new("Count", 5),
        ]);
        for w in &weeks {
            table.add_row(vec![
                w.week_id.to_string(),
                w.start_date.to_string(),
                w.end_date.to_string(),
                format!("{}{}{}", color_for_count(w.office_count), w.office_count, RESET),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
