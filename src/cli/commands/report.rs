use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{ReportData, resolve_range};
use crate::errors::AppResult;
use crate::export::ReportLogic;
use crate::ui::messages::info;
use crate::utils::date::{self, parse_optional_week};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        format,
        file,
        year,
        week,
        force,
    } = cmd
    {
        let week = parse_optional_week(week.as_ref())?;
        let (year, end) = resolve_range(*year, week, date::today())?;

        let pool = open_store(cfg)?;
        let report = ReportData::build(&pool.conn, year, end)?;
        pool.close()?;

        let path = expand_tilde(file.as_deref().unwrap_or(&cfg.report_file));
        info(format!(
            "Building {} report for {}-01 .. {}",
            format.as_str(),
            year,
            end
        ));

        ReportLogic::export(&report, format, &path, &cfg.stylesheet, *force)?;
    }

    Ok(())
}
