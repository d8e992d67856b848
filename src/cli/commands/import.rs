use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::import_file;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        info(format!("Importing work days from {}", path.display()));

        let pool = open_store(cfg)?;
        let summary = import_file(&pool.conn, &path)?;
        pool.close()?;

        success(format!(
            "Imported {} work day(s), skipped {} already recorded.",
            summary.inserted, summary.skipped
        ));
    }

    Ok(())
}
