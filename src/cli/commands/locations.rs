use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::queries::{add_location, list_locations};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::formatting::paint_location;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Locations { add } = cmd {
        let pool = open_store(cfg)?;

        if let Some(name) = add {
            if add_location(&pool.conn, name)? {
                success(format!("Location '{}' added.", name.trim().to_lowercase()));
            } else {
                info(format!("Location '{}' already exists.", name.trim().to_lowercase()));
            }
        }

        for loc in list_locations(&pool.conn)? {
            println!("- {}", paint_location(&loc));
        }

        pool.close()?;
    }

    Ok(())
}
