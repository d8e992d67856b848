use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
    } = cmd
    {
        let pool = open_store(cfg)?;

        //
        // 1) INFO
        //
        if *info {
            stats::print_db_info(&pool, &cfg.database)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}", RED, RESET, integrity);
            }

            let mut stmt = pool.conn.prepare("PRAGMA foreign_key_check;")?;
            let violations: Vec<(String, Option<i64>, String)> = stmt
                .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
                .collect::<Result<_, _>>()?;
            drop(stmt);

            if violations.is_empty() {
                println!("{}✔ Foreign key check passed.{}\n", GREEN, RESET);
            } else {
                println!(
                    "{}✘ {} foreign key violation(s):{}",
                    RED,
                    violations.len(),
                    RESET
                );
                for (table, rowid, parent) in violations {
                    let rowid = rowid.map(|r| r.to_string()).unwrap_or_else(|| "?".to_string());
                    println!("    {table} rowid {rowid} → missing {parent} row");
                }
                println!();
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }

        pool.close()?;
    }

    Ok(())
}
