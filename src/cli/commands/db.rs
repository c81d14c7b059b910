use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    else {
        return Ok(());
    };

    if !(*migrate || *check || *vacuum || *info) {
        return Ok(());
    }

    let mut pool = DbPool::new(&cfg.database)?;

    if *migrate {
        println!("{CYAN}▶ Running migrations…{RESET}");
        let applied = run_pending_migrations(&pool.conn)?;
        println!("{GREEN}✔ Migration completed ({applied} applied).{RESET}\n");
    }

    if *info {
        stats::print_db_info(&mut pool, &cfg.database)?;
    }

    if *check {
        println!("{CYAN}▶ Running integrity check…{RESET}");

        let integrity: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

        if integrity == "ok" {
            println!("{GREEN}✔ Integrity check passed.{RESET}\n");
        } else {
            println!("{RED}✘ Integrity check failed:{RESET} {integrity}\n");
        }
    }

    if *vacuum {
        println!("{CYAN}▶ Running VACUUM…{RESET}");
        pool.conn.execute_batch("VACUUM;")?;
        println!("{GREEN}✔ Vacuum completed.{RESET}\n");
    }

    Ok(())
}
