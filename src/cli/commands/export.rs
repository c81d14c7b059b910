use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::action::ActionResult;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Export {
        month,
        year,
        format,
        file,
        force,
    } = &cli.command
    else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;
    let rows = ExportLogic::export(&pool.conn, *format, file, *month, *year, *force)?;

    if cli.json {
        println!("{}", serde_json::to_string(&ActionResult::counted(rows))?);
    }
    Ok(())
}
