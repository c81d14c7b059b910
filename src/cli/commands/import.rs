use crate::cli::commands::report;
use crate::cli::parser::{Cli, Commands, ImportCommand};
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::template::write_template;
use crate::import::{ClassRow, StudentRow, import_classes, import_students, read_rows};
use crate::ui::messages::info;
use std::path::Path;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Import { action } = &cli.command else {
        return Ok(());
    };

    match action {
        ImportCommand::Classes { file } => {
            let rows = ClassRow::from_sheet(&read_rows(Path::new(file))?);
            info(format!("{} class rows read from {file}", rows.len()));

            let pool = DbPool::new(&cfg.database)?;
            let res = import_classes(&pool.conn, &rows);
            report(res, cli.json, |r| {
                format!("{} classes imported.", r.count().unwrap_or(0))
            })
        }
        ImportCommand::Students { file } => {
            let rows = StudentRow::from_sheet(&read_rows(Path::new(file))?);
            info(format!("{} student rows read from {file}", rows.len()));

            let mut pool = DbPool::new(&cfg.database)?;
            let res = import_students(&mut pool.conn, &rows);
            report(res, cli.json, |r| {
                format!("{} students imported.", r.count().unwrap_or(0))
            })
        }
        ImportCommand::Template { kind, file, force } => write_template(*kind, Path::new(file), *force),
    }
}
