use crate::cli::commands::report;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::classes::ClassLogic;
use crate::core::ssb::{RollCall, SsbLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::{parse_date, to_db, today};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Ssb {
        class,
        date,
        present,
        absent,
    } = &cli.command
    else {
        return Ok(());
    };

    let date = match date {
        Some(d) => parse_date(d)?,
        None => today(),
    };

    let roll = if present.is_empty() {
        RollCall::Absent(absent.clone())
    } else {
        RollCall::Present(present.clone())
    };

    let mut pool = DbPool::new(&cfg.database)?;
    let class = ClassLogic::resolve(&pool.conn, class)?;
    let marks = SsbLogic::marks_for_class(&pool.conn, &class, &roll)?;

    let res = SsbLogic::save_attendance(&mut pool.conn, date, &marks);
    report(res, cli.json, |_| {
        format!(
            "SSB {} for class {}: {}/{} present.",
            to_db(&date),
            class.name,
            marks.iter().filter(|m| m.is_present).count(),
            marks.len()
        )
    })
}
